use anyhow::Result;
use std::path::PathBuf;
use todo_read_core::ListTodosParams;

use crate::{open_backend, query_service};

pub(crate) async fn run(params: ListTodosParams, seed: Option<PathBuf>) -> Result<()> {
    let service = query_service(open_backend(seed.as_deref()).await?);
    let response = service.list_todos(&params).await?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
