//! Request/query types

use todo_read_core::{
    DEFAULT_LIMIT, DEFAULT_PAGE, ListTodosParams, SortField, SortOrder, ValidationError,
};

/// Raw `GET /todos` query string.
///
/// Everything arrives as text so that bad integers surface as
/// `INVALID_PARAMETER` rather than an extractor rejection.
#[derive(Debug, Default)]
pub struct ListTodosQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub status: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
}

impl ListTodosQuery {
    /// Collects decoded `key=value` pairs. A repeated key keeps its last
    /// value; unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "page" => &mut query.page,
                "limit" => &mut query.limit,
                "status" => &mut query.status,
                "sort" => &mut query.sort,
                "order" => &mut query.order,
                _ => continue,
            };
            *slot = Some(value);
        }
        query
    }

    /// Applies defaults and parses the integer parameters.
    ///
    /// Range and enum checks stay with the query service.
    pub fn into_params(self) -> Result<ListTodosParams, ValidationError> {
        Ok(ListTodosParams {
            page: parse_int("page", self.page.as_deref(), DEFAULT_PAGE)?,
            limit: parse_int("limit", self.limit.as_deref(), DEFAULT_LIMIT)?,
            status: self.status,
            sort: self.sort.unwrap_or_else(|| SortField::default().as_str().to_owned()),
            order: self.order.unwrap_or_else(|| SortOrder::default().as_str().to_owned()),
        })
    }
}

fn parse_int(field: &str, raw: Option<&str>, default: i64) -> Result<i64, ValidationError> {
    raw.map_or(Ok(default), |s| {
        s.parse::<i64>().map_err(|_| ValidationError::not_an_integer(field))
    })
}
