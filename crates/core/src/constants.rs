//! Shared constants for todo-read.

/// First page number; pages are 1-based.
pub const DEFAULT_PAGE: i64 = 1;

/// Page size when the caller does not specify one.
pub const DEFAULT_LIMIT: i64 = 20;

/// Smallest accepted page size.
pub const MIN_LIMIT: i64 = 1;

/// Largest accepted page size.
pub const MAX_LIMIT: i64 = 100;

/// Name reported to the observability side-channel for the list query.
pub const LIST_TODOS_QUERY: &str = "list_todos";

/// Service name used in logs and health responses.
pub const SERVICE_NAME: &str = "todo-read";

/// PostgreSQL connection pool: maximum connections.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 20;

/// PostgreSQL connection pool: acquire timeout in seconds.
pub const PG_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// PostgreSQL connection pool: idle timeout in seconds.
pub const PG_POOL_IDLE_TIMEOUT_SECS: u64 = 300;

/// Default PostgreSQL port.
pub const DEFAULT_DB_PORT: u16 = 5432;

/// Default PostgreSQL `sslmode`.
pub const DEFAULT_DB_SSL_MODE: &str = "require";

/// Default PostgreSQL connect timeout in seconds.
pub const DEFAULT_DB_CONNECT_TIMEOUT_SECS: u64 = 30;
