mod mysql;
mod oracle;
mod sqlite;
mod sqlserver;

use std::error::Error;
use std::fmt::{self, Display};

#[derive(Debug, Clone)]
pub enum BackendError {
    UnsupportedUrl { url: String },
}

impl Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendError::UnsupportedUrl { url } => write!(
                f,
                "Unsupported database URL \"{url}\" (Only accepts mysql/sqlserver/oracle/sqlite)"
            ),
        }
    }
}

impl Error for BackendError {}

/// Raw per-column connector output. `class_name` is still in driver-reported
/// form; binary columns come back as the `[B` signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMeta {
    pub label: String,
    pub class_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    MySql,
    SqlServer,
    Oracle,
    Sqlite,
}

impl Backend {
    /// Pure classification over the URL; no connection is opened here.
    pub fn from_url(url: &str) -> Result<Self, BackendError> {
        if url.contains("mysql") {
            Ok(Backend::MySql)
        } else if url.contains("sqlserver") {
            Ok(Backend::SqlServer)
        } else if url.contains("oracle") {
            Ok(Backend::Oracle)
        } else if url.contains("sqlite") {
            Ok(Backend::Sqlite)
        } else {
            Err(BackendError::UnsupportedUrl {
                url: url.to_string(),
            })
        }
    }

    /// Opens one connection, prepares the statement without executing it and
    /// reads label plus type descriptor for every output column. The
    /// connection is closed on all paths, including preparation failure.
    pub async fn column_metadata(
        self,
        url: &str,
        user: &str,
        password: &str,
        sql: &str,
    ) -> Result<Vec<ColumnMeta>, Box<dyn Error>> {
        // Tolerate original-style URLs; dispatch already happened on the raw
        // string.
        let url = url.strip_prefix("jdbc:").unwrap_or(url);
        match self {
            Backend::MySql => mysql::column_metadata(url, user, password, sql).await,
            Backend::SqlServer => sqlserver::column_metadata(url, user, password, sql).await,
            Backend::Oracle => oracle::column_metadata(url, user, password, sql).await,
            // SQLite has no credentials; callers pass `_` placeholders.
            Backend::Sqlite => sqlite::column_metadata(url, sql).await,
        }
    }
}

impl Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::MySql => write!(f, "mysql"),
            Backend::SqlServer => write!(f, "sqlserver"),
            Backend::Oracle => write!(f, "oracle"),
            Backend::Sqlite => write!(f, "sqlite"),
        }
    }
}
