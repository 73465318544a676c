use std::error::Error;

use serde::{Deserialize, Serialize};

pub mod backend;
pub mod naming;
pub mod rewrite;
pub mod types;

use crate::backend::{Backend, ColumnMeta};
use crate::rewrite::ParametrizedQuery;

/// One result-set column, in column order: the backend-reported Java class
/// name, the display type used in generated declarations, and the camelCase
/// property derived from the column label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PropertyType {
    pub original_type_name: String,
    pub simple_type_name: String,
    pub property_name: String,
}

impl PropertyType {
    fn from_column(column: ColumnMeta) -> Self {
        let original_type_name = types::original_type_name(&column.class_name);
        let simple_type_name = types::simple_type_name(&original_type_name);
        let property_name = naming::property_name(&column.label);
        Self {
            original_type_name,
            simple_type_name,
            property_name,
        }
    }
}

/// Rewrites named placeholders, prepares the statement against the backend
/// family encoded in the URL and returns one descriptor per output column.
/// The query is never executed.
pub async fn describe_query(
    url: &str,
    user: &str,
    password: &str,
    sql: &str,
) -> Result<Vec<PropertyType>, Box<dyn Error>> {
    let ParametrizedQuery { raw_query, params } = rewrite::to_positional(sql)?;
    if !params.is_empty() {
        tracing::debug!(?params, "rewrote named placeholders");
    }
    let backend = Backend::from_url(url)?;
    tracing::debug!(%backend, "reading result set metadata");
    let columns = backend.column_metadata(url, user, password, &raw_query).await?;
    Ok(columns.into_iter().map(PropertyType::from_column).collect())
}
