use std::error::Error;
use std::str::FromStr;

use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{Column, ConnectOptions, Connection, Executor, Statement, TypeInfo};

use crate::backend::ColumnMeta;

pub(crate) async fn column_metadata(url: &str, sql: &str) -> Result<Vec<ColumnMeta>, Box<dyn Error>> {
    let options = SqliteConnectOptions::from_str(url)?;
    let mut connection = options.connect().await?;
    let prepared = connection.prepare(sql).await;
    let columns = match prepared {
        Ok(statement) => statement
            .columns()
            .iter()
            .map(|column| ColumnMeta {
                label: column.name().to_string(),
                class_name: class_name(column.type_info().name()).to_string(),
            })
            .collect(),
        Err(err) => {
            connection.close().await.ok();
            return Err(err.into());
        }
    };
    connection.close().await?;
    Ok(columns)
}

// The five native tokens have fixed origin types; everything else the driver
// reports goes through the generic resolution.
fn class_name(type_name: &str) -> &'static str {
    match type_name {
        "INTEGER" => "java.lang.Integer",
        "TEXT" => "java.lang.String",
        "BLOB" => "java.sql.Blob",
        "REAL" => "java.lang.Float",
        "NUMERIC" => "java.math.BigDecimal",
        "BOOLEAN" => "java.lang.Boolean",
        "DATE" => "java.sql.Date",
        "TIME" => "java.sql.Time",
        "DATETIME" => "java.sql.Timestamp",
        _ => "java.lang.Object",
    }
}

#[cfg(test)]
mod tests {
    use crate::backend::sqlite::class_name;

    #[test]
    fn maps_native_tokens() {
        assert_eq!(class_name("INTEGER"), "java.lang.Integer");
        assert_eq!(class_name("TEXT"), "java.lang.String");
        assert_eq!(class_name("BLOB"), "java.sql.Blob");
        assert_eq!(class_name("REAL"), "java.lang.Float");
        assert_eq!(class_name("NUMERIC"), "java.math.BigDecimal");
    }

    #[test]
    fn unknown_tokens_fall_back_to_object() {
        assert_eq!(class_name("NULL"), "java.lang.Object");
    }
}
