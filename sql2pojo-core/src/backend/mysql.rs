use std::error::Error;
use std::str::FromStr;

use sqlx::mysql::MySqlConnectOptions;
use sqlx::{Column, ConnectOptions, Connection, Executor, Statement, TypeInfo};

use crate::backend::ColumnMeta;

pub(crate) async fn column_metadata(
    url: &str,
    user: &str,
    password: &str,
    sql: &str,
) -> Result<Vec<ColumnMeta>, Box<dyn Error>> {
    let options = MySqlConnectOptions::from_str(url)?
        .username(user)
        .password(password);
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

// Connector/J-style report for the type names sqlx surfaces.
fn class_name(type_name: &str) -> &'static str {
    match type_name {
        "BOOLEAN" | "BIT" => "java.lang.Boolean",
        "TINYINT" | "TINYINT UNSIGNED" | "SMALLINT" | "SMALLINT UNSIGNED" | "MEDIUMINT"
        | "INT" => "java.lang.Integer",
        "MEDIUMINT UNSIGNED" | "INT UNSIGNED" | "BIGINT" => "java.lang.Long",
        "BIGINT UNSIGNED" => "java.math.BigInteger",
        "FLOAT" => "java.lang.Float",
        "DOUBLE" => "java.lang.Double",
        "DECIMAL" => "java.math.BigDecimal",
        "DATE" | "YEAR" => "java.sql.Date",
        "TIME" => "java.sql.Time",
        "DATETIME" | "TIMESTAMP" => "java.sql.Timestamp",
        "CHAR" | "VARCHAR" | "TINYTEXT" | "TEXT" | "MEDIUMTEXT" | "LONGTEXT" | "ENUM" | "SET"
        | "JSON" => "java.lang.String",
        "BINARY" | "VARBINARY" | "TINYBLOB" | "BLOB" | "MEDIUMBLOB" | "LONGBLOB" | "GEOMETRY" => {
            "[B"
        }
        _ => "java.lang.Object",
    }
}
