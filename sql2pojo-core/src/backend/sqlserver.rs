use std::error::Error;
use std::fmt::Write;

use tiberius::{AuthMethod, Client, Config};
use tokio::net::TcpStream;
use tokio_util::compat::TokioAsyncWriteCompatExt;

use crate::backend::ColumnMeta;

// tiberius has no prepare-only call, so the result shape is read from the
// server-side describe function; the user query is parsed there, never run.
const DESCRIBE_QUERY: &str = "SELECT name, system_type_name \
    FROM sys.dm_exec_describe_first_result_set(@P1, @P2, 0) \
    ORDER BY column_ordinal";

pub(crate) async fn column_metadata(
    url: &str,
    user: &str,
    password: &str,
    sql: &str,
) -> Result<Vec<ColumnMeta>, Box<dyn Error>> {
    let mut config = Config::from_jdbc_string(url)?;
    config.authentication(AuthMethod::sql_server(user, password));
    config.trust_cert();

    let tcp = TcpStream::connect(config.get_addr()).await?;
    tcp.set_nodelay(true)?;
    let mut client = Client::connect(config, tcp.compat_write()).await?;

    let (numbered, declarations) = number_placeholders(sql);
    let rows = client
        .query(DESCRIBE_QUERY, &[&numbered, &declarations])
        .await?
        .into_first_result()
        .await?;
    let columns = rows
        .iter()
        .map(|row| ColumnMeta {
            label: row.get::<&str, _>(0).unwrap_or_default().to_string(),
            class_name: class_name(row.get::<&str, _>(1).unwrap_or_default()).to_string(),
        })
        .collect();
    client.close().await?;
    Ok(columns)
}

// The describe function rejects undeclared parameters, so each `?` becomes a
// numbered `@Pn` declared as sql_variant.
fn number_placeholders(sql: &str) -> (String, String) {
    let mut numbered = String::with_capacity(sql.len());
    let mut declarations = Vec::new();
    for character in sql.chars() {
        if character == '?' {
            let index = declarations.len() + 1;
            let _ = write!(numbered, "@P{index}");
            declarations.push(format!("@P{index} sql_variant"));
        } else {
            numbered.push(character);
        }
    }
    (numbered, declarations.join(", "))
}

// mssql-jdbc-style report for system_type_name base tokens; length and
// precision suffixes like varchar(10) are stripped first.
fn class_name(system_type_name: &str) -> &'static str {
    let base = system_type_name
        .split('(')
        .next()
        .unwrap_or(system_type_name)
        .trim();
    match base {
        "bit" => "java.lang.Boolean",
        "tinyint" | "smallint" => "java.lang.Short",
        "int" => "java.lang.Integer",
        "bigint" => "java.lang.Long",
        "decimal" | "numeric" | "money" | "smallmoney" => "java.math.BigDecimal",
        "float" => "java.lang.Double",
        "real" => "java.lang.Float",
        "char" | "varchar" | "text" | "nchar" | "nvarchar" | "ntext" | "xml"
        | "uniqueidentifier" | "sysname" => "java.lang.String",
        "date" => "java.sql.Date",
        "time" => "java.sql.Time",
        "datetime" | "datetime2" | "smalldatetime" => "java.sql.Timestamp",
        "datetimeoffset" => "microsoft.sql.DateTimeOffset",
        "binary" | "varbinary" | "image" | "rowversion" | "timestamp" => "[B",
        _ => "java.lang.Object",
    }
}
