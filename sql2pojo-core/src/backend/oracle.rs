use std::error::Error;
use std::fmt::Write;

use oracle::Connection;
use oracle::sql_type::{OracleType, ToSql};

use crate::backend::ColumnMeta;

// The driver only exposes column descriptions through a result set, so the
// statement runs with NULL binds and no row is ever fetched.
pub(crate) async fn column_metadata(
    url: &str,
    user: &str,
    password: &str,
    sql: &str,
) -> Result<Vec<ColumnMeta>, Box<dyn Error>> {
    let connect_string = connect_descriptor(url).to_string();
    let user = user.to_string();
    let password = password.to_string();
    let (numbered, bind_count) = number_placeholders(sql);

    // The driver is blocking; keep it off the async workers.
    let columns = tokio::task::spawn_blocking(
        move || -> Result<Vec<ColumnMeta>, oracle::Error> {
            let connection = Connection::connect(&user, &password, &connect_string)?;
            let mut statement = connection.statement(&numbered).build()?;
            let binds: Vec<Option<String>> = vec![None; bind_count];
            let bind_refs: Vec<&dyn ToSql> = binds.iter().map(|bind| bind as &dyn ToSql).collect();
            let rows = statement.query(&bind_refs)?;
            let columns = rows
                .column_info()
                .iter()
                .map(|info| ColumnMeta {
                    label: info.name().to_string(),
                    class_name: class_name(info.oracle_type()).to_string(),
                })
                .collect();
            drop(rows);
            statement.close()?;
            connection.close()?;
            Ok(columns)
        },
    )
    .await??;
    Ok(columns)
}

// `oracle://host:port/service` and `jdbc:oracle:thin:@//host:port/service`
// both reduce to an easy-connect descriptor.
fn connect_descriptor(url: &str) -> &str {
    if let Some((_, descriptor)) = url.split_once('@') {
        return descriptor;
    }
    url.strip_prefix("oracle://").unwrap_or(url)
}

// Oracle binds are named or numbered, never `?`.
fn number_placeholders(sql: &str) -> (String, usize) {
    let mut numbered = String::with_capacity(sql.len());
    let mut count = 0;
    for character in sql.chars() {
        if character == '?' {
            count += 1;
            let _ = write!(numbered, ":{count}");
        } else {
            numbered.push(character);
        }
    }
    (numbered, count)
}

fn class_name(column_type: &OracleType) -> &'static str {
    match column_type {
        OracleType::Varchar2(_)
        | OracleType::NVarchar2(_)
        | OracleType::Char(_)
        | OracleType::NChar(_)
        | OracleType::Long
        | OracleType::CLOB
        | OracleType::NCLOB
        | OracleType::Rowid => "java.lang.String",
        OracleType::Number(_, _) | OracleType::Float(_) => "java.math.BigDecimal",
        OracleType::Int64 | OracleType::UInt64 => "java.lang.Long",
        OracleType::BinaryFloat => "java.lang.Float",
        OracleType::BinaryDouble => "java.lang.Double",
        OracleType::Date
        | OracleType::Timestamp(_)
        | OracleType::TimestampTZ(_)
        | OracleType::TimestampLTZ(_) => "java.sql.Timestamp",
        OracleType::Raw(_) | OracleType::LongRaw => "[B",
        OracleType::BLOB | OracleType::BFILE => "java.sql.Blob",
        OracleType::Boolean => "java.lang.Boolean",
        _ => "java.lang.Object",
    }
}

#[cfg(test)]
mod tests {
    use oracle::sql_type::OracleType;

    use crate::backend::oracle::{class_name, connect_descriptor, number_placeholders};

    #[test]
    fn maps_core_types() {
        assert_eq!(class_name(&OracleType::Varchar2(30)), "java.lang.String");
        assert_eq!(class_name(&OracleType::Number(10, 0)), "java.math.BigDecimal");
        assert_eq!(class_name(&OracleType::Date), "java.sql.Timestamp");
        assert_eq!(class_name(&OracleType::Raw(2000)), "[B");
        assert_eq!(class_name(&OracleType::BLOB), "java.sql.Blob");
    }

    #[test]
    fn numbers_placeholders() {
        let (numbered, count) = number_placeholders("SELECT * FROM person WHERE id = ? OR id = ?");
        assert_eq!(numbered, "SELECT * FROM person WHERE id = :1 OR id = :2");
        assert_eq!(count, 2);
    }

    #[test]
    fn reduces_urls_to_connect_descriptors() {
        assert_eq!(
            connect_descriptor("oracle://localhost:1521/XEPDB1"),
            "localhost:1521/XEPDB1"
        );
        assert_eq!(
            connect_descriptor("oracle:thin:@//localhost:1521/XEPDB1"),
            "//localhost:1521/XEPDB1"
        );
    }
}
