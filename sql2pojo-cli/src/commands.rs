use std::error::Error;

use clap::Parser;
use sql2pojo_core::describe_query;

use crate::codegen::{ClassDefinition, CodeGen, Template};

#[derive(Parser, Debug, Clone)]
#[command(name = "sql2pojo", bin_name = "sql2pojo")]
#[must_use]
pub struct Convert {
    /// Output shape: class, lombok or record
    template: String,
    /// Package of the generated class
    package_name: String,
    /// Name of the generated class
    class_name: String,
    /// Database URL (mysql/sqlserver/oracle/sqlite)
    url: String,
    /// User id
    user: String,
    /// Password
    password: String,
    /// SQL text; named parameters are allowed
    sql: String,
}

impl Convert {
    pub fn run(self) -> Result<String, Box<dyn Error>> {
        let template: Template = self.template.parse()?;

        let runtime = tokio::runtime::Runtime::new()?;
        let properties = runtime.block_on(describe_query(
            &self.url,
            &self.user,
            &self.password,
            &self.sql,
        ))?;
        tracing::debug!(columns = properties.len(), "metadata extracted");

        let class = ClassDefinition {
            package_name: self.package_name,
            class_name: self.class_name,
            properties: properties.into_boxed_slice(),
        };
        template.codegen().generate(&class)
    }
}
