use std::error::Error;

use crate::codegen::{ClassDefinition, CodeGen, imports_text, method_parameters_text};
use crate::template;

pub struct RecordCodeGen;

impl CodeGen for RecordCodeGen {
    fn generate(&self, class: &ClassDefinition) -> Result<String, Box<dyn Error>> {
        Ok(template::fill(
            include_str!("./templates/record.txt"),
            &[
                &class.package_name,
                &imports_text(&class.properties),
                &class.class_name,
                &method_parameters_text(&class.properties),
            ],
        ))
    }
}
