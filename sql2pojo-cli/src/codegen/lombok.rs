use std::error::Error;

use crate::codegen::{ClassDefinition, CodeGen, imports_text, properties_text};
use crate::template;

// Accessors, equality and toString come from the annotation processor, so
// only imports and fields are emitted.
pub struct LombokCodeGen;

impl CodeGen for LombokCodeGen {
    fn generate(&self, class: &ClassDefinition) -> Result<String, Box<dyn Error>> {
        Ok(template::fill(
            include_str!("./templates/lombok.txt"),
            &[
                &class.package_name,
                &imports_text(&class.properties),
                &class.class_name,
                &properties_text(&class.properties),
            ],
        ))
    }
}
