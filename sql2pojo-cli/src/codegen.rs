pub mod class;
pub mod lombok;
pub mod record;

use std::error::Error;
use std::fmt::{self, Display};
use std::str::FromStr;

use sql2pojo_core::PropertyType;

#[derive(Debug, Clone)]
pub enum CodegenError {
    UnknownTemplate { name: String },
}

impl Display for CodegenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodegenError::UnknownTemplate { name } => write!(
                f,
                "Incorrect template type \"{name}\" (Only accepts class/lombok/record)"
            ),
        }
    }
}

impl Error for CodegenError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    Class,
    Lombok,
    Record,
}

impl FromStr for Template {
    type Err = CodegenError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "class" => Ok(Template::Class),
            "lombok" => Ok(Template::Lombok),
            "record" => Ok(Template::Record),
            _ => Err(CodegenError::UnknownTemplate {
                name: name.to_string(),
            }),
        }
    }
}

impl Template {
    pub fn codegen(self) -> Box<dyn CodeGen> {
        match self {
            Template::Class => Box::new(class::ClassCodeGen),
            Template::Lombok => Box::new(lombok::LombokCodeGen),
            Template::Record => Box::new(record::RecordCodeGen),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ClassDefinition {
    pub package_name: String,
    pub class_name: String,
    pub properties: Box<[PropertyType]>,
}

pub trait CodeGen {
    fn generate(&self, class: &ClassDefinition) -> Result<String, Box<dyn Error>>;
}

// java.lang is always visible and byte[] is not a class, so neither is
// imported. Duplicates collapse to one line.
pub(crate) fn imports_text(properties: &[PropertyType]) -> String {
    let mut imports: Vec<String> = Vec::new();
    for property in properties {
        let original = &property.original_type_name;
        if original.contains("java.lang") || original.contains("byte[]") {
            continue;
        }
        let import = format!("import {original};");
        if !imports.contains(&import) {
            imports.push(import);
        }
    }
    match imports.is_empty() {
        true => String::new(),
        false => format!("\n{}\n", imports.join("\n")),
    }
}

pub(crate) fn properties_text(properties: &[PropertyType]) -> String {
    properties
        .iter()
        .map(|property| {
            format!(
                "    private {} {};",
                property.simple_type_name, property.property_name
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub(crate) fn method_parameters_text(properties: &[PropertyType]) -> String {
    properties
        .iter()
        .map(|property| format!("{} {}", property.simple_type_name, property.property_name))
        .collect::<Vec<_>>()
        .join(", ")
}

pub(crate) fn assignment(property_name: &str) -> String {
    format!("this.{property_name} = {property_name};")
}

pub(crate) fn assignments_text(properties: &[PropertyType]) -> String {
    properties
        .iter()
        .map(|property| assignment(&property.property_name))
        .collect::<Vec<_>>()
        .join("\n        ")
}

pub(crate) fn parameters_text(properties: &[PropertyType]) -> String {
    properties
        .iter()
        .map(|property| property.property_name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub(crate) fn equalities_text(properties: &[PropertyType]) -> String {
    properties
        .iter()
        .map(|property| format!("Objects.equals(this.{0}, o1.{0})", property.property_name))
        .collect::<Vec<_>>()
        .join(" && ")
}

pub(crate) fn to_string_text(class_name: &str, properties: &[PropertyType]) -> String {
    let mut text = format!("\"{class_name}[");
    for (index, property) in properties.iter().enumerate() {
        if index > 0 {
            text.push_str(", ");
        }
        text.push_str(&format!("{0}=\" + {0} + \"", property.property_name));
    }
    text.push_str("]\"");
    text
}


#[cfg(test)]
mod tests {
    use crate::codegen::fixtures::{attachment, person};
    use crate::codegen::{
        CodeGen, CodegenError, Template, equalities_text, imports_text, parameters_text,
        properties_text, to_string_text,
    };

    #[test]
    fn unknown_template_is_rejected_with_the_accepted_set() {
        let err = "bogus".parse::<Template>().unwrap_err();
        assert!(matches!(err, CodegenError::UnknownTemplate { .. }));
        assert_eq!(
            err.to_string(),
            "Incorrect template type \"bogus\" (Only accepts class/lombok/record)"
        );
    }

    #[test]
    fn template_names_parse() {
        assert_eq!("class".parse::<Template>().unwrap(), Template::Class);
        assert_eq!("lombok".parse::<Template>().unwrap(), Template::Lombok);
        assert_eq!("record".parse::<Template>().unwrap(), Template::Record);
    }

    #[test]
    fn all_modes_cover_every_descriptor() {
        for template in [Template::Class, Template::Lombok, Template::Record] {
            let code = template.codegen().generate(&person()).unwrap();
            assert!(code.contains("int id"), "{template:?}");
            assert!(code.contains("String fullName"), "{template:?}");
        }
    }

    #[test]
    fn imports_skip_builtins_and_byte_arrays() {
        assert_eq!(imports_text(&person().properties), "");
        assert_eq!(
            imports_text(&attachment().properties),
            "\nimport java.sql.Timestamp;\n"
        );
    }

    #[test]
    fn one_declaration_per_descriptor() {
        let text = properties_text(&person().properties);
        assert_eq!(text, "    private int id;\n    private String fullName;");
    }

    #[test]
    fn equality_chain_and_parameter_list() {
        let properties = person().properties;
        assert_eq!(
            equalities_text(&properties),
            "Objects.equals(this.id, o1.id) && Objects.equals(this.fullName, o1.fullName)"
        );
        assert_eq!(parameters_text(&properties), "id, fullName");
    }

    #[test]
    fn to_string_brackets_the_class_name() {
        assert_eq!(
            to_string_text("Person", &person().properties),
            "\"Person[id=\" + id + \", fullName=\" + fullName + \"]\""
        );
    }
}
