use std::error::Error;

use sql2pojo_core::naming::capitalize_first;

use crate::codegen::{
    ClassDefinition, CodeGen, assignment, assignments_text, equalities_text, imports_text,
    method_parameters_text, parameters_text, properties_text, to_string_text,
};
use crate::template;

pub struct ClassCodeGen;

impl CodeGen for ClassCodeGen {
    fn generate(&self, class: &ClassDefinition) -> Result<String, Box<dyn Error>> {
        Ok(template::fill(
            include_str!("./templates/class.txt"),
            &[
                &class.package_name,
                &imports_text(&class.properties),
                &class.class_name,
                &properties_text(&class.properties),
                &constructors_text(class),
                &methods_text(class),
                &equalities_text(&class.properties),
                &parameters_text(&class.properties),
                &to_string_text(&class.class_name, &class.properties),
            ],
        ))
    }
}

fn constructors_text(class: &ClassDefinition) -> String {
    template::fill(
        include_str!("./templates/constructor.txt"),
        &[
            &class.class_name,
            &method_parameters_text(&class.properties),
            &assignments_text(&class.properties),
        ],
    )
    .trim_end()
    .to_string()
}

fn methods_text(class: &ClassDefinition) -> String {
    class
        .properties
        .iter()
        .map(|property| {
            template::fill(
                include_str!("./templates/method.txt"),
                &[
                    &property.simple_type_name,
                    &capitalize_first(&property.property_name),
                    &property.property_name,
                    &assignment(&property.property_name),
                ],
            )
            .trim_end()
            .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use crate::codegen::CodeGen;
    use crate::codegen::class::ClassCodeGen;
    use crate::codegen::fixtures::{attachment, person};

    #[test]
    fn generates_the_full_class() {
        let code = ClassCodeGen.generate(&person()).unwrap();
        let expected = r#"package com.example;

import java.util.Objects;

public class Person {
    private int id;
    private String fullName;

    public Person() {
    }

    public Person(int id, String fullName) {
        this.id = id;
        this.fullName = fullName;
    }

    public int getId() {
        return this.id;
    }

    public void setId(int id) {
        this.id = id;
    }

    public String getFullName() {
        return this.fullName;
    }

    public void setFullName(String fullName) {
        this.fullName = fullName;
    }

    @Override
    public boolean equals(Object obj) {
        if (this == obj) {
            return true;
        }

        if (!(obj instanceof Person)) {
            return false;
        }

        Person o1 = (Person) obj;

        return Objects.equals(this.id, o1.id) && Objects.equals(this.fullName, o1.fullName);
    }

    @Override
    public int hashCode() {
        return Objects.hash(id, fullName);
    }

    @Override
    public String toString() {
        return "Person[id=" + id + ", fullName=" + fullName + "]";
    }
}
"#;
        assert_eq!(code, expected);
    }

    #[test]
    fn declares_each_field_exactly_once() {
        let code = ClassCodeGen.generate(&person()).unwrap();
        assert_eq!(code.matches("private int id;").count(), 1);
        assert_eq!(code.matches("private String fullName;").count(), 1);
    }

    #[test]
    fn byte_arrays_stay_out_of_the_import_block() {
        let code = ClassCodeGen.generate(&attachment()).unwrap();
        assert_eq!(code.matches("import java.sql.Timestamp;").count(), 1);
        assert!(!code.contains("import byte[];"));
        assert!(code.contains("private byte[] payload;"));
        assert!(code.contains("public byte[] getPayload()"));
    }
}
