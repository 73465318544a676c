use crate::naming;

/// Pseudo-type assigned to binary columns; no backend reports it directly.
pub const BYTE_ARRAY: &str = "byte[]";

const BINARY_SIGNATURE: &str = "[B";

pub fn original_type_name(reported: &str) -> String {
    if reported == BINARY_SIGNATURE {
        return BYTE_ARRAY.to_string();
    }
    reported.to_string()
}

/// Display name used in generated declarations. String and Integer resolve
/// before the generic `java.lang` rule and never reach the
/// lowercase-first-letter fallback.
pub fn simple_type_name(original: &str) -> String {
    if original.contains("java.lang.String") {
        return "String".to_string();
    }
    if original.contains("java.lang.Integer") {
        return "int".to_string();
    }
    if original.contains("java.lang") {
        return naming::lowercase_first(last_segment(original));
    }
    if original == BYTE_ARRAY {
        return original.to_string();
    }
    last_segment(original).to_string()
}

fn last_segment(type_name: &str) -> &str {
    type_name.rsplit('.').next().unwrap_or(type_name)
}

#[cfg(test)]
mod tests {
    use crate::types::{original_type_name, simple_type_name};

    #[test]
    fn simple_names_for_boxed_string_and_integer() {
        assert_eq!(simple_type_name("java.lang.String"), "String");
        assert_eq!(simple_type_name("java.lang.Integer"), "int");
    }

    #[test]
    fn simple_names_for_other_builtins() {
        assert_eq!(simple_type_name("java.lang.Boolean"), "boolean");
        assert_eq!(simple_type_name("java.lang.Long"), "long");
        assert_eq!(simple_type_name("java.lang.Double"), "double");
        assert_eq!(simple_type_name("java.lang.Float"), "float");
    }

    #[test]
    fn byte_array_passes_through() {
        assert_eq!(simple_type_name("byte[]"), "byte[]");
    }

    #[test]
    fn unqualified_fallback_keeps_case() {
        assert_eq!(simple_type_name("java.sql.Timestamp"), "Timestamp");
        assert_eq!(simple_type_name("java.math.BigDecimal"), "BigDecimal");
        assert_eq!(simple_type_name("microsoft.sql.DateTimeOffset"), "DateTimeOffset");
    }

    #[test]
    fn binary_signature_resolves_to_byte_array() {
        assert_eq!(original_type_name("[B"), "byte[]");
        assert_eq!(original_type_name("java.lang.String"), "java.lang.String");
    }
}
