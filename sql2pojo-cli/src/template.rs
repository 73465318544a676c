/// Substitutes `{0}`-style indexed slots into an opaque template body. A
/// slot may appear more than once; anything that is not `{digits}` with an
/// in-range index is kept verbatim, so plain braces in template text are
/// safe.
pub fn fill(template: &str, values: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        match slot_index(tail) {
            Some((index, len)) if index < values.len() => {
                out.push_str(values[index]);
                rest = &tail[len..];
            }
            _ => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn slot_index(text: &str) -> Option<(usize, usize)> {
    let end = text.find('}')?;
    let digits = &text[1..end];
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    Some((digits.parse().ok()?, end + 1))
}

#[cfg(test)]
mod tests {
    use crate::template::fill;

    #[test]
    fn fills_indexed_slots() {
        assert_eq!(fill("package {0};", &["com.example"]), "package com.example;");
        assert_eq!(fill("{1}-{0}", &["a", "b"]), "b-a");
    }

    #[test]
    fn repeated_slots_share_one_value() {
        assert_eq!(fill("{0} o1 = ({0}) obj;", &["Person"]), "Person o1 = (Person) obj;");
    }

    #[test]
    fn keeps_plain_braces() {
        assert_eq!(
            fill("public class {0} {\n}\n", &["Person"]),
            "public class Person {\n}\n"
        );
        assert_eq!(fill("{not a slot}", &["x"]), "{not a slot}");
    }

    #[test]
    fn keeps_out_of_range_slots() {
        assert_eq!(fill("{0} {1}", &["only"]), "only {1}");
    }
}
