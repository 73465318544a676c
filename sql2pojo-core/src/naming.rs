const SEPARATORS: &[char] = &['.', '_', ' ', '$', '@', '#'];

/// Converts a raw column label into a camelCase property identifier. A
/// lowercase-to-uppercase boundary counts as a word break, so `fooBar`,
/// `foo_bar` and `FooBar` all normalize to `fooBar`.
pub fn property_name(label: &str) -> String {
    let mut split = String::with_capacity(label.len() + 4);
    let mut prev_lower = false;
    for character in label.chars() {
        if prev_lower && character.is_ascii_uppercase() {
            split.push('_');
        }
        prev_lower = character.is_ascii_lowercase();
        split.push(character);
    }
    to_camel_case(&split)
}

fn to_camel_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut boundary = false;
    for character in text.chars() {
        if SEPARATORS.contains(&character) {
            boundary = true;
            continue;
        }
        if out.is_empty() {
            out.push(character.to_ascii_lowercase());
            boundary = false;
        } else if boundary {
            out.push(character.to_ascii_uppercase());
            boundary = false;
        } else {
            out.push(character.to_ascii_lowercase());
        }
    }
    out
}

pub fn capitalize_first(text: &str) -> String {
    let mut characters = text.chars();
    match characters.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + characters.as_str(),
        None => String::new(),
    }
}

pub fn lowercase_first(text: &str) -> String {
    let mut characters = text.chars();
    match characters.next() {
        Some(first) => first.to_ascii_lowercase().to_string() + characters.as_str(),
        None => String::new(),
    }
}
