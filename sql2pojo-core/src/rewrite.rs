use regex::Regex;
use std::error::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParametrizedQuery {
    pub raw_query: String,
    pub params: Vec<String>,
}

// Everything that may terminate a `:name` placeholder. A colon inside a
// string literal still matches structurally; that limitation is kept as-is.
const DELIMITERS: &str = r#"\s~`!@#%^&*()\-+=|\\}\]{\[:;"'?/>.<,"#;

pub fn to_positional(query: &str) -> Result<ParametrizedQuery, Box<dyn Error>> {
    let placeholder_pattern = Regex::new(&format!(":([^{DELIMITERS}]+)([{DELIMITERS}]|$)"))?;

    let mut params = Vec::new();
    let raw_query = placeholder_pattern
        .replace_all(query, |captures: &regex::Captures| {
            params.push(captures[1].to_string());
            format!("?{}", &captures[2])
        })
        .into_owned();

    Ok(ParametrizedQuery { raw_query, params })
}
