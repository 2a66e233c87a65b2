use crate::error::{EvalError, Result};

/// Product name for a library path such as `/vercel/next.js` or
/// `/websites/react_dev`: hosting suffixes and `docs` are dropped, `.` and
/// `/_` become `-`, and the last path segment is kept, lowercased.
pub fn identify_product(library: &str) -> String {
    let stripped = replace_any(library, &[".com", ".org", "docs"], "");
    let normalized = replace_any(&stripped, &[".", "/_"], "-").to_lowercase();
    normalized
        .rsplit('/')
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}

pub fn check_same_product(products: &[String]) -> Result<String> {
    match products.split_first() {
        Some((first, rest)) if rest.iter().all(|product| product == first) => Ok(first.clone()),
        _ => Err(EvalError::ProductMismatch(products.to_vec())),
    }
}

/// Single left-to-right pass replacing the first matching pattern at each
/// position, so replacements never create new matches.
fn replace_any(input: &str, patterns: &[&str], with: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(ch) = rest.chars().next() {
        if let Some(pattern) = patterns.iter().find(|pattern| rest.starts_with(**pattern)) {
            output.push_str(with);
            rest = &rest[pattern.len()..];
        } else {
            output.push(ch);
            rest = &rest[ch.len_utf8()..];
        }
    }
    output
}
