//! String utilities shared by the generator.

/// Convert a `SCREAMING_SNAKE`, snake or kebab identifier to PascalCase.
///
/// Every word is capitalized and the rest lowercased, so dropdown constants
/// map to readable helper-name suffixes.
///
/// # Examples
/// ```
/// use cumin_core::utils::to_pascal_case;
/// assert_eq!(to_pascal_case("FROM_START"), "FromStart");
/// assert_eq!(to_pascal_case("last"), "Last");
/// assert_eq!(to_pascal_case("from-end"), "FromEnd");
/// ```
pub fn to_pascal_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for word in s.split(['_', '-', '.']).filter(|w| !w.is_empty()) {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            result.push(first.to_ascii_uppercase());
            result.push_str(&chars.as_str().to_ascii_lowercase());
        }
    }
    result
}
