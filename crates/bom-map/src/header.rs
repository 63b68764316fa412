//! Header cleaning.

/// Lowercases a header and drops every character that is not a letter or digit.
///
/// `"Find No."`, `"find_no"` and `"FIND NO"` all clean to `"findno"`.
pub fn clean_header(header: &str) -> String {
    header
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_alphanumeric())
        .collect()
}
