/// Make `name` usable as a single CSS class token.
///
/// Anything outside `[A-Za-z0-9_-]` becomes `_`, and a leading digit gets a
/// `_` prefix. Empty input yields `"unknown"`.
#[must_use]
pub fn css_class(name: &str) -> String {
    if name.is_empty() {
        return "unknown".to_string();
    }
    let mut class: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if class.starts_with(|c: char| c.is_ascii_digit()) {
        class.insert(0, '_');
    }
    class
}
