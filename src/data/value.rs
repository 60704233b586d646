/// Parse a raw tabular cell into a finite number.
///
/// Blank cells, unparseable text and non-finite results (`NaN`, `inf`) are all
/// absent. Surrounding whitespace is ignored; trailing garbage is not.
///
/// This is stricter than a leading-prefix parse: `"50000abc"` is absent rather
/// than 50000, so a malformed cell is drawn with the fallback color instead of
/// a plausible-looking number.
#[must_use]
pub fn parse_value(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}
