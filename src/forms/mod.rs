pub mod auth;
pub mod brands;
pub mod products;

/// Collapses internal whitespace, trims the ends and strips control
/// characters from single-line user input.
pub(crate) fn sanitize_inline_text(input: &str) -> String {
    let mut sanitized = String::with_capacity(input.len());
    let mut previous_whitespace = false;

    for ch in input.trim().chars() {
        if ch.is_whitespace() {
            if !previous_whitespace {
                sanitized.push(' ');
                previous_whitespace = true;
            }
        } else if ch.is_control() {
            continue;
        } else {
            sanitized.push(ch);
            previous_whitespace = false;
        }
    }

    sanitized
}

/// Trims multi-line user input while preserving interior line breaks.
pub(crate) fn sanitize_multiline_text(input: &str) -> String {
    input.trim().to_string()
}
