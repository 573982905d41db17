use alloc::string::String;
use alloc::vec::Vec;

/// Parses whitespace-separated integers typed by a user, e.g. `"1 3 5 7 9 11"`.
///
/// Characters other than digits are dropped from each token, except a leading `-`. Tokens that
/// still do not parse as `i64` are skipped. Returns `None` when nothing parses, so callers can
/// keep their current array while the user is mid-edit.
pub fn parse_values(input: &str) -> Option<Vec<i64>> {
    let values: Vec<i64> = input.split_whitespace().filter_map(parse_token).collect();
    if values.is_empty() { None } else { Some(values) }
}

fn parse_token(token: &str) -> Option<i64> {
    let mut cleaned = String::with_capacity(token.len());
    if token.starts_with('-') {
        cleaned.push('-');
    }
    cleaned.extend(token.chars().filter(char::is_ascii_digit));
    cleaned.parse().ok()
}
