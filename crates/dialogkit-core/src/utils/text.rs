use uuid::Uuid;

const ELLIPSIS: &str = "...";

/// Make sure `s` is at most `char_limit` characters long.
///
/// Longer strings are cut, and with `append_ellipsis` the last three
/// characters of the result become `...`.
pub fn cap_length(s: &str, char_limit: usize, append_ellipsis: bool) -> String {
    if s.chars().count() <= char_limit {
        return s.to_string();
    }

    if !append_ellipsis {
        return s.chars().take(char_limit).collect();
    }

    if char_limit <= ELLIPSIS.len() {
        return ELLIPSIS[..char_limit].to_string();
    }

    let mut result: String = s.chars().take(char_limit - ELLIPSIS.len()).collect();
    result.push_str(ELLIPSIS);
    result
}

/// Decimal representations of every integer in `start..end`
pub fn str_range_list(start: i64, end: i64) -> Vec<String> {
    (start..end).map(|e| e.to_string()).collect()
}

/// Random identifier: `prefix` followed by uuid4 hex, optionally shortened
pub fn generate_id(prefix: &str, max_chars: Option<usize>) -> String {
    let mut gid = Uuid::new_v4().simple().to_string();
    if let Some(max) = max_chars.filter(|m| *m > 0) {
        gid.truncate(max);
    }
    format!("{}{}", prefix, gid)
}

/// Whether a number has no fractional part, whatever its type
pub fn is_int(value: f64) -> bool {
    value.is_finite() && value == value.trunc()
}

/// Same check for loosely typed values, anything non-numeric is not an int
pub fn is_int_value(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Number(n) => {
            n.is_i64() || n.is_u64() || n.as_f64().is_some_and(is_int)
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cap_length() {
        assert_eq!(cap_length("abcdefgh", 5, true), "ab...");
        assert_eq!(cap_length("abc", 5, true), "abc");
        assert_eq!(cap_length("abcde", 5, true), "abcde");
        assert_eq!(cap_length("abcdefgh", 5, false), "abcde");
        assert_eq!(cap_length("", 5, true), "");
    }

    #[test]
    fn test_cap_length_counts_characters() {
        assert_eq!(cap_length("ünïcödé text", 6, true), "ünï...");
        assert_eq!(cap_length("😀😀😀😀", 4, true), "😀😀😀😀");
        assert_eq!(cap_length("😀😀😀😀😀", 4, false), "😀😀😀😀");
    }

    #[test]
    fn test_cap_length_tiny_limits() {
        assert_eq!(cap_length("abcdef", 3, true), "...");
        assert_eq!(cap_length("abcdef", 2, true), "..");
        assert_eq!(cap_length("abcdef", 0, true), "");
    }

    #[test]
    fn test_str_range_list() {
        assert_eq!(str_range_list(0, 3), vec!["0", "1", "2"]);
        assert_eq!(str_range_list(-1, 1), vec!["-1", "0"]);
        assert!(str_range_list(5, 5).is_empty());
    }

    #[test]
    fn test_generate_id() {
        let id = generate_id("", None);
        assert_eq!(id.len(), 32);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));

        let id = generate_id("sender_", Some(8));
        assert!(id.starts_with("sender_"));
        assert_eq!(id.len(), "sender_".len() + 8);

        assert_ne!(generate_id("", None), generate_id("", None));
        assert_eq!(generate_id("x", Some(0)).len(), 33);
    }

    #[test]
    fn test_is_int() {
        assert!(is_int(3.0));
        assert!(is_int(-2.0));
        assert!(!is_int(3.5));
        assert!(!is_int(f64::NAN));
        assert!(!is_int(f64::INFINITY));
    }

    #[test]
    fn test_is_int_value() {
        assert!(is_int_value(&json!(7)));
        assert!(is_int_value(&json!(7.0)));
        assert!(!is_int_value(&json!(7.25)));
        assert!(!is_int_value(&json!("7")));
        assert!(!is_int_value(&json!(null)));
    }
}
