//! Comma-joined list encoding for list-valued keys.
//!
//! There is no escaping: an element that contains `,` splits into several
//! elements on decode. Peers already depend on this format, so any escaping
//! scheme has to be introduced here and negotiated, not patched in at call
//! sites.

/// Separator between list elements
pub const LIST_SEPARATOR: char = ',';

/// Join elements with the list separator.
///
/// An empty slice encodes to the empty string.
pub fn encode_list<S: AsRef<str>>(items: &[S]) -> String {
    let mut out = String::with_capacity(items.iter().map(|s| s.as_ref().len() + 1).sum());
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(LIST_SEPARATOR);
        }
        out.push_str(item.as_ref());
    }
    out
}

/// Split an encoded list back into elements.
///
/// The empty string decodes to a single empty element, so an encoded empty
/// list does not come back empty.
pub fn decode_list(encoded: &str) -> Vec<String> {
    encoded.split(LIST_SEPARATOR).map(str::to_string).collect()
}

/// True if the element would not survive an encode/decode cycle
pub fn needs_escaping(item: &str) -> bool {
    item.contains(LIST_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode_in_order() {
        let ids = ["conn-1", "conn-2", "conn-3"];
        let encoded = encode_list(&ids);
        assert_eq!(encoded, "conn-1,conn-2,conn-3");
        assert_eq!(decode_list(&encoded), ids);
    }

    #[test]
    fn test_single_element() {
        assert_eq!(encode_list(&["only"]), "only");
        assert_eq!(decode_list("only"), vec!["only".to_string()]);
    }

    #[test]
    fn test_embedded_comma_splits() {
        let encoded = encode_list(&["a,b", "c"]);
        assert_eq!(encoded, "a,b,c");
        assert_eq!(decode_list(&encoded), vec!["a", "b", "c"]);
        assert!(needs_escaping("a,b"));
        assert!(!needs_escaping("ab"));
    }

    #[test]
    fn test_empty_list_decodes_to_one_empty_element() {
        let empty: [&str; 0] = [];
        let encoded = encode_list(&empty);
        assert_eq!(encoded, "");
        assert_eq!(decode_list(&encoded), vec![String::new()]);
    }

    #[test]
    fn test_empty_elements_preserved() {
        assert_eq!(decode_list(",x,"), vec!["", "x", ""]);
    }
}
