#[cfg(test)]
mod tests {
    use crate::scan::{identifier_at, identifier_before, in_string_at, quote_count};

    const ESCAPED: &str = r#"foo "bar\" baz" qux"#;

    #[test]
    fn test_quote_count_outside_string() {
        for offset in 0..4 {
            assert_eq!(quote_count(ESCAPED, offset), 0, "offset {}", offset);
        }
    }

    #[test]
    fn test_quote_count_odd_inside_string() {
        // the escaped quote at 9 must not close the literal
        for offset in 5..=13 {
            assert!(in_string_at(ESCAPED, offset), "offset {} should be inside the string", offset);
        }
    }

    #[test]
    fn test_quote_count_even_after_closing_quote() {
        for offset in 14..ESCAPED.len() {
            assert_eq!(quote_count(ESCAPED, offset) % 2, 0, "offset {}", offset);
        }
    }

    #[test]
    fn test_quote_count_stops_at_newline() {
        let text = "Print(\"abc\ndef";
        let offset = text.len() - 1;
        assert_eq!(quote_count(text, offset), 0);
        assert!(!in_string_at(text, offset));
        // still inside on the first line
        assert!(in_string_at(text, 8));
    }

    #[test]
    fn test_quote_count_at_document_start() {
        assert_eq!(quote_count("\"abc", 0), 1);
        assert_eq!(quote_count("", 0), 0);
        // offsets past the end clamp to the last character
        assert_eq!(quote_count("a \"b", 100), 1);
    }

    #[test]
    fn test_identifier_at_exact_span() {
        let text = "int my_var2 = 1;";
        for offset in 4..=10 {
            assert_eq!(identifier_at(text, offset), "my_var2", "offset {}", offset);
        }
    }

    #[test]
    fn test_identifier_at_separator_takes_following_identifier() {
        let text = "int my_var2 = 1;";
        assert_eq!(identifier_at(text, 3), "my_var2");
        assert_eq!(identifier_at(text, 11), "");
    }

    #[test]
    fn test_identifier_at_end_of_text() {
        assert_eq!(identifier_at("x = counter", 10), "counter");
        assert_eq!(identifier_at("x = counter", 50), "counter");
        assert_eq!(identifier_at("", 0), "");
    }

    #[test]
    fn test_identifier_at_non_ascii_neighbours() {
        let text = "é value ü";
        let start = text.find("value").unwrap();
        assert_eq!(identifier_at(text, start + 2), "value");
    }

    #[test]
    fn test_identifier_before_skips_one_whitespace_run() {
        let text = "int foo  (";
        let paren = text.find('(').unwrap();
        assert_eq!(identifier_before(text, paren - 1), Some("foo"));
    }

    #[test]
    fn test_identifier_before_adjacent() {
        let text = "MoveObject(";
        assert_eq!(identifier_before(text, text.len() - 2), Some("MoveObject"));
    }

    #[test]
    fn test_identifier_before_across_newline() {
        let text = "Print\n    (";
        assert_eq!(identifier_before(text, text.len() - 2), Some("Print"));
    }

    #[test]
    fn test_identifier_before_none_for_operator() {
        let text = "x = (";
        assert_eq!(identifier_before(text, text.len() - 2), None);
        assert_eq!(identifier_before("   ", 2), None);
        assert_eq!(identifier_before("", 0), None);
    }
}
