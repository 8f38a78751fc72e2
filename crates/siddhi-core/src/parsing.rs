//! Lexical extraction of metadata from Siddhi app sources.
//!
//! Nothing here compiles or validates a Siddhi app. The parser only looks for
//! the `@App:name(...)` annotation on the first line and for `define table`
//! declarations anywhere in the text, and it never fails: a source that
//! follows neither convention simply yields nothing.

use std::sync::LazyLock;

use regex::Regex;

/// `@App:name('name')` or `@App:name("name")`, anchored at line start.
static APP_NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^@App:name\(['"](\w+)['"]\)"#).expect("app name pattern is valid")
});

/// `define table Name (`, matched anywhere in the source.
static TABLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"define\s+table\s+(\w+)\s*\(").expect("table pattern is valid")
});

/// A single word-character identifier, as accepted for app and table names.
static IDENTIFIER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\w+$").expect("identifier pattern is valid"));

/// Return the app name declared on the first line of `source`.
///
/// Returns an empty string when the first line is empty or does not carry
/// the annotation. A leading byte order mark is not part of the first line.
pub fn parse_app_name(source: &str) -> String {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let Some(first_line) = source.lines().next() else {
        return String::new();
    };
    if first_line.is_empty() {
        return String::new();
    }

    APP_NAME_PATTERN
        .captures(first_line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Return every table declared in `source`, in document order.
///
/// Duplicates are kept; each non-overlapping match yields one entry.
pub fn parse_table_names(source: &str) -> Vec<String> {
    TABLE_PATTERN
        .captures_iter(source)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Whether `value` is a single word-character identifier.
pub fn is_identifier(value: &str) -> bool {
    IDENTIFIER_PATTERN.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_name_single_quotes() {
        let source = "@App:name('StockApp')\ndefine stream S (a int);";
        assert_eq!(parse_app_name(source), "StockApp");
    }

    #[test]
    fn test_app_name_double_quotes() {
        assert_eq!(parse_app_name("@App:name(\"Stock_2\")"), "Stock_2");
    }

    #[test]
    fn test_app_name_tolerates_trailing_content() {
        let source = "@App:name('Orders') -- main app\n@App:description('x')";
        assert_eq!(parse_app_name(source), "Orders");
    }

    #[test]
    fn test_app_name_handles_crlf() {
        assert_eq!(parse_app_name("@App:name('Win')\r\nbody"), "Win");
    }

    #[test]
    fn test_app_name_empty_and_missing() {
        assert_eq!(parse_app_name(""), "");
        assert_eq!(parse_app_name("\n@App:name('Late')"), "");
        assert_eq!(parse_app_name("define stream S (a int);"), "");
    }

    #[test]
    fn test_app_name_after_byte_order_mark() {
        assert_eq!(parse_app_name("\u{feff}@App:name('Bom')\n"), "Bom");
        assert_eq!(parse_app_name("\u{feff}"), "");
        assert_eq!(parse_app_name("x\u{feff}@App:name('Bom')"), "");
    }

    #[test]
    fn test_app_name_must_start_the_line() {
        assert_eq!(parse_app_name("  @App:name('Indented')"), "");
        assert_eq!(parse_app_name("-- @App:name('Commented')"), "");
    }

    #[test]
    fn test_app_name_rejects_non_word_names() {
        assert_eq!(parse_app_name("@App:name('has space')"), "");
        assert_eq!(parse_app_name("@App:name('dash-name')"), "");
        assert_eq!(parse_app_name("@App:name('')"), "");
    }

    #[test]
    fn test_table_names_in_document_order() {
        let source = "@App:name('A')\n\
                      define table Foo (id string);\n\
                      define stream S (id string);\n\
                      define   table\tBar(id string);\n";
        assert_eq!(parse_table_names(source), vec!["Foo", "Bar"]);
    }

    #[test]
    fn test_table_names_keep_duplicates() {
        let source = "define table T (a int); define table T (a int);";
        assert_eq!(parse_table_names(source), vec!["T", "T"]);
    }

    #[test]
    fn test_table_names_empty_when_none_declared() {
        assert!(parse_table_names("").is_empty());
        assert!(parse_table_names("define stream S (a int);").is_empty());
        assert!(parse_table_names("define table NoParen;").is_empty());
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("OrderTable"));
        assert!(is_identifier("t_1"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("a b"));
        assert!(!is_identifier("T select *"));
    }
}
