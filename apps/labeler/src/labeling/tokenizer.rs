//! Skill tokenizer — raw skills strings into normalized token sets.

use indexmap::IndexSet;

/// Characters treated as skill delimiters. Any run of them, mixed or
/// repeated, separates two tokens.
const DELIMITERS: &[char] = &[';', ',', '|', '\\', '/'];

/// Splits a raw skills field into trimmed, lowercased, deduplicated tokens.
///
/// Absent input degrades to an empty set; this never fails. Produced tokens
/// are never empty and never contain a delimiter character.
pub fn tokenize(raw: Option<&str>) -> IndexSet<String> {
    let Some(raw) = raw else {
        return IndexSet::new();
    };
    raw.split(DELIMITERS)
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_input_yields_empty_set() {
        assert!(tokenize(None).is_empty());
    }

    #[test]
    fn test_empty_string_yields_empty_set() {
        assert!(tokenize(Some("")).is_empty());
        assert!(tokenize(Some("   ")).is_empty());
    }

    #[test]
    fn test_single_token_is_idempotent() {
        let tokens = tokenize(Some("python"));
        assert_eq!(tokens.len(), 1);
        assert!(tokens.contains("python"));
    }

    #[test]
    fn test_mixed_delimiters() {
        let tokens = tokenize(Some("Python; SQL,Excel|R/Go\\C++"));
        let expected: Vec<&str> = vec!["python", "sql", "excel", "r", "go", "c++"];
        assert_eq!(tokens.iter().map(String::as_str).collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_delimiter_runs_produce_no_empty_tokens() {
        let tokens = tokenize(Some(";;Python,,; |SQL//"));
        assert_eq!(tokens.len(), 2);
        assert!(tokens.contains("python"));
        assert!(tokens.contains("sql"));
    }

    #[test]
    fn test_lowercased_duplicates_collapse() {
        let tokens = tokenize(Some("SQL; sql; Sql"));
        assert_eq!(tokens.len(), 1);
    }

    #[test]
    fn test_whitespace_trimmed() {
        let tokens = tokenize(Some("  data analysis ;  machine learning  "));
        assert!(tokens.contains("data analysis"));
        assert!(tokens.contains("machine learning"));
    }
}
