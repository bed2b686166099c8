//! Search-term normalization and name matching.
//!
//! One rule everywhere: trim the term, case-fold it, and match it as a
//! substring of the case-folded name. A term that is empty after trimming
//! applies no filtering at all.

/// Normalize a raw search input into a matchable term.
///
/// Returns `None` when the input is absent or whitespace-only, in which
/// case the caller skips filtering entirely.
pub(crate) fn term(search: Option<&str>) -> Option<String> {
    let trimmed = search?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Case-insensitive substring test against an already-normalized term.
pub(crate) fn name_matches(name: &str, term: &str) -> bool {
    name.to_lowercase().contains(term)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_absent() {
        assert_eq!(term(None), None);
    }

    #[test]
    fn test_term_empty_and_whitespace() {
        assert_eq!(term(Some("")), None);
        assert_eq!(term(Some("   ")), None);
        assert_eq!(term(Some("\t\n")), None);
    }

    #[test]
    fn test_term_trims_and_folds() {
        assert_eq!(term(Some("  Screen ")), Some("screen".to_string()));
    }

    #[test]
    fn test_name_matches_case_insensitive() {
        assert!(name_matches("Screen Protector", "screen"));
        assert!(name_matches("BATTERY", "batt"));
        assert!(!name_matches("Battery", "screen"));
    }

    #[test]
    fn test_name_matches_substring_anywhere() {
        assert!(name_matches("Replacement Screen", "screen"));
        assert!(name_matches("Screen", "ree"));
    }
}
