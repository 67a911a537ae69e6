use std::fmt;

/// Message shown when the forecast is requested without a location.
pub const EMPTY_LOCATION_MESSAGE: &str = "Please enter a valid location!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    EmptyLocation,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::EmptyLocation => f.write_str(EMPTY_LOCATION_MESSAGE),
        }
    }
}

impl std::error::Error for SearchError {}

/// Names starting with `query`, ignoring case, in index order.
///
/// An empty query yields no suggestions.
pub fn suggestions<'a, I, S>(names: I, query: &str) -> Vec<String>
where
    I: IntoIterator<Item = &'a S>,
    S: AsRef<str> + 'a + ?Sized,
{
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    names
        .into_iter()
        .map(<S as AsRef<str>>::as_ref)
        .filter(|name| name.to_lowercase().starts_with(&needle))
        .map(str::to_string)
        .collect()
}

/// The location to navigate with, or the reason not to navigate.
pub fn validate_submission(query: &str) -> Result<String, SearchError> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        Err(SearchError::EmptyLocation)
    } else {
        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAMES: [&str; 4] = ["Rishikesh", "Varanasi", "Rajmahal", "Haridwar"];

    #[test]
    fn prefix_match_ignores_case() {
        assert_eq!(suggestions(&NAMES, "Ri"), vec!["Rishikesh"]);
        assert_eq!(suggestions(&NAMES, "r"), vec!["Rishikesh", "Rajmahal"]);
        assert_eq!(suggestions(&NAMES, "VARA"), vec!["Varanasi"]);
    }

    #[test]
    fn prefix_only_not_substring() {
        assert!(suggestions(&NAMES, "wAr").is_empty());
    }

    #[test]
    fn empty_query_suggests_nothing() {
        assert!(suggestions(&NAMES, "").is_empty());
    }

    #[test]
    fn works_over_owned_strings() {
        let owned: Vec<String> = NAMES.iter().map(|s| s.to_string()).collect();
        assert_eq!(suggestions(&owned, "ha"), vec!["Haridwar"]);
    }

    #[test]
    fn blank_submission_is_rejected() {
        assert_eq!(validate_submission(""), Err(SearchError::EmptyLocation));
        assert_eq!(validate_submission("   "), Err(SearchError::EmptyLocation));
        assert_eq!(
            SearchError::EmptyLocation.to_string(),
            "Please enter a valid location!"
        );
    }

    #[test]
    fn submission_is_trimmed() {
        assert_eq!(validate_submission("  Patna ").unwrap(), "Patna");
    }
}
