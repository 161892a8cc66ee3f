//! Boolean matching rule over a resource and its attachments.

use crate::query::MatchMode;
use crate::resource::Resource;

/// A compiled matching rule built from query tokens and a match mode.
///
/// The predicate is a plain value: the search executor hands the same
/// instance to both the windowed fetch and the count query, so the two can
/// never disagree on matching logic.
///
/// A token matches a resource when it is a case-insensitive substring of
/// the title or of at least one attachment's `original_name`. Substring
/// semantics, not token equality: `algo` matches `algorithms-notes.pdf`.
/// With no tokens the predicate accepts every resource (an unconstrained
/// search means "browse all").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcePredicate {
    tokens: Vec<String>,
    mode: MatchMode,
}

impl ResourcePredicate {
    /// Build a predicate from already-normalized tokens (see
    /// [`crate::analysis::tokenize`]) and a match mode.
    pub fn new(tokens: Vec<String>, mode: MatchMode) -> Self {
        ResourcePredicate { tokens, mode }
    }

    /// The tokens this predicate was built from.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// True when the predicate has no tokens and accepts everything.
    pub fn is_unconstrained(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Evaluate the predicate against one resource.
    ///
    /// Evaluation is per resource, so a store iterating resources gets
    /// inherently distinct results no matter how many attachments matched.
    pub fn matches(&self, resource: &Resource) -> bool {
        if self.tokens.is_empty() {
            return true;
        }
        match self.mode {
            MatchMode::All => self.tokens.iter().all(|t| token_matches(t, resource)),
            MatchMode::Any => self.tokens.iter().any(|t| token_matches(t, resource)),
        }
    }

    /// True when any token is a case-insensitive substring of the title.
    ///
    /// This is the relevance ranker's tier test; it is false for an empty
    /// token list, so unconstrained searches get no title boost.
    pub fn title_matches_any(&self, resource: &Resource) -> bool {
        if self.tokens.is_empty() {
            return false;
        }
        let title = resource.title.to_lowercase();
        self.tokens.iter().any(|t| title.contains(t.as_str()))
    }
}

/// One token against title plus attachment names. Tokens are already
/// lowercase; the resource side is lowercased here.
fn token_matches(token: &str, resource: &Resource) -> bool {
    if resource.title.to_lowercase().contains(token) {
        return true;
    }
    resource
        .attachments
        .iter()
        .any(|a| a.original_name.to_lowercase().contains(token))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::Attachment;

    fn resource(title: &str, attachment_names: &[&str]) -> Resource {
        let mut r = Resource::new(title);
        for name in attachment_names {
            r = r.with_attachment(Attachment::new(*name, format!("stored-{name}")));
        }
        r
    }

    fn predicate(tokens: &[&str], mode: MatchMode) -> ResourcePredicate {
        ResourcePredicate::new(tokens.iter().map(|t| t.to_string()).collect(), mode)
    }

    #[test]
    fn test_empty_tokens_match_everything() {
        let pred = predicate(&[], MatchMode::All);
        assert!(pred.is_unconstrained());
        assert!(pred.matches(&resource("anything", &[])));

        let pred = predicate(&[], MatchMode::Any);
        assert!(pred.matches(&resource("anything", &[])));
    }

    #[test]
    fn test_title_substring_is_case_insensitive() {
        let pred = predicate(&["algo"], MatchMode::All);
        assert!(pred.matches(&resource("Algorithms", &[])));
        assert!(pred.matches(&resource("ALGO 101", &[])));
        assert!(!pred.matches(&resource("Databases", &[])));
    }

    #[test]
    fn test_attachment_name_substring() {
        let pred = predicate(&["algo"], MatchMode::All);
        assert!(pred.matches(&resource("Week 3", &["algorithms-notes.pdf"])));
        assert!(!pred.matches(&resource("Week 3", &["databases.pdf"])));
    }

    #[test]
    fn test_stored_name_is_not_searched() {
        let pred = predicate(&["algo"], MatchMode::Any);
        let r = Resource::new("Week 3")
            .with_attachment(Attachment::new("notes.pdf", "algo-secret-key.pdf"));
        assert!(!pred.matches(&r));
    }

    #[test]
    fn test_all_mode_requires_every_token() {
        let pred = predicate(&["exam", "notes"], MatchMode::All);
        // "exam" in title, "notes" in attachment: both satisfied.
        assert!(pred.matches(&resource("Algorithms Exam 2023", &["notes.pdf"])));
        // Only "notes" matches.
        assert!(!pred.matches(&resource("OS Notes", &["slides.pdf"])));
    }

    #[test]
    fn test_any_mode_requires_one_token() {
        let pred = predicate(&["exam", "notes"], MatchMode::Any);
        assert!(pred.matches(&resource("OS Notes", &["slides.pdf"])));
        assert!(!pred.matches(&resource("Database Basics", &["slides.pdf"])));
    }

    #[test]
    fn test_no_attachments_and_no_title_match_is_excluded() {
        let pred = predicate(&["os"], MatchMode::Any);
        assert!(!pred.matches(&resource("Linear Algebra", &[])));
    }

    #[test]
    fn test_duplicate_tokens_are_redundant() {
        let pred = predicate(&["os", "os"], MatchMode::All);
        assert!(pred.matches(&resource("OS Notes", &[])));
    }

    #[test]
    fn test_title_matches_any_tier() {
        let pred = predicate(&["os", "exam"], MatchMode::Any);
        assert!(pred.title_matches_any(&resource("OS Notes", &[])));
        assert!(!pred.title_matches_any(&resource("Database Basics", &["os-review.pdf"])));

        let empty = predicate(&[], MatchMode::All);
        assert!(!empty.title_matches_any(&resource("OS Notes", &[])));
    }
}
