//! Problem list filters and their query-string encoding.

/// Filter fields of the problem browser. Empty fields are left out of the query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProblemFilter {
    pub language: String,
    pub difficulty: String,
    pub topic: String,
}

/// Languages offered in the filter dropdown.
pub const LANGUAGES: &[&str] = &[
    "JavaScript",
    "Python",
    "Java",
    "C#",
    "SQL",
];

/// Topics offered in the filter dropdown.
pub const TOPICS: &[&str] = &[
    "Arrays",
    "Strings",
    "Stack",
    "APIs",
    "ADO.NET",
    "Git",
];

impl ProblemFilter {
    /// Non-empty fields in wire order: language, difficulty, topic.
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        [
            ("language", self.language.trim()),
            ("difficulty", self.difficulty.trim()),
            ("topic", self.topic.trim()),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .collect()
    }

    pub fn query_string(&self) -> String {
        self.query_pairs()
            .into_iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Endpoint path for the problem list under these filters.
    pub fn endpoint(&self) -> String {
        let query = self.query_string();
        if query.is_empty() {
            "/questions".to_string()
        } else {
            format!("/questions?{query}")
        }
    }

    pub fn is_empty(&self) -> bool {
        self.query_pairs().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_topic_is_omitted() {
        let filter = ProblemFilter {
            language: "Python".to_string(),
            difficulty: "Easy".to_string(),
            topic: String::new(),
        };

        assert_eq!(filter.query_string(), "language=Python&difficulty=Easy");
        assert_eq!(filter.endpoint(), "/questions?language=Python&difficulty=Easy");
    }

    #[test]
    fn no_filters_means_bare_endpoint() {
        let filter = ProblemFilter::default();
        assert!(filter.is_empty());
        assert_eq!(filter.endpoint(), "/questions");
    }

    #[test]
    fn whitespace_only_fields_count_as_empty() {
        let filter = ProblemFilter {
            topic: "   ".to_string(),
            ..Default::default()
        };
        assert!(filter.is_empty());
    }

    #[test]
    fn values_are_percent_encoded() {
        let filter = ProblemFilter {
            language: "C#".to_string(),
            difficulty: String::new(),
            topic: "Linked Lists".to_string(),
        };

        assert_eq!(filter.query_string(), "language=C%23&topic=Linked%20Lists");
    }
}
