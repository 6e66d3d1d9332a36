use std::sync::LazyLock;

use regex::Regex;

// Parenthesized spans come first so that digits inside a parenthetical never
// false-match the set/rep patterns.
const DEFAULT_PATTERNS: [&str; 7] = [
    r"\([^)]*\)",
    r"(?i)\d+x\s*amrap",
    r"(?i)\d+x\d+",
    r"(?i)\d+\s*x\s*\d+",
    r"(?i)@\s*\d+(\.\d+)?\s*(lbs?|kgs?|pounds?|kilos?)?",
    r"(?i)\d+(\.\d+)?\s*(lbs?|kgs?|pounds?|kilos?)\b",
    r"(?i)\b(sets?|reps?)\b",
];

static DEFAULT_EXTRACTOR: LazyLock<NameExtractor> = LazyLock::new(|| {
    NameExtractor::with_patterns(
        DEFAULT_PATTERNS
            .iter()
            .map(|pattern| Regex::new(pattern).expect("invalid built-in pattern"))
            .collect(),
    )
});

#[derive(Debug, Clone)]
pub struct NameExtractor {
    patterns: Vec<Regex>,
}

impl Default for NameExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl NameExtractor {
    #[must_use]
    pub fn new() -> Self {
        DEFAULT_EXTRACTOR.clone()
    }

    #[must_use]
    pub fn with_patterns(patterns: Vec<Regex>) -> Self {
        Self { patterns }
    }

    #[must_use]
    pub fn extract(&self, text: &str) -> String {
        let mut name = text.to_string();
        for pattern in &self.patterns {
            name = pattern.replace_all(&name, "").into_owned();
        }
        name.trim().to_string()
    }
}
