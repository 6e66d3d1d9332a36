use crate::{Catalog, Exercise, NameExtractor, similarity};

pub const DEFAULT_THRESHOLD: f64 = 0.7;

#[derive(Debug, Clone)]
pub struct Resolver {
    extractor: NameExtractor,
    threshold: f64,
}

struct MatchCandidate<'a> {
    exercise: &'a Exercise,
    score: f64,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Resolver {
    #[must_use]
    pub fn new() -> Self {
        Self {
            extractor: NameExtractor::new(),
            threshold: DEFAULT_THRESHOLD,
        }
    }

    #[must_use]
    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            threshold,
            ..Self::new()
        }
    }

    #[must_use]
    pub fn with_extractor(extractor: NameExtractor, threshold: f64) -> Self {
        Self {
            extractor,
            threshold,
        }
    }

    #[must_use]
    pub fn resolve<'a>(&self, query: &str, catalog: &'a Catalog) -> Option<&'a Exercise> {
        let name = self.extractor.extract(query);

        if name.is_empty() {
            return None;
        }

        let mut candidates = catalog
            .iter()
            .map(|exercise| MatchCandidate {
                score: similarity::score(&name, exercise.name.as_str()),
                exercise,
            })
            .collect::<Vec<_>>();

        // Stable sort: candidates with equal scores keep catalog order.
        candidates.sort_by(|a, b| b.score.total_cmp(&a.score));

        candidates
            .first()
            .filter(|candidate| candidate.score >= self.threshold)
            .map(|candidate| candidate.exercise)
    }
}
