use std::collections::HashSet;

use crate::{Difficulty, Force, Name, Property};

const MIN_TOKEN_LEN: usize = 3;

#[must_use]
pub fn search_keywords(
    name: &Name,
    muscle_group: &Name,
    equipment: &Name,
    difficulty: Difficulty,
    force: Option<Force>,
) -> HashSet<String> {
    let mut keywords = tokens(name.as_str());

    keywords.insert(muscle_group.as_str().to_lowercase());
    keywords.extend(tokens(equipment.as_str()));
    keywords.insert(difficulty.name().to_lowercase());

    if let Some(force) = force {
        keywords.insert(force.name().to_lowercase());
    }

    keywords
}

fn tokens(text: &str) -> HashSet<String> {
    text.split_whitespace()
        .filter(|word| word.len() >= MIN_TOKEN_LEN)
        .map(str::to_lowercase)
        .collect()
}
