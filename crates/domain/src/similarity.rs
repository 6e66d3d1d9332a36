// Tiered heuristic, not an edit-distance metric. The tier order and the
// constants are load-bearing: callers depend on which branch wins when
// several conditions hold at once.

#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn score(query: &str, candidate: &str) -> f64 {
    let query = query.to_lowercase();
    let candidate = candidate.to_lowercase();

    if query == candidate {
        return 1.0;
    }

    if query.contains(&candidate) || candidate.contains(&query) {
        return 0.9;
    }

    let query_words = query.split_whitespace().collect::<Vec<_>>();
    let candidate_words = candidate.split_whitespace().collect::<Vec<_>>();

    let mut sorted_query_words = query_words.clone();
    sorted_query_words.sort_unstable();
    let mut sorted_candidate_words = candidate_words.clone();
    sorted_candidate_words.sort_unstable();
    if sorted_query_words == sorted_candidate_words {
        return 0.95;
    }

    if covers(&query_words, &candidate_words) || covers(&candidate_words, &query_words) {
        return 0.8;
    }

    let matching = query_words
        .iter()
        .filter(|word| word_matches(word, &candidate_words))
        .count();
    let longest = query_words.len().max(candidate_words.len());

    if longest == 0 {
        return 0.0;
    }

    matching as f64 / longest as f64 * 0.7
}

fn covers(words: &[&str], other: &[&str]) -> bool {
    !words.is_empty() && words.iter().all(|word| word_matches(word, other))
}

fn word_matches(word: &str, other: &[&str]) -> bool {
    other
        .iter()
        .any(|o| o.contains(word) || word.contains(o))
}
