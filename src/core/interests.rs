use std::collections::{HashMap, HashSet};
use std::fmt::Debug;

/// Shortest token the frequency heuristic treats as a topic
pub const DEFAULT_MIN_TOKEN_CHARS: usize = 5;

/// Minimum number of repetitions before a token counts as an interest
pub const MIN_TOKEN_REPETITIONS: usize = 2;

/// Infers what the current occupants of a listing are into from its description
pub trait InterestExtractor: Debug + Send + Sync {
    fn extract(&self, description: &str) -> HashSet<String>;
}

/// Treats words a description repeats as the occupants' shared interests
///
/// Tokens are split on whitespace, lower-cased and stripped of trailing
/// punctuation. A token is kept when it is at least `min_token_chars` long
/// (more than four characters by default) and appears at least twice.
#[derive(Debug, Clone, Copy)]
pub struct FrequencyInterestExtractor {
    min_token_chars: usize,
}

impl FrequencyInterestExtractor {
    pub fn new(min_token_chars: usize) -> Self {
        Self { min_token_chars }
    }
}

impl Default for FrequencyInterestExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_TOKEN_CHARS)
    }
}

impl InterestExtractor for FrequencyInterestExtractor {
    fn extract(&self, description: &str) -> HashSet<String> {
        let mut counts: HashMap<String, usize> = HashMap::new();

        for token in description.split_whitespace() {
            let token = token
                .trim_end_matches(|c: char| c.is_ascii_punctuation())
                .to_lowercase();
            if token.is_empty() {
                continue;
            }
            *counts.entry(token).or_insert(0) += 1;
        }

        counts
            .into_iter()
            .filter(|(token, count)| {
                *count >= MIN_TOKEN_REPETITIONS && token.chars().count() >= self.min_token_chars
            })
            .map(|(token, _)| token)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(description: &str) -> HashSet<String> {
        FrequencyInterestExtractor::default().extract(description)
    }

    #[test]
    fn test_repeated_words_are_extracted() {
        let tokens = extract("Piso con fans del teatro, teatro y cocina. Cocina compartida.");

        assert!(tokens.contains("teatro"));
        assert!(tokens.contains("cocina"));
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn test_single_occurrences_ignored() {
        let tokens = extract("Habitación luminosa cerca del parque");
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_short_words_ignored() {
        let tokens = extract("con con del del piso piso patio patio");
        assert_eq!(tokens, HashSet::from(["patio".to_string()]));
    }

    #[test]
    fn test_four_char_tokens_ignored_by_default() {
        assert!(extract("cine cine piso piso").is_empty());
        assert!(extract("Yoga, yoga y golf. Golf!").is_empty());
    }

    #[test]
    fn test_case_folded_before_counting() {
        let tokens = extract("Senderismo los sábados. SENDERISMO los domingos!");
        assert!(tokens.contains("senderismo"));
    }

    #[test]
    fn test_empty_description() {
        assert!(extract("").is_empty());
        assert!(extract("   ... ,,, ").is_empty());
    }

    #[test]
    fn test_custom_threshold() {
        let relaxed = FrequencyInterestExtractor::new(4);
        let tokens = relaxed.extract("yoga yoga cocina cocina");
        assert_eq!(tokens.len(), 2);
        assert!(tokens.contains("yoga"));

        let strict = FrequencyInterestExtractor::new(7);
        assert!(strict.extract("yoga yoga cocina cocina").is_empty());
    }
}
