//! Morphological normalization of category labels
//!
//! Reduces a raw label to a lower-cased, lemmatized form so that inflected
//! variants of the same word compare equal in the vector space. Punctuation
//! is not stripped: a token the dictionary does not know keeps its surface
//! form, punctuation and all.

use crate::lang::MorphDict;

/// Normalized form of a raw category label: lower-case, whitespace-split,
/// each token mapped to its dictionary form, rejoined with single spaces.
///
/// Pure function of the input and the dictionary; recomputed on every
/// clustering pass, never stored.
pub fn normalize(raw: &str, dict: &MorphDict) -> String {
    let lowered = raw.to_lowercase();
    lowered
        .split_whitespace()
        .map(|token| dict.lemma(token))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_lemmatizes() {
        let dict = MorphDict::embedded();
        assert_eq!(normalize("Кави з собою", dict), "кава з собою");
        assert_eq!(normalize("Баба балувана", dict), "баба балуваний");
    }

    #[test]
    fn test_unknown_tokens_pass_through() {
        let dict = MorphDict::embedded();
        assert_eq!(normalize("сільпо delivery", dict), "сільпо delivery");
    }

    #[test]
    fn test_punctuation_is_not_stripped() {
        let dict = MorphDict::embedded();
        // "кава," is not a dictionary surface form, so it survives verbatim
        assert_eq!(normalize("кава, цукерки", dict), "кава, цукерка");
    }

    #[test]
    fn test_whitespace_collapses() {
        let dict = MorphDict::empty();
        assert_eq!(normalize("  кафе   на розі ", &dict), "кафе на розі");
    }

    #[test]
    fn test_empty_dictionary_only_case_folds() {
        let dict = MorphDict::empty();
        assert_eq!(normalize("Продукти", &dict), "продукти");
    }
}
