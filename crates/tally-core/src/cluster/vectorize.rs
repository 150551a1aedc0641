//! TF-IDF vector space over one batch of normalized labels
//!
//! The vocabulary is rebuilt from scratch for every batch: weights are
//! relative to the documents in hand, so vectors from different passes are
//! not comparable and must never be cached across calls.

use std::collections::{HashMap, HashSet};

use crate::lang::is_stop_word;

/// Build one L2-normalized TF-IDF vector per normalized label.
///
/// Tokens are whitespace-delimited; stop words and single-character tokens
/// are excluded from the vocabulary. Term frequency is the raw in-document
/// count and IDF is the smoothed `ln((1 + n) / (1 + df)) + 1`. A label with
/// no surviving tokens stays a zero vector.
pub fn build_vectors(docs: &[String]) -> Vec<Vec<f64>> {
    let tokenized: Vec<Vec<&str>> = docs.iter().map(|d| tokenize(d)).collect();

    // Vocabulary indexed in first-encounter order, document frequency per term
    let mut vocabulary: HashMap<&str, usize> = HashMap::new();
    let mut doc_freq: HashMap<&str, usize> = HashMap::new();
    for tokens in &tokenized {
        let unique: HashSet<&str> = tokens.iter().copied().collect();
        for &token in tokens {
            if !vocabulary.contains_key(token) {
                let idx = vocabulary.len();
                vocabulary.insert(token, idx);
            }
        }
        for term in unique {
            *doc_freq.entry(term).or_insert(0) += 1;
        }
    }

    let dims = vocabulary.len();
    let n = docs.len() as f64;
    let mut idf = vec![0.0f64; dims];
    for (term, &idx) in &vocabulary {
        let df = doc_freq[term] as f64;
        idf[idx] = ((1.0 + n) / (1.0 + df)).ln() + 1.0;
    }

    tokenized
        .iter()
        .map(|tokens| {
            let mut vector = vec![0.0f64; dims];
            for token in tokens {
                vector[vocabulary[token]] += 1.0;
            }
            for (idx, value) in vector.iter_mut().enumerate() {
                *value *= idf[idx];
            }
            l2_normalize(&mut vector);
            vector
        })
        .collect()
}

/// Vocabulary tokens of a normalized label: stop words and one-character
/// tokens are dropped
fn tokenize(doc: &str) -> Vec<&str> {
    doc.split_whitespace()
        .filter(|t| !is_stop_word(t) && t.chars().count() > 1)
        .collect()
}

fn l2_normalize(vector: &mut [f64]) {
    let norm = vector.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm > 0.0 {
        for value in vector.iter_mut() {
            *value /= norm;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_vector_dimensions_match_vocabulary() {
        let vectors = build_vectors(&docs(&["кава", "кава в кафе", "продукт"]));
        // Vocabulary: кава, кафе, продукт ("в" is a stop word)
        assert_eq!(vectors.len(), 3);
        for v in &vectors {
            assert_eq!(v.len(), 3);
        }
    }

    #[test]
    fn test_vectors_are_unit_length() {
        let vectors = build_vectors(&docs(&["кава", "кава в кафе", "продукт"]));
        for v in &vectors {
            let norm = v.iter().map(|x| x * x).sum::<f64>().sqrt();
            assert!((norm - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_stop_words_are_excluded() {
        let vectors = build_vectors(&docs(&["кава в кафе", "кафе"]));
        // Only кава and кафе survive; both documents share the кафе axis
        assert_eq!(vectors[0].len(), 2);
        let dot: f64 = vectors[0].iter().zip(&vectors[1]).map(|(a, b)| a * b).sum();
        assert!(dot > 0.0);
    }

    #[test]
    fn test_shared_token_means_nonzero_similarity() {
        let vectors = build_vectors(&docs(&["кава", "кава кафе", "магазин"]));
        let dot_shared: f64 = vectors[0].iter().zip(&vectors[1]).map(|(a, b)| a * b).sum();
        let dot_disjoint: f64 = vectors[0].iter().zip(&vectors[2]).map(|(a, b)| a * b).sum();
        assert!(dot_shared > 0.0);
        assert!(dot_disjoint.abs() < 1e-12);
    }

    #[test]
    fn test_rare_term_outweighs_common_term() {
        // "кафе" appears in three documents, "кава" in one: within the
        // mixed document the rare term carries more weight.
        let vectors = build_vectors(&docs(&["кава кафе", "кафе", "кафе смачний"]));
        assert!(vectors[0][0] > vectors[0][1]);
    }

    #[test]
    fn test_all_stop_words_yields_zero_vector() {
        let vectors = build_vectors(&docs(&["та і в", "кава"]));
        assert!(vectors[0].iter().all(|&x| x == 0.0));
        assert!(vectors[1].iter().any(|&x| x > 0.0));
    }

    #[test]
    fn test_single_character_tokens_are_dropped() {
        // "я" is not in the stop list but is too short to be a term
        let vectors = build_vectors(&docs(&["я кава", "кава"]));
        assert_eq!(vectors[0].len(), 1);
        assert_eq!(vectors[0], vectors[1]);
    }

    #[test]
    fn test_empty_batch() {
        let vectors = build_vectors(&[]);
        assert!(vectors.is_empty());
    }
}
