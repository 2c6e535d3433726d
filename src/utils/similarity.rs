//! Vector Similarity Utilities
//!
//! Builds position-aligned nutrient vectors over an ordered nutrient vocabulary
//! and compares them with cosine similarity.

use rustc_hash::{FxHashMap, FxHashSet};

/// Cosine similarity between two equal-length vectors
///
/// Returns 0.0 when either vector has zero magnitude. Extra trailing elements
/// of the longer vector are ignored.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;

    for (x, y) in a.iter().zip(b) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a.sqrt() * norm_b.sqrt())
}

/// Binary deficiency vector: 1.0 where `vocabulary[i]` is deficient, else 0.0
pub fn deficiency_vector(vocabulary: &[String], deficiencies: &[String]) -> Vec<f64> {
    let deficient: FxHashSet<&str> = deficiencies.iter().map(String::as_str).collect();

    vocabulary
        .iter()
        .map(|name| if deficient.contains(name.as_str()) { 1.0 } else { 0.0 })
        .collect()
}

/// Food vector: the food's amount for each vocabulary nutrient (0.0 if absent)
pub fn food_vector(vocabulary: &[String], nutrients: &FxHashMap<String, f64>) -> Vec<f64> {
    vocabulary
        .iter()
        .map(|name| nutrients.get(name).copied().unwrap_or(0.0))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_deficiency_vector_positions() {
        let vocab = names(&["A", "B", "C"]);
        assert_eq!(deficiency_vector(&vocab, &names(&["B"])), vec![0.0, 1.0, 0.0]);
        // Deficiencies outside the vocabulary have no position
        assert_eq!(deficiency_vector(&vocab, &names(&["Z"])), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_parallel_vectors() {
        let vocab = names(&["A", "B", "C"]);
        let target = deficiency_vector(&vocab, &names(&["B"]));
        let mut nutrients = FxHashMap::default();
        nutrients.insert("B".to_string(), 5.0);
        let food = food_vector(&vocab, &nutrients);

        assert_eq!(food, vec![0.0, 5.0, 0.0]);
        assert_relative_eq!(cosine_similarity(&food, &target), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_vector_is_zero_similarity() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]), 0.0);
        assert_eq!(cosine_similarity(&[1.0, 2.0], &[0.0, 0.0]), 0.0);
        assert_eq!(cosine_similarity(&[], &[]), 0.0);
    }

    #[test]
    fn test_similarity_bounds() {
        let cases: [(&[f64], &[f64]); 4] = [
            (&[1.0, 0.0], &[0.0, 1.0]),
            (&[1.0, 2.0, 3.0], &[-1.0, -2.0, -3.0]),
            (&[0.3, 7.0, 1.0], &[1.0, 1.0, 0.0]),
            (&[1e9, 1e-9], &[1e-9, 1e9]),
        ];
        for (a, b) in cases {
            let s = cosine_similarity(a, b);
            assert!((-1.0 - 1e-12..=1.0 + 1e-12).contains(&s), "out of bounds: {}", s);
        }
        assert_relative_eq!(cosine_similarity(&[1.0, 2.0], &[-1.0, -2.0]), -1.0, epsilon = 1e-12);
    }
}
