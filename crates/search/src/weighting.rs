//! TF-IDF term weighting
//!
//! This module provides:
//! - TermWeightModel: fixed vocabulary plus per-term document statistics
//! - Sparse and dense weight vectors for any token sequence
//!
//! # Weight Formula
//!
//! For term t in document d over a corpus of N documents:
//!
//! ```text
//! idf(t)    = ln((1 + N) / (1 + df(t))) + 1
//! w(t, d)   = tf(t, d) * idf(t)
//! ```
//!
//! Each document's weights are then scaled to unit Euclidean length.
//! Terms occurring in fewer than `min_df` documents are excluded from the
//! vocabulary.

use nalgebra::{DMatrix, DVector};
use quotesearch_core::{Error, Result};
use std::collections::{BTreeMap, HashMap, HashSet};

use crate::normalizer::NormalizedDocument;

// ============================================================================
// TermWeightModel
// ============================================================================

/// Fitted TF-IDF statistics
///
/// The vocabulary is sorted lexicographically, so term indices depend only on
/// the set of terms, never on document order.
#[derive(Debug, Clone)]
pub struct TermWeightModel {
    /// Sorted vocabulary
    vocabulary: Vec<String>,
    /// Term -> column index
    index: HashMap<String, usize>,
    /// Document frequency per column
    doc_freqs: Vec<usize>,
    /// IDF per column
    idf: Vec<f64>,
    /// Documents in the fitted corpus
    total_docs: usize,
    /// Document-frequency floor used at fit time
    min_df: usize,
}

impl TermWeightModel {
    /// Fit vocabulary and IDF over a normalized corpus.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if `min_df` is zero
    /// - `ModelFit` if the corpus is empty or no term reaches `min_df`
    pub fn fit(documents: &[NormalizedDocument], min_df: usize) -> Result<Self> {
        if min_df == 0 {
            return Err(Error::invalid_input("min_df must be at least 1"));
        }
        if documents.is_empty() {
            return Err(Error::model_fit("corpus is empty"));
        }

        let mut doc_freq: BTreeMap<&str, usize> = BTreeMap::new();
        for doc in documents {
            let unique: HashSet<&str> = doc.iter().map(String::as_str).collect();
            for term in unique {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        let n = documents.len() as f64;
        let mut vocabulary = Vec::new();
        let mut doc_freqs = Vec::new();
        let mut idf = Vec::new();
        // BTreeMap iteration is sorted, so the vocabulary comes out sorted
        for (term, df) in doc_freq.into_iter().filter(|(_, df)| *df >= min_df) {
            vocabulary.push(term.to_string());
            doc_freqs.push(df);
            idf.push(((1.0 + n) / (1.0 + df as f64)).ln() + 1.0);
        }

        if vocabulary.is_empty() {
            return Err(Error::model_fit(format!(
                "no term occurs in at least {} documents",
                min_df
            )));
        }

        let index = vocabulary
            .iter()
            .enumerate()
            .map(|(i, t)| (t.clone(), i))
            .collect();

        Ok(TermWeightModel {
            vocabulary,
            index,
            doc_freqs,
            idf,
            total_docs: documents.len(),
            min_df,
        })
    }

    /// Sorted vocabulary
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Vocabulary size
    pub fn len(&self) -> usize {
        self.vocabulary.len()
    }

    /// True if the vocabulary is empty (never the case after a successful fit)
    pub fn is_empty(&self) -> bool {
        self.vocabulary.is_empty()
    }

    /// Column index of a term
    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    /// Document frequency of a term (0 if outside the vocabulary)
    pub fn doc_freq(&self, term: &str) -> usize {
        self.term_index(term).map(|i| self.doc_freqs[i]).unwrap_or(0)
    }

    /// IDF of a term, if it is in the vocabulary
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.term_index(term).map(|i| self.idf[i])
    }

    /// Documents in the fitted corpus
    pub fn total_docs(&self) -> usize {
        self.total_docs
    }

    /// Document-frequency floor used at fit time
    pub fn min_df(&self) -> usize {
        self.min_df
    }

    /// Unit-length sparse weights as `(column, weight)` sorted by column.
    ///
    /// Unknown terms contribute nothing; a token sequence with no known
    /// terms yields an empty vector.
    pub fn weigh_sparse(&self, tokens: &[String]) -> Vec<(usize, f64)> {
        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for token in tokens {
            if let Some(i) = self.term_index(token) {
                *counts.entry(i).or_insert(0.0) += 1.0;
            }
        }

        let mut weights: Vec<(usize, f64)> = counts
            .into_iter()
            .map(|(i, tf)| (i, tf * self.idf[i]))
            .collect();

        let norm = weights.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, w) in &mut weights {
                *w /= norm;
            }
        }
        weights
    }

    /// Unit-length dense weights over the whole vocabulary
    pub fn weigh(&self, tokens: &[String]) -> DVector<f64> {
        let mut v = DVector::zeros(self.len());
        for (i, w) in self.weigh_sparse(tokens) {
            v[i] = w;
        }
        v
    }

    /// Document-term weight matrix (one row per document)
    pub fn weight_matrix(&self, documents: &[NormalizedDocument]) -> DMatrix<f64> {
        let mut matrix = DMatrix::zeros(documents.len(), self.len());
        for (row, doc) in documents.iter().enumerate() {
            for (col, w) in self.weigh_sparse(doc) {
                matrix[(row, col)] = w;
            }
        }
        matrix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs(raw: &[&[&str]]) -> Vec<NormalizedDocument> {
        raw.iter()
            .map(|d| d.iter().map(|t| t.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_vocabulary_respects_min_df() {
        let corpus = docs(&[&["love", "life"], &["love", "fear"], &["hope"]]);
        let model = TermWeightModel::fit(&corpus, 2).unwrap();
        assert_eq!(model.vocabulary(), &["love".to_string()]);
        assert_eq!(model.doc_freq("love"), 2);
        assert_eq!(model.doc_freq("hope"), 0);
        assert_eq!(model.total_docs(), 3);
    }

    #[test]
    fn test_vocabulary_sorted() {
        let corpus = docs(&[&["zeal", "apple", "mango"], &["mango", "apple", "zeal"]]);
        let model = TermWeightModel::fit(&corpus, 1).unwrap();
        assert_eq!(model.vocabulary(), &["apple", "mango", "zeal"]);
        assert_eq!(model.term_index("mango"), Some(1));
    }

    #[test]
    fn test_repeated_term_counts_once_for_df() {
        let corpus = docs(&[&["fear", "fear", "fear"], &["hope"]]);
        let model = TermWeightModel::fit(&corpus, 1).unwrap();
        assert_eq!(model.doc_freq("fear"), 1);
    }

    #[test]
    fn test_idf_smoothing() {
        let corpus = docs(&[&["love"], &["love"], &["life", "love"]]);
        let model = TermWeightModel::fit(&corpus, 1).unwrap();
        // df = N: idf == ln(4/4) + 1 == 1
        assert!((model.idf("love").unwrap() - 1.0).abs() < 1e-12);
        // rarer terms weigh more
        assert!(model.idf("life").unwrap() > model.idf("love").unwrap());
        assert!(model.idf("absent").is_none());
    }

    #[test]
    fn test_empty_corpus_fails() {
        let err = TermWeightModel::fit(&[], 2).unwrap_err();
        assert!(err.is_model_fit());
    }

    #[test]
    fn test_no_term_reaching_floor_fails() {
        let corpus = docs(&[&["alpha"], &["beta"], &[]]);
        let err = TermWeightModel::fit(&corpus, 2).unwrap_err();
        assert!(err.is_model_fit());
    }

    #[test]
    fn test_all_empty_documents_fail() {
        let corpus = docs(&[&[], &[]]);
        assert!(TermWeightModel::fit(&corpus, 1).unwrap_err().is_model_fit());
    }

    #[test]
    fn test_zero_min_df_rejected() {
        let corpus = docs(&[&["a"]]);
        let err = TermWeightModel::fit(&corpus, 0).unwrap_err();
        assert!(matches!(err, Error::InvalidInput { .. }));
    }

    #[test]
    fn test_weights_unit_length() {
        let corpus = docs(&[&["love", "life", "life"], &["love", "life"]]);
        let model = TermWeightModel::fit(&corpus, 1).unwrap();
        let v = model.weigh(&corpus[0]);
        assert!((v.norm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_terms_ignored() {
        let corpus = docs(&[&["love"], &["love"]]);
        let model = TermWeightModel::fit(&corpus, 1).unwrap();
        let tokens = vec!["unseen".to_string()];
        assert!(model.weigh_sparse(&tokens).is_empty());
        assert_eq!(model.weigh(&tokens).norm(), 0.0);
    }

    #[test]
    fn test_weight_matrix_shape() {
        let corpus = docs(&[&["love", "life"], &["love"], &["life", "hope"]]);
        let model = TermWeightModel::fit(&corpus, 1).unwrap();
        let m = model.weight_matrix(&corpus);
        assert_eq!(m.nrows(), 3);
        assert_eq!(m.ncols(), 3);
        // Row for ["love"] has a single unit entry
        let love = model.term_index("love").unwrap();
        assert!((m[(1, love)] - 1.0).abs() < 1e-12);
    }
}
