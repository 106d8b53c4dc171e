//! Vector space: term weights + topic projection + document vectors
//!
//! A [`VectorSpace`] is fitted once per corpus snapshot and is read-only
//! afterwards. [`VectorSpace::embed`] maps any text into the same unit-length
//! topic space as the fitted documents, using only parameters captured at
//! fit time.

use quotesearch_core::config::{DEFAULT_MIN_DF, DEFAULT_TOPIC_COUNT};
use quotesearch_core::{Error, RecordTable, Result};
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::normalizer::{normalize, NormalizedDocument};
use crate::projection::ProjectionModel;
use crate::ranker::{rank, RankedDoc};
use crate::weighting::TermWeightModel;

// ============================================================================
// FitParams
// ============================================================================

/// Parameters of a vector space fit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FitParams {
    /// Output dimension
    pub topic_count: usize,
    /// Vocabulary document-frequency floor
    pub min_df: usize,
}

impl Default for FitParams {
    fn default() -> Self {
        FitParams {
            topic_count: DEFAULT_TOPIC_COUNT,
            min_df: DEFAULT_MIN_DF,
        }
    }
}

impl FitParams {
    /// Params with the given topic count and the default floor
    pub fn new(topic_count: usize) -> Self {
        FitParams {
            topic_count,
            ..Self::default()
        }
    }

    /// Builder: set document-frequency floor
    pub fn with_min_df(mut self, min_df: usize) -> Self {
        self.min_df = min_df;
        self
    }
}

// ============================================================================
// DocumentVectors
// ============================================================================

/// One unit-length (or zero) topic vector per document, by position
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentVectors {
    dim: usize,
    vectors: Vec<Vec<f64>>,
}

impl DocumentVectors {
    /// Wrap projected vectors, all of length `dim`
    pub fn new(dim: usize, vectors: Vec<Vec<f64>>) -> Self {
        debug_assert!(vectors.iter().all(|v| v.len() == dim));
        DocumentVectors { dim, vectors }
    }

    /// Vector dimension
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of documents
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// True if there are no documents
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Vector of document `index`
    pub fn get(&self, index: usize) -> Option<&[f64]> {
        self.vectors.get(index).map(Vec::as_slice)
    }

    /// All vectors, by document position
    pub fn as_slice(&self) -> &[Vec<f64>] {
        &self.vectors
    }

    /// Iterate vectors in document order
    pub fn iter(&self) -> impl Iterator<Item = &[f64]> {
        self.vectors.iter().map(Vec::as_slice)
    }
}

// ============================================================================
// Topic terms
// ============================================================================

/// A vocabulary term with its component weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedTerm {
    /// Vocabulary term
    pub term: String,
    /// Component weight
    pub weight: f64,
}

/// Highest-weighted terms of one topic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicTerms {
    /// Topic index
    pub topic: usize,
    /// Singular value of the topic (0 for padding topics)
    pub singular_value: f64,
    /// Terms by descending weight
    pub terms: Vec<WeightedTerm>,
}

// ============================================================================
// VectorSpace
// ============================================================================

/// Fitted term weights, projection and document vectors
#[derive(Debug, Clone)]
pub struct VectorSpace {
    weights: TermWeightModel,
    projection: ProjectionModel,
    documents: DocumentVectors,
}

impl VectorSpace {
    /// Fit over normalized documents with the default vocabulary floor.
    pub fn fit(documents: &[NormalizedDocument], topic_count: usize) -> Result<Self> {
        Self::fit_with(documents, &FitParams::new(topic_count))
    }

    /// Fit over normalized documents.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if `topic_count` or `min_df` is zero
    /// - `ModelFit` if the corpus is empty, the vocabulary is empty, or the
    ///   decomposition fails
    pub fn fit_with(documents: &[NormalizedDocument], params: &FitParams) -> Result<Self> {
        if params.topic_count == 0 {
            return Err(Error::invalid_input("topic_count must be at least 1"));
        }
        let start = Instant::now();

        let weights = TermWeightModel::fit(documents, params.min_df)?;
        let matrix = weights.weight_matrix(documents);
        let projection = ProjectionModel::fit(&matrix, params.topic_count)?;
        let documents = DocumentVectors::new(params.topic_count, projection.project_matrix(&matrix));

        tracing::info!(
            target: "quotesearch::space",
            documents = documents.len(),
            vocabulary = weights.len(),
            topics = params.topic_count,
            rank = projection.rank(),
            explained_variance = projection.explained_variance_ratio(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "Vector space fitted"
        );

        Ok(VectorSpace {
            weights,
            projection,
            documents,
        })
    }

    /// Normalize raw texts, then fit.
    pub fn fit_texts<I, S>(texts: I, params: &FitParams) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let documents: Vec<NormalizedDocument> =
            texts.into_iter().map(|t| normalize(t.as_ref())).collect();
        Self::fit_with(&documents, params)
    }

    /// Fit over the text column of a record table.
    pub fn fit_table(table: &RecordTable, params: &FitParams) -> Result<Self> {
        Self::fit_texts(table.iter().map(|r| r.text.as_str()), params)
    }

    /// Map raw text into the fitted topic space.
    pub fn embed(&self, text: &str) -> Vec<f64> {
        self.embed_tokens(&normalize(text))
    }

    /// Map already-normalized tokens into the fitted topic space.
    pub fn embed_tokens(&self, tokens: &[String]) -> Vec<f64> {
        self.projection
            .project_sparse(&self.weights.weigh_sparse(tokens))
    }

    /// Rank fitted documents against raw query text.
    pub fn most_similar(&self, text: &str, top_n: usize) -> Vec<RankedDoc> {
        rank(&self.embed(text), self.documents.as_slice(), top_n)
    }

    /// Fitted document vectors
    pub fn documents(&self) -> &DocumentVectors {
        &self.documents
    }

    /// Fitted term weights
    pub fn term_weights(&self) -> &TermWeightModel {
        &self.weights
    }

    /// Fitted projection
    pub fn projection(&self) -> &ProjectionModel {
        &self.projection
    }

    /// Output dimension
    pub fn topic_count(&self) -> usize {
        self.projection.topic_count()
    }

    /// Up to `n` positively weighted terms per topic.
    ///
    /// Terms are ordered by descending weight, ties by vocabulary order.
    /// Padding topics have no terms.
    pub fn top_terms(&self, n: usize) -> Vec<TopicTerms> {
        let vocabulary = self.weights.vocabulary();
        let components = self.projection.components();
        components
            .row_iter()
            .enumerate()
            .map(|(topic, row)| {
                let mut scored: Vec<(usize, f64)> = row
                    .iter()
                    .copied()
                    .enumerate()
                    .filter(|&(_, w)| w > 0.0)
                    .collect();
                scored.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
                TopicTerms {
                    topic,
                    singular_value: self.projection.singular_values()[topic],
                    terms: scored
                        .into_iter()
                        .take(n)
                        .map(|(i, weight)| WeightedTerm {
                            term: vocabulary[i].clone(),
                            weight,
                        })
                        .collect(),
                }
            })
            .collect()
    }
}
