//! Dense pairwise similarity matrix and top-K retrieval.

use crate::{Error, Result, Vector};
use ordered_float::OrderedFloat;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// N×N symmetric cosine similarity matrix, row-major
///
/// Built once from the full set of item vectors and read-only after
/// that. Memory cost is O(N²), which is acceptable while the catalog
/// stays in the low thousands of items; beyond that, compute
/// similarities on demand against stored vectors instead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimilarityMatrix {
    n: usize,
    data: Vec<f32>,
}

impl SimilarityMatrix {
    /// Compute all-pairs cosine similarity
    ///
    /// The upper triangle is computed (rows in parallel) and mirrored,
    /// so the matrix is exactly symmetric. The diagonal is set to the
    /// maximum attainable value: 1.0, or 0.0 for a zero vector.
    pub fn build(vectors: &[Vector]) -> Result<Self> {
        let n = vectors.len();
        if n == 0 {
            return Ok(Self { n: 0, data: Vec::new() });
        }

        let expected = vectors[0].dim();
        for v in vectors {
            if v.dim() != expected {
                return Err(Error::DimensionMismatch {
                    expected,
                    actual: v.dim(),
                });
            }
        }

        let upper: Vec<Vec<f32>> = (0..n)
            .into_par_iter()
            .map(|i| {
                (i..n)
                    .map(|j| {
                        if i == j {
                            if vectors[i].norm() == 0.0 { 0.0 } else { 1.0 }
                        } else {
                            vectors[i].cosine_similarity(&vectors[j])
                        }
                    })
                    .collect()
            })
            .collect();

        let mut data = vec![0.0f32; n * n];
        for (i, row) in upper.iter().enumerate() {
            for (offset, &score) in row.iter().enumerate() {
                let j = i + offset;
                data[i * n + j] = score;
                data[j * n + i] = score;
            }
        }

        Ok(Self { n, data })
    }

    /// Number of items covered by the matrix
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.n
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Similarity between two items
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<f32> {
        if i < self.n && j < self.n {
            Some(self.data[i * self.n + j])
        } else {
            None
        }
    }

    /// Full similarity row for one item
    #[inline]
    pub fn row(&self, i: usize) -> Option<&[f32]> {
        if i < self.n {
            Some(&self.data[i * self.n..(i + 1) * self.n])
        } else {
            None
        }
    }

    /// The k items most similar to `query_id`, descending by score
    ///
    /// Ties are broken by ascending item id. When `exclude_self` is set
    /// the query item itself is skipped. A `k` larger than the number of
    /// available candidates clamps to that count; `k == 0` is an error.
    pub fn top_k(
        &self,
        query_id: usize,
        k: usize,
        exclude_self: bool,
    ) -> Result<Vec<(usize, f32)>> {
        if query_id >= self.n {
            return Err(Error::UnknownItem(query_id));
        }
        if k == 0 {
            return Err(Error::InvalidK(k));
        }

        let row = &self.data[query_id * self.n..(query_id + 1) * self.n];
        let mut ranked: Vec<(usize, f32)> = row
            .iter()
            .enumerate()
            .filter(|&(id, _)| !(exclude_self && id == query_id))
            .map(|(id, &score)| (id, score))
            .collect();

        ranked.sort_by_key(|&(id, score)| (Reverse(OrderedFloat(score)), id));
        ranked.truncate(k);
        Ok(ranked)
    }
}
