//! Recommendation engine: build once, query repeatedly.

use crate::vectorize::TfidfVectorizer;
use crate::{Catalog, Error, Result, SimilarityMatrix, Vocabulary};
use ahash::AHashMap;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One ranked recommendation returned to the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub title: String,
    pub score: f32,
}

/// A recommendation optionally decorated with a display asset
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnrichedRecommendation {
    pub title: String,
    pub score: f32,
    /// Absent when no asset source is configured or lookup failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
}

/// External display-asset lookup, queried per recommended item
///
/// Implementations must swallow their own transport failures and return
/// `None`; an unavailable asset source never aborts a recommendation
/// query.
pub trait PosterSource {
    fn poster_url(&self, title: &str) -> Option<String>;
}

/// Poster source that never returns an asset
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPosters;

impl PosterSource for NoPosters {
    fn poster_url(&self, _title: &str) -> Option<String> {
        None
    }
}

/// The built recommendation engine
///
/// Holds everything a query needs: item titles in catalog order, the
/// title index, the vocabulary and the precomputed similarity matrix.
/// Immutable after construction, so it can be shared freely across
/// concurrent readers.
#[derive(Debug)]
pub struct RecommendEngine {
    titles: Vec<String>,
    title_index: AHashMap<String, usize>,
    vocabulary: Vocabulary,
    matrix: SimilarityMatrix,
}

impl RecommendEngine {
    /// Vectorize the catalog and precompute the full similarity matrix
    pub fn build(catalog: &Catalog) -> Result<Self> {
        let vectorizer = TfidfVectorizer::new();
        let (vocabulary, vectors) = vectorizer.fit_transform(&catalog.feature_texts())?;
        let matrix = SimilarityMatrix::build(&vectors)?;

        Self::from_parts(catalog.titles(), vocabulary, matrix)
    }

    /// Assemble an engine from previously built artifacts
    ///
    /// Used when restoring from a snapshot; the title index is rebuilt
    /// from the stored title order.
    pub fn from_parts(
        titles: Vec<String>,
        vocabulary: Vocabulary,
        matrix: SimilarityMatrix,
    ) -> Result<Self> {
        if matrix.len() != titles.len() {
            return Err(Error::DimensionMismatch {
                expected: titles.len(),
                actual: matrix.len(),
            });
        }

        let mut title_index = AHashMap::with_capacity(titles.len());
        for (id, title) in titles.iter().enumerate() {
            if title_index.insert(title.clone(), id).is_some() {
                return Err(Error::DuplicateTitle(title.clone()));
            }
        }

        Ok(Self {
            titles,
            title_index,
            vocabulary,
            matrix,
        })
    }

    /// Number of items in the engine
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    #[inline]
    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    #[inline]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    #[inline]
    pub fn matrix(&self) -> &SimilarityMatrix {
        &self.matrix
    }

    /// Resolve a title to its item id
    pub fn lookup_by_title(&self, title: &str) -> Result<usize> {
        self.title_index
            .get(title)
            .copied()
            .ok_or_else(|| Error::TitleNotFound(title.to_string()))
    }

    /// The k items most similar to the given title, best first
    ///
    /// The query item itself is always excluded. A `k` beyond the
    /// available item count clamps.
    pub fn recommend(&self, title: &str, k: usize) -> Result<Vec<Recommendation>> {
        let query_id = self.lookup_by_title(title)?;
        let ranked = self.matrix.top_k(query_id, k, true)?;

        Ok(ranked
            .into_iter()
            .map(|(id, score)| Recommendation {
                title: self.titles[id].clone(),
                score,
            })
            .collect())
    }

    /// Recommend and decorate each result with a poster URL
    ///
    /// Asset lookups degrade per item; the ranked titles and scores are
    /// returned regardless of the source's availability.
    pub fn recommend_enriched(
        &self,
        title: &str,
        k: usize,
        posters: &dyn PosterSource,
    ) -> Result<Vec<EnrichedRecommendation>> {
        Ok(self
            .recommend(title, k)?
            .into_iter()
            .map(|r| {
                let poster = posters.poster_url(&r.title);
                EnrichedRecommendation {
                    title: r.title,
                    score: r.score,
                    poster,
                }
            })
            .collect())
    }
}

/// Handle for atomically swapping in a rebuilt engine
///
/// Queries clone the inner `Arc` and read without holding the lock, so
/// in-flight queries keep the engine they started with while `swap`
/// installs a replacement built from a changed catalog. The engine is
/// never mutated in place.
pub struct SharedEngine {
    inner: RwLock<Arc<RecommendEngine>>,
}

impl SharedEngine {
    #[must_use]
    pub fn new(engine: RecommendEngine) -> Self {
        Self {
            inner: RwLock::new(Arc::new(engine)),
        }
    }

    /// The currently installed engine
    #[must_use]
    pub fn current(&self) -> Arc<RecommendEngine> {
        self.inner.read().clone()
    }

    /// Atomically replace the engine visible to new queries
    pub fn swap(&self, engine: RecommendEngine) {
        *self.inner.write() = Arc::new(engine);
    }
}
