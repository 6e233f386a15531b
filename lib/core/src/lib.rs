//! # cinematch Core
//!
//! Core library for the cinematch content-based recommendation engine.
//!
//! This crate provides the fundamental data structures and algorithms:
//!
//! - [`Catalog`] - Immutable item catalog with a title index
//! - [`TfidfVectorizer`] - TF-IDF feature vectorization over item text
//! - [`Vector`] - Dense weight vector with cosine similarity
//! - [`SimilarityMatrix`] - Precomputed pairwise similarity with top-K retrieval
//! - [`RecommendEngine`] - Build-once, query-many recommendation facade
//!
//! ## Example
//!
//! ```rust
//! use cinematch_core::{Catalog, ItemRecord, RecommendEngine};
//!
//! let records = vec![
//!     ItemRecord {
//!         title: "Inception".to_string(),
//!         genre: "Sci-Fi Thriller".to_string(),
//!         description: "A thief enters dreams to steal secrets.".to_string(),
//!     },
//!     ItemRecord {
//!         title: "Tenet".to_string(),
//!         genre: "Sci-Fi Thriller".to_string(),
//!         description: "A secret agent manipulates time to stop an attack.".to_string(),
//!     },
//! ];
//! let catalog = Catalog::from_records(records).unwrap();
//!
//! // Build once: vectorize and precompute all-pairs similarity
//! let engine = RecommendEngine::build(&catalog).unwrap();
//!
//! // Query repeatedly
//! let results = engine.recommend("Inception", 1).unwrap();
//! assert_eq!(results[0].title, "Tenet");
//! ```

pub mod catalog;
pub mod engine;
pub mod error;
pub mod matrix;
pub mod tokenize;
pub mod vector;
pub mod vectorize;

pub use catalog::{Catalog, Item, ItemRecord};
pub use engine::{
    EnrichedRecommendation, NoPosters, PosterSource, Recommendation, RecommendEngine,
    SharedEngine,
};
pub use error::{Error, Result};
pub use matrix::SimilarityMatrix;
pub use vector::Vector;
pub use vectorize::{TfidfVectorizer, Vocabulary};
