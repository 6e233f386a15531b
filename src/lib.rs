//! # cinematch
//!
//! A content-based movie recommendation engine.
//!
//! Items are represented as TF-IDF vectors over their genre and
//! description text, pairwise cosine similarity is precomputed into a
//! dense matrix, and queries return the top-K most similar titles.
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! cinematch build --catalog data/movies.json
//! cinematch recommend --title "Inception" -k 5
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use cinematch::prelude::*;
//!
//! let catalog = Catalog::from_json_str(r#"[
//!     {"title": "Inception", "genre": "Sci-Fi Thriller",
//!      "description": "A thief enters dreams to steal secrets."},
//!     {"title": "Tenet", "genre": "Sci-Fi Thriller",
//!      "description": "A secret agent manipulates time to stop an attack."}
//! ]"#).unwrap();
//!
//! let engine = RecommendEngine::build(&catalog).unwrap();
//! for r in engine.recommend("Inception", 5).unwrap() {
//!     println!("{}  {:.3}", r.title, r.score);
//! }
//! ```
//!
//! ## Crate Structure
//!
//! - `cinematch-core` - Catalog, TF-IDF vectorizer, similarity matrix, engine
//! - `cinematch-storage` - Snapshot persistence of built artifacts
//! - `cinematch-enrich` - TMDB poster lookup for recommendation results

// Re-export core types
pub use cinematch_core::{
    Catalog, EnrichedRecommendation, Error, Item, ItemRecord, NoPosters, PosterSource,
    Recommendation, RecommendEngine, Result, SharedEngine, SimilarityMatrix, TfidfVectorizer,
    Vector, Vocabulary,
};

// Re-export storage
pub use cinematch_storage::{EngineSnapshot, SnapshotStore};

// Re-export enrichment
pub use cinematch_enrich::TmdbPosterSource;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Catalog, EngineSnapshot, EnrichedRecommendation, Error, Item, ItemRecord, NoPosters,
        PosterSource, Recommendation, RecommendEngine, Result, SharedEngine, SimilarityMatrix,
        SnapshotStore, TfidfVectorizer, TmdbPosterSource, Vector, Vocabulary,
    };
}
