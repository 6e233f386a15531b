// Integration tests for cinematch
use cinematch_core::{Catalog, Error, NoPosters, RecommendEngine};
use cinematch_storage::{EngineSnapshot, SnapshotStore};

const SAMPLE_CATALOG: &str = include_str!("../data/movies.json");

fn sample_engine() -> RecommendEngine {
    let catalog = Catalog::from_json_str(SAMPLE_CATALOG).unwrap();
    RecommendEngine::build(&catalog).unwrap()
}

#[test]
fn test_inception_scenario() {
    let engine = sample_engine();
    let results = engine.recommend("Inception", 5).unwrap();

    assert_eq!(results.len(), 5);
    let titles: Vec<&str> = results.iter().map(|r| r.title.as_str()).collect();

    // Shared Sci-Fi/Thriller vocabulary dominates the TF-IDF overlap
    assert_eq!(titles[0], "Tenet");

    // Disjoint genre vocabulary keeps the biographies out of the top 5
    assert!(!titles.contains(&"The Social Network"));
    assert!(!titles.contains(&"The Imitation Game"));
}

#[test]
fn test_recommendations_never_include_query_item() {
    let engine = sample_engine();
    for title in engine.titles().to_vec() {
        let results = engine.recommend(&title, 9).unwrap();
        assert!(results.iter().all(|r| r.title != title));
    }
}

#[test]
fn test_matrix_symmetry_and_self_similarity() {
    let engine = sample_engine();
    let matrix = engine.matrix();

    for i in 0..matrix.len() {
        let diag = matrix.get(i, i).unwrap();
        for j in 0..matrix.len() {
            assert_eq!(matrix.get(i, j), matrix.get(j, i));
            assert!(matrix.get(i, j).unwrap() <= diag);
        }
    }
}

#[test]
fn test_scores_sorted_descending() {
    let engine = sample_engine();
    let results = engine.recommend("The Matrix", 9).unwrap();
    assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
}

#[test]
fn test_rebuild_is_deterministic() {
    let catalog = Catalog::from_json_str(SAMPLE_CATALOG).unwrap();
    let a = RecommendEngine::build(&catalog).unwrap();
    let b = RecommendEngine::build(&catalog).unwrap();

    assert_eq!(a.matrix(), b.matrix());
    assert_eq!(a.vocabulary(), b.vocabulary());
}

#[test]
fn test_snapshot_round_trip_query_results() {
    let dir = tempfile::tempdir().unwrap();
    let store = SnapshotStore::new(dir.path()).unwrap();

    let engine = sample_engine();
    store.save("engine", &EngineSnapshot::capture(&engine)).unwrap();
    let restored = store.load("engine").unwrap().into_engine().unwrap();

    for title in engine.titles() {
        assert_eq!(
            engine.recommend(title, 10).unwrap(),
            restored.recommend(title, 10).unwrap()
        );
    }
}

#[test]
fn test_unknown_title_fails() {
    let engine = sample_engine();
    assert!(matches!(
        engine.recommend("Nonexistent Movie", 5),
        Err(Error::TitleNotFound(t)) if t == "Nonexistent Movie"
    ));
}

#[test]
fn test_oversized_k_clamps_to_available() {
    let engine = sample_engine();
    // 10 items, self excluded
    let results = engine.recommend("Inception", 100).unwrap();
    assert_eq!(results.len(), 9);
}

#[test]
fn test_zero_k_is_rejected() {
    let engine = sample_engine();
    assert!(matches!(
        engine.recommend("Inception", 0),
        Err(Error::InvalidK(0))
    ));
}

#[test]
fn test_enriched_query_without_poster_source() {
    let engine = sample_engine();
    let results = engine.recommend_enriched("Inception", 5, &NoPosters).unwrap();

    assert_eq!(results.len(), 5);
    assert!(results.iter().all(|r| r.poster.is_none()));
    assert_eq!(results[0].title, "Tenet");
}
