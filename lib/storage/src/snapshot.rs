// Snapshot persistence for built recommendation artifacts
use crate::{Error, Result};
use atomicwrites::{AtomicFile, OverwriteBehavior};
use chrono::{DateTime, Utc};
use cinematch_core::{RecommendEngine, SimilarityMatrix, Vocabulary};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

/// Snapshot description for listings and logs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotDescription {
    pub name: String,
    pub creation_time: Option<String>,
    pub size: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
}

/// Everything a query needs, captured at build time
///
/// Feature texts are not stored; once the matrix exists they are no
/// longer needed to answer queries.
#[derive(Debug, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub titles: Vec<String>,
    pub vocabulary: Vocabulary,
    pub matrix: SimilarityMatrix,
    pub created_at: i64,
}

impl EngineSnapshot {
    /// Capture the artifacts of a built engine
    #[must_use]
    pub fn capture(engine: &RecommendEngine) -> Self {
        Self {
            titles: engine.titles().to_vec(),
            vocabulary: engine.vocabulary().clone(),
            matrix: engine.matrix().clone(),
            created_at: Utc::now().timestamp(),
        }
    }

    /// Restore a query-ready engine without recomputation
    pub fn into_engine(self) -> cinematch_core::Result<RecommendEngine> {
        RecommendEngine::from_parts(self.titles, self.vocabulary, self.matrix)
    }
}

/// Directory of engine snapshots
///
/// Snapshots are bincode-serialized, gzip-compressed and written
/// atomically so a crash mid-write never leaves a truncated file
/// behind.
pub struct SnapshotStore {
    dir: PathBuf,
}

impl SnapshotStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn snapshot_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.snapshot"))
    }

    /// Write a snapshot, replacing any previous one of the same name
    pub fn save(&self, name: &str, snapshot: &EngineSnapshot) -> Result<SnapshotDescription> {
        let path = self.snapshot_path(name);
        let encoded =
            bincode::serialize(snapshot).map_err(|e| Error::Serialization(e.to_string()))?;

        let file = AtomicFile::new(&path, OverwriteBehavior::AllowOverwrite);
        file.write(|f| -> std::io::Result<()> {
            let mut encoder = GzEncoder::new(BufWriter::new(f), Compression::default());
            encoder.write_all(&encoded)?;
            encoder.finish()?.flush()?;
            Ok(())
        })
        .map_err(|e| match e {
            atomicwrites::Error::Internal(e) | atomicwrites::Error::User(e) => Error::Io(e),
        })?;

        let file_data = fs::read(&path)?;
        let checksum = format!("{:x}", Sha256::digest(&file_data));
        let metadata = fs::metadata(&path)?;

        Ok(SnapshotDescription {
            name: name.to_string(),
            creation_time: DateTime::from_timestamp(snapshot.created_at, 0)
                .map(|dt| dt.format("%Y-%m-%dT%H:%M:%SZ").to_string()),
            size: metadata.len(),
            checksum: Some(checksum),
        })
    }

    /// Read a snapshot back
    pub fn load(&self, name: &str) -> Result<EngineSnapshot> {
        let path = self.snapshot_path(name);
        let file = File::open(&path)?;

        let mut decoder = GzDecoder::new(BufReader::new(file));
        let mut decoded = Vec::new();
        decoder
            .read_to_end(&mut decoded)
            .map_err(|e| Error::Corrupt(format!("{}: {e}", path.display())))?;

        bincode::deserialize(&decoded)
            .map_err(|e| Error::Corrupt(format!("{}: {e}", path.display())))
    }

    /// Describe all snapshots in the store
    pub fn list(&self) -> Result<Vec<SnapshotDescription>> {
        let mut snapshots = Vec::new();

        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("snapshot") {
                continue;
            }

            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            let metadata = entry.metadata()?;
            let creation_time = metadata
                .modified()
                .ok()
                .and_then(|t| t.duration_since(std::time::UNIX_EPOCH).ok())
                .and_then(|d| DateTime::from_timestamp(d.as_secs() as i64, 0))
                .map(|dt| dt.format("%Y-%m-%dT%H:%M:%SZ").to_string());

            snapshots.push(SnapshotDescription {
                name: stem.to_string(),
                creation_time,
                size: metadata.len(),
                checksum: None,
            });
        }

        snapshots.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(snapshots)
    }
}
