// simish-core/src/store/file.rs
//! A `CandidateStore` persisted as a single YAML or JSON document.
//!
//! The document holds the recorded pairs and the vote ledger. Files ending in
//! `.json` are read and written as JSON, everything else as YAML.
//!
//! An open `PairsFile` holds an exclusive lock on a sidecar `<name>.lock`
//! file until it is dropped, so a read-modify-write cycle never interleaves
//! with another process. Saves go to `<name>.tmp`, which is renamed into place.

use anyhow::{Context, Result};
use fs2::FileExt;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use simish_votes::VoteDirection;

use super::{CandidateStore, MemoryStore, VoteRecord};
use crate::candidate::Candidate;
use crate::errors::SimishError;

const TMP_SUFFIX: &str = ".tmp";
const LOCK_SUFFIX: &str = ".lock";

/// On-disk layout of a pairs file.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PairsDocument {
    pub pairs: Vec<Candidate>,
    pub votes: Vec<VoteRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => DocumentFormat::Json,
            _ => DocumentFormat::Yaml,
        }
    }
}

/// A `MemoryStore` bound to the file it was loaded from.
#[derive(Debug)]
pub struct PairsFile {
    path: PathBuf,
    store: MemoryStore,
    lock: File,
}

impl PairsFile {
    /// Locks and loads `path`, or starts empty if it does not exist yet.
    ///
    /// Blocks while another `PairsFile` holds the same path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let lock = acquire_lock(&sidecar_path(&path, LOCK_SUFFIX))
            .with_context(|| format!("Failed to lock pairs file {}", path.display()))?;

        let document = if path.exists() {
            read_document(&path)?
        } else {
            debug!("Pairs file {} does not exist yet, starting empty", path.display());
            PairsDocument::default()
        };
        info!(
            "Loaded {} pairs and {} vote records from {}",
            document.pairs.len(),
            document.votes.len(),
            path.display()
        );
        Ok(Self {
            path,
            store: MemoryStore::from_parts(document.pairs, document.votes),
            lock,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn store(&self) -> &MemoryStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut MemoryStore {
        &mut self.store
    }

    /// Writes the current pairs and votes back to disk.
    pub fn save(&self) -> Result<()> {
        let document = PairsDocument {
            pairs: self.store.pairs().to_vec(),
            votes: self.store.votes().cloned().collect(),
        };
        write_document(&self.path, &document)
            .with_context(|| format!("Failed to write pairs file {}", self.path.display()))
    }
}

impl Drop for PairsFile {
    fn drop(&mut self) {
        if let Err(e) = FileExt::unlock(&self.lock) {
            debug!("Failed to release lock on {}: {}", self.path.display(), e);
        }
    }
}

impl CandidateStore for PairsFile {
    fn fetch_candidates(&self, room_id: i64) -> Result<Vec<Candidate>> {
        self.store.fetch_candidates(room_id)
    }

    fn all_pairs(&self, room_id: i64) -> Result<Vec<Candidate>> {
        self.store.all_pairs(room_id)
    }

    fn save_pair(&mut self, candidate: Candidate) -> Result<bool> {
        self.store.save_pair(candidate)
    }

    fn record_vote(
        &mut self,
        input_text: &str,
        matched_text: &str,
        room_id: i64,
        direction: VoteDirection,
    ) -> Result<VoteRecord> {
        self.store.record_vote(input_text, matched_text, room_id, direction)
    }
}

/// `pairs.yaml` with `suffix` appended, in the same directory.
fn sidecar_path(path: &Path, suffix: &str) -> PathBuf {
    let mut name: OsString = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(suffix);
    path.with_file_name(name)
}

fn acquire_lock(lock_path: &Path) -> std::result::Result<File, SimishError> {
    let lock = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(lock_path)?;
    lock.lock_exclusive()?;
    debug!("Acquired lock {}", lock_path.display());
    Ok(lock)
}

fn read_document(path: &Path) -> Result<PairsDocument> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read pairs file {}", path.display()))?;

    if raw.trim().is_empty() {
        return Ok(PairsDocument::default());
    }

    let document: PairsDocument = match DocumentFormat::for_path(path) {
        DocumentFormat::Json => serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse pairs file {}", path.display()))?,
        DocumentFormat::Yaml => serde_yml::from_str(&raw)
            .with_context(|| format!("Failed to parse pairs file {}", path.display()))?,
    };
    Ok(document)
}

// Callers hold the sidecar lock, so the tmp path is never shared.
fn write_document(path: &Path, document: &PairsDocument) -> Result<()> {
    let body = match DocumentFormat::for_path(path) {
        DocumentFormat::Json => serde_json::to_string_pretty(document)
            .map_err(|e| SimishError::SerializationError(e.to_string()))?,
        DocumentFormat::Yaml => serde_yml::to_string(document)
            .map_err(|e| SimishError::SerializationError(e.to_string()))?,
    };

    let tmp_path = sidecar_path(path, TMP_SUFFIX);
    {
        let mut tmp = OpenOptions::new().create(true).write(true).truncate(true).open(&tmp_path)?;
        tmp.write_all(body.as_bytes())?;
        tmp.sync_all()?;
    }

    fs::rename(&tmp_path, path)?;
    debug!("Wrote {} pairs to {}", document.pairs.len(), path.display());
    Ok(())
}
