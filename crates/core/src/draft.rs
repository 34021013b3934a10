// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Draft store for postings that have not reached the server yet.
//!
//! Drafts are kept in insertion order, oldest first, which is also the order
//! they are replayed in. There is no deduplication: saving the same posting
//! twice yields two entries.
//!
//! [`JsonlDraftStore`] persists one posting per line and fsyncs every write.
//! [`MemoryDraftStore`] keeps them in a `Vec`.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::clock::{ClockSource, SystemClock};
use crate::error::{Error, Result};
use crate::id::{generate_unique_id, DRAFT_PREFIX};
use crate::job::JobPosting;

/// Storage for postings awaiting sync.
pub trait DraftStore: Send {
    /// Appends `job` as a draft stamped with the current time and returns the
    /// stored copy. A job without an id is given a `draft-` id.
    fn save_draft(&mut self, job: JobPosting) -> Result<JobPosting>;

    /// All drafts, oldest first.
    fn list_drafts(&self) -> Result<Vec<JobPosting>>;

    /// Removes the oldest draft with `id`. Returns `false` if none matched.
    fn remove_draft(&mut self, id: &str) -> Result<bool>;

    /// Number of drafts held.
    fn len(&self) -> Result<usize> {
        Ok(self.list_drafts()?.len())
    }

    fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

/// Stamps `job` as a draft, assigning an id unique among `existing` if needed.
fn prepare_draft<C: ClockSource>(job: JobPosting, clock: &C, existing: &[JobPosting]) -> JobPosting {
    let now = clock.now();
    let mut job = job.into_draft(now);
    if job.id.is_empty() {
        job.id = generate_unique_id(DRAFT_PREFIX, &job.title, &now, |candidate| {
            existing.iter().any(|d| d.id == candidate)
        });
    }
    job
}

/// In-memory draft store.
#[derive(Debug, Default)]
pub struct MemoryDraftStore<C: ClockSource = SystemClock> {
    drafts: Vec<JobPosting>,
    clock: C,
}

impl MemoryDraftStore<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<C: ClockSource> MemoryDraftStore<C> {
    pub fn with_clock(clock: C) -> Self {
        MemoryDraftStore {
            drafts: Vec::new(),
            clock,
        }
    }
}

impl<C: ClockSource> DraftStore for MemoryDraftStore<C> {
    fn save_draft(&mut self, job: JobPosting) -> Result<JobPosting> {
        let draft = prepare_draft(job, &self.clock, &self.drafts);
        self.drafts.push(draft.clone());
        Ok(draft)
    }

    fn list_drafts(&self) -> Result<Vec<JobPosting>> {
        Ok(self.drafts.clone())
    }

    fn remove_draft(&mut self, id: &str) -> Result<bool> {
        match self.drafts.iter().position(|d| d.id == id) {
            Some(index) => {
                self.drafts.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn len(&self) -> Result<usize> {
        Ok(self.drafts.len())
    }
}

/// Draft store backed by a JSONL file.
///
/// Writes take an exclusive lock on the file and reads a shared one, so a
/// reader never sees another `hh` process halfway through a write.
#[derive(Debug)]
pub struct JsonlDraftStore<C: ClockSource = SystemClock> {
    path: PathBuf,
    clock: C,
}

impl JsonlDraftStore<SystemClock> {
    /// Create or open a draft store at the given path.
    pub fn open(path: &Path) -> Result<Self> {
        Self::open_with_clock(path, SystemClock)
    }
}

impl<C: ClockSource> JsonlDraftStore<C> {
    pub fn open_with_clock(path: &Path, clock: C) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        OpenOptions::new().create(true).append(true).open(path)?;

        Ok(JsonlDraftStore {
            path: path.to_path_buf(),
            clock,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open_locked(&self) -> Result<File> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.path)?;
        file.lock_exclusive()?;
        Ok(file)
    }
}

fn read_drafts<R: BufRead>(reader: R) -> Result<Vec<JobPosting>> {
    let mut drafts = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let draft = serde_json::from_str(&line).map_err(|e| Error::CorruptedStore {
            line: index + 1,
            reason: e.to_string(),
        })?;
        drafts.push(draft);
    }
    Ok(drafts)
}

fn write_drafts(file: &mut File, drafts: &[JobPosting]) -> Result<()> {
    file.set_len(0)?;
    file.seek(SeekFrom::Start(0))?;
    for draft in drafts {
        let json = serde_json::to_string(draft)?;
        writeln!(file, "{}", json)?;
    }
    file.sync_all()?;
    Ok(())
}

impl<C: ClockSource> DraftStore for JsonlDraftStore<C> {
    fn save_draft(&mut self, job: JobPosting) -> Result<JobPosting> {
        let mut file = self.open_locked()?;
        let existing = read_drafts(BufReader::new(&file))?;
        let draft = prepare_draft(job, &self.clock, &existing);

        file.seek(SeekFrom::End(0))?;
        let json = serde_json::to_string(&draft)?;
        writeln!(file, "{}", json)?;
        file.sync_all()?;

        Ok(draft)
    }

    fn list_drafts(&self) -> Result<Vec<JobPosting>> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        file.lock_shared()?;
        read_drafts(BufReader::new(&file))
    }

    fn remove_draft(&mut self, id: &str) -> Result<bool> {
        let mut file = self.open_locked()?;
        let mut drafts = read_drafts(BufReader::new(&file))?;

        let Some(index) = drafts.iter().position(|d| d.id == id) else {
            return Ok(false);
        };
        drafts.remove(index);
        write_drafts(&mut file, &drafts)?;
        Ok(true)
    }
}

#[cfg(test)]
#[path = "draft_tests.rs"]
mod tests;
