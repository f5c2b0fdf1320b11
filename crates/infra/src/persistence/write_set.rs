// crates/infra/src/persistence/write_set.rs
use std::path::PathBuf;

use version_patch_shared_kernel::{InfraResult, InfrastructureError};

use super::FileWriter;

/// New contents for one file, together with what it held when read.
#[derive(Debug, Clone)]
pub struct StagedWrite {
    path: PathBuf,
    original: Vec<u8>,
    contents: Vec<u8>,
}

impl StagedWrite {
    pub fn new(path: impl Into<PathBuf>, original: impl Into<Vec<u8>>, contents: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            original: original.into(),
            contents: contents.into(),
        }
    }

    /// True when writing would not change the file.
    pub fn is_noop(&self) -> bool {
        self.original == self.contents
    }
}

/// Ordered group of staged writes committed all-or-nothing.
#[derive(Debug, Default)]
pub struct WriteSet {
    staged: Vec<StagedWrite>,
}

impl WriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, write: StagedWrite) {
        self.staged.push(write);
    }

    /// Write every staged file in order, each one atomically.
    ///
    /// No-op writes are skipped. If a write fails, files already written by
    /// this call are restored to their original bytes, newest first, and the
    /// write error is returned. A failed restore is reported as
    /// [`InfrastructureError::Rollback`] since the tree is then inconsistent.
    ///
    /// Returns the paths that were written.
    pub fn commit(self) -> InfraResult<Vec<PathBuf>> {
        let mut committed: Vec<&StagedWrite> = Vec::new();

        for write in &self.staged {
            if write.is_noop() {
                log::debug!("{} unchanged, skipping write", write.path.display());
                continue;
            }

            log::debug!("writing {} ({} bytes)", write.path.display(), write.contents.len());
            if let Err(source) = FileWriter::atomic_write(&write.path, &write.contents) {
                log::warn!(
                    "write to {} failed, rolling back {} file(s)",
                    write.path.display(),
                    committed.len()
                );
                Self::rollback(&committed)?;
                return Err(InfrastructureError::FileWrite {
                    path: write.path.clone(),
                    source,
                });
            }
            committed.push(write);
        }

        Ok(committed.into_iter().map(|w| w.path.clone()).collect())
    }

    fn rollback(committed: &[&StagedWrite]) -> InfraResult<()> {
        let mut first_failure = None;
        for write in committed.iter().rev() {
            match FileWriter::atomic_write(&write.path, &write.original) {
                Ok(()) => log::info!("restored {}", write.path.display()),
                Err(source) => {
                    log::error!("could not restore {}: {source}", write.path.display());
                    if first_failure.is_none() {
                        first_failure = Some(InfrastructureError::Rollback {
                            path: write.path.clone(),
                            source,
                        });
                    }
                }
            }
        }
        first_failure.map_or(Ok(()), Err)
    }
}
