//! Staged output: units are written into a scratch directory next to the
//! target and swapped in with renames once every unit succeeded.

use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tracing::debug;

use crate::errors::{ResgenError, ResgenResult};
use crate::generator::emit::SourceUnit;

pub struct StagedOutput {
    target: PathBuf,
    staging: TempDir,
}

impl StagedOutput {
    /// Create an empty staging directory beside `target`.
    pub fn create(target: &Path) -> ResgenResult<Self> {
        let parent = parent_dir(target);
        std::fs::create_dir_all(&parent).map_err(ResgenError::io_at(&parent))?;
        let staging = tempfile::Builder::new()
            .prefix(".resgen-staging-")
            .tempdir_in(&parent)
            .map_err(ResgenError::io_at(&parent))?;
        debug!("Staging output in {}", staging.path().display());
        Ok(Self {
            target: target.to_path_buf(),
            staging,
        })
    }

    pub fn path(&self) -> &Path {
        self.staging.path()
    }

    pub fn write_unit(&self, unit: &SourceUnit) -> ResgenResult<()> {
        self.write_file(&unit.file_name, unit.contents.as_bytes())
    }

    pub fn write_file(&self, file_name: &str, contents: &[u8]) -> ResgenResult<()> {
        let path = self.staging.path().join(file_name);
        std::fs::write(&path, contents).map_err(ResgenError::io_at(&path))?;
        debug!("Wrote {} ({} bytes)", file_name, contents.len());
        Ok(())
    }

    /// Replace the target with the staged directory.
    ///
    /// A previous target is moved aside first and restored if the final
    /// rename fails. Dropping without committing discards the staged units.
    pub fn commit(self) -> ResgenResult<PathBuf> {
        let parent = parent_dir(&self.target);
        let trash = tempfile::Builder::new()
            .prefix(".resgen-previous-")
            .tempdir_in(&parent)
            .map_err(ResgenError::io_at(&parent))?;
        let previous = trash.path().join("out");

        let had_previous = self.target.exists();
        if had_previous {
            std::fs::rename(&self.target, &previous).map_err(ResgenError::io_at(&self.target))?;
        }

        if let Err(source) = std::fs::rename(self.staging.path(), &self.target) {
            if had_previous {
                // Best effort restore.
                let _ = std::fs::rename(&previous, &self.target);
            }
            return Err(ResgenError::IoAt {
                path: self.target.clone(),
                source,
            });
        }

        debug!("Committed output to {}", self.target.display());
        Ok(self.target)
    }
}

fn parent_dir(target: &Path) -> PathBuf {
    match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
