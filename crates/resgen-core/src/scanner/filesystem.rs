//! Filesystem scanning helpers for resource collection.

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::errors::{ResgenError, ResgenResult};
use crate::models::Qualifier;
use crate::scanner::qualifiers::{parse_dir_name, DirKind};

/// A top-level directory of the resource tree, e.g. `drawable-en-dark`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceDir {
    pub path: PathBuf,
    pub dir_name: String,
    pub kind: DirKind,
    pub qualifiers: Vec<Qualifier>,
}

pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// List and parse the type directories directly under `root`, sorted by name.
///
/// A missing root is an empty resource set. Stray top-level files are skipped.
pub fn list_resource_dirs(root: &Path) -> ResgenResult<Vec<ResourceDir>> {
    if !root.exists() {
        debug!("Resource directory {} does not exist", root.display());
        return Ok(vec![]);
    }

    let mut entries = Vec::new();
    for entry in std::fs::read_dir(root).map_err(ResgenError::io_at(root))? {
        let entry = entry.map_err(ResgenError::io_at(root))?;
        entries.push(entry.path());
    }
    entries.sort();

    let mut dirs = Vec::new();
    for path in entries {
        let name = path
            .file_name()
            .map(|f| f.to_string_lossy().to_string())
            .unwrap_or_default();
        if is_hidden(&name) {
            continue;
        }
        if !path.is_dir() {
            warn!("Ignoring file outside of a resource type directory: {}", path.display());
            continue;
        }
        let parsed = parse_dir_name(&name)?;
        dirs.push(ResourceDir {
            path,
            dir_name: name,
            kind: parsed.kind,
            qualifiers: parsed.qualifiers,
        });
    }
    Ok(dirs)
}

/// Every non-hidden file below `dir`, in file-name order at each level.
pub fn iter_resource_files(dir: &Path) -> ResgenResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    let walker = WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(&e.file_name().to_string_lossy()));
    for entry in walker {
        let entry = entry.map_err(|e| {
            let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| dir.to_path_buf());
            match e.into_io_error() {
                Some(source) => ResgenError::IoAt { path, source },
                None => ResgenError::IoAt {
                    path,
                    source: std::io::Error::other("filesystem loop detected"),
                },
            }
        })?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// `path` relative to `root`, with `/` separators.
pub fn relative_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

pub fn compute_content_hash(path: &Path) -> ResgenResult<String> {
    let mut hasher = Sha256::new();
    let data = std::fs::read(path).map_err(ResgenError::io_at(path))?;
    hasher.update(&data);
    Ok(format!("{:x}", hasher.finalize()))
}
