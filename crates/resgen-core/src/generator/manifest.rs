//! `resgen-manifest.json`: input fingerprint and shard layout of the last run.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::config::GeneratorConfig;
use crate::errors::ResgenResult;
use crate::generator::emit::{TypeLayout, ROOT_UNIT};
use crate::scanner::collect::Scan;
use crate::scanner::filesystem::compute_content_hash;

pub const MANIFEST_FILE: &str = "resgen-manifest.json";
pub const MANIFEST_VERSION: u32 = 1;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub version: u32,
    pub fingerprint: String,
    /// Keyed by type name (`drawable`, `string-array`, ...).
    pub types: BTreeMap<String, TypeManifest>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeManifest {
    pub keys: usize,
    pub shards: Vec<ShardManifest>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShardManifest {
    pub unit: String,
    pub first: String,
    pub last: String,
    pub keys: usize,
}

impl Manifest {
    pub fn new(fingerprint: String, layouts: &[TypeLayout]) -> Self {
        let types = layouts
            .iter()
            .filter(|layout| !layout.shards.is_empty())
            .map(|layout| {
                let shards: Vec<ShardManifest> = layout
                    .shards
                    .iter()
                    .map(|shard| ShardManifest {
                        unit: shard.unit_name.clone(),
                        first: shard.first_key.clone(),
                        last: shard.last_key.clone(),
                        keys: shard.keys,
                    })
                    .collect();
                let entry = TypeManifest {
                    keys: shards.iter().map(|s| s.keys).sum(),
                    shards,
                };
                (layout.resource_type.type_name().to_string(), entry)
            })
            .collect();
        Self {
            version: MANIFEST_VERSION,
            fingerprint,
            types,
        }
    }

    /// Pretty JSON with a trailing newline.
    pub fn to_json(&self) -> ResgenResult<String> {
        let mut text = serde_json::to_string_pretty(self)?;
        text.push('\n');
        Ok(text)
    }

    /// Read the manifest of an existing output directory.
    ///
    /// A missing or unreadable manifest is `None`; the output is then
    /// regenerated.
    pub fn read(out_dir: &Path) -> Option<Self> {
        let path = out_dir.join(MANIFEST_FILE);
        let text = std::fs::read_to_string(&path).ok()?;
        match serde_json::from_str::<Manifest>(&text) {
            Ok(manifest) if manifest.version == MANIFEST_VERSION => Some(manifest),
            Ok(manifest) => {
                debug!("Ignoring manifest version {}", manifest.version);
                None
            }
            Err(e) => {
                debug!("Ignoring unreadable manifest {}: {}", path.display(), e);
                None
            }
        }
    }
}

/// SHA-256 over the generator version, the config and every input file.
///
/// Content is hashed for every input regardless of `content_hash`, so edits
/// that keep file names invalidate the output.
pub fn fingerprint(scan: &Scan, config: &GeneratorConfig) -> ResgenResult<String> {
    let mut hasher = Sha256::new();
    hasher.update(env!("CARGO_PKG_VERSION").as_bytes());
    hasher.update([0u8]);
    hasher.update(serde_json::to_vec(config)?);
    hasher.update([0u8]);
    for (rel_path, absolute) in &scan.inputs {
        let content = compute_content_hash(absolute)?;
        hasher.update(rel_path.as_bytes());
        hasher.update([0u8]);
        hasher.update(content.as_bytes());
        hasher.update([0u8]);
    }
    Ok(format!("{:x}", hasher.finalize()))
}

/// True when `out_dir` holds a manifest with this fingerprint and every unit
/// it lists.
pub fn is_up_to_date(out_dir: &Path, fingerprint: &str) -> bool {
    let Some(manifest) = Manifest::read(out_dir) else {
        return false;
    };
    if manifest.fingerprint != fingerprint || !out_dir.join(ROOT_UNIT).is_file() {
        return false;
    }
    manifest
        .types
        .values()
        .flat_map(|t| &t.shards)
        .all(|shard| out_dir.join(format!("{}.rs", shard.unit)).is_file())
}
