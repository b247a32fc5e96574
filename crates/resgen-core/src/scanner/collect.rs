//! Resource collection: scan a resource tree, group sources by key and merge
//! qualifier variants into descriptors.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::errors::{ResgenError, ResgenResult};
use crate::models::{Qualifier, ResourceDescriptor, ResourceItem, ResourceKey, ResourceType};
use crate::scanner::filesystem::{
    compute_content_hash, iter_resource_files, list_resource_dirs, relative_path,
};
use crate::scanner::qualifiers::DirKind;
use crate::scanner::sanitize::sanitize_key;
use crate::scanner::values::parse_values;

/// One named resource source before sanitization.
///
/// For typed directories this is a file; for values files it is one declared
/// entry, so several sources can share a path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceFile {
    pub absolute: PathBuf,
    /// Relative to the resource root, `/`-separated.
    pub rel_path: String,
    /// Raw name: the file stem, or the `name` attribute of a values entry.
    pub name: String,
    pub qualifiers: Vec<Qualifier>,
}

/// Result of walking a resource tree.
#[derive(Clone, Debug, Default)]
pub struct Scan {
    pub root: PathBuf,
    /// Every input file, sorted by relative path.
    pub inputs: Vec<(String, PathBuf)>,
    pub sources: BTreeMap<ResourceType, Vec<SourceFile>>,
}

impl Scan {
    pub fn sources_for(&self, resource_type: ResourceType) -> &[SourceFile] {
        self.sources
            .get(&resource_type)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CollectOptions {
    pub path_prefix: String,
    pub content_hash: bool,
}

/// Sorted descriptors of every type that has at least one key.
pub type ResourceSet = BTreeMap<ResourceType, Vec<ResourceDescriptor>>;

// ---------------------------------------------------------------------------
// Scanning
// ---------------------------------------------------------------------------

/// Walk `root` and bucket every source by resource type.
///
/// Values files are parsed here; a malformed one fails the scan.
pub fn scan(root: &Path) -> ResgenResult<Scan> {
    let mut result = Scan {
        root: root.to_path_buf(),
        ..Default::default()
    };

    for dir in list_resource_dirs(root)? {
        for path in iter_resource_files(&dir.path)? {
            let rel_path = relative_path(root, &path);
            result.inputs.push((rel_path.clone(), path.clone()));

            match dir.kind {
                DirKind::Typed(ResourceType::Files) => {
                    debug!("Skipping accessor generation for {}", rel_path);
                }
                DirKind::Typed(resource_type) => {
                    let name = file_stem(&path);
                    result
                        .sources
                        .entry(resource_type)
                        .or_default()
                        .push(SourceFile {
                            absolute: path,
                            rel_path,
                            name,
                            qualifiers: dir.qualifiers.clone(),
                        });
                }
                DirKind::Values => {
                    if !is_xml(&path) {
                        debug!("Skipping non-XML file in values directory: {}", rel_path);
                        continue;
                    }
                    let text =
                        std::fs::read_to_string(&path).map_err(ResgenError::io_at(&path))?;
                    let entries = parse_values(&text).map_err(|reason| {
                        ResgenError::InvalidValuesFile {
                            file: rel_path.clone(),
                            reason,
                        }
                    })?;
                    for entry in entries {
                        result
                            .sources
                            .entry(entry.resource_type)
                            .or_default()
                            .push(SourceFile {
                                absolute: path.clone(),
                                rel_path: rel_path.clone(),
                                name: entry.name,
                                qualifiers: dir.qualifiers.clone(),
                            });
                    }
                }
            }
        }
    }

    result.inputs.sort();
    info!(
        "Scanned {} input files under {}",
        result.inputs.len(),
        root.display()
    );
    Ok(result)
}

/// File name without its last extension.
fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

fn is_xml(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("xml"))
}

// ---------------------------------------------------------------------------
// Grouping
// ---------------------------------------------------------------------------

/// Group one type's sources into descriptors sorted byte-wise by key.
///
/// Sources sanitizing to the same key merge into one descriptor when their
/// qualifier sets differ; identical qualifier sets are a conflict.
pub fn collect_type(
    resource_type: ResourceType,
    sources: &[SourceFile],
    options: &CollectOptions,
) -> ResgenResult<Vec<ResourceDescriptor>> {
    let mut grouped: BTreeMap<ResourceKey, Vec<&SourceFile>> = BTreeMap::new();
    for source in sources {
        let key = sanitize_key(&source.name).map_err(|reason| {
            ResgenError::InvalidResourceName {
                path: source.rel_path.clone(),
                name: source.name.clone(),
                reason,
            }
        })?;
        grouped.entry(key).or_default().push(source);
    }

    let mut hashes: HashMap<&Path, String> = HashMap::new();
    let mut descriptors = Vec::with_capacity(grouped.len());

    for (key, mut members) in grouped {
        members.sort_by(|a, b| {
            a.qualifiers
                .cmp(&b.qualifiers)
                .then_with(|| a.rel_path.cmp(&b.rel_path))
        });
        for pair in members.windows(2) {
            if pair[0].qualifiers == pair[1].qualifiers {
                let files = members
                    .iter()
                    .filter(|m| m.qualifiers == pair[0].qualifiers)
                    .map(|m| m.rel_path.clone())
                    .collect();
                return Err(ResgenError::DuplicateResourceConflict {
                    resource_type: resource_type.type_name().to_string(),
                    key: key.to_string(),
                    files,
                });
            }
        }

        let mut items = Vec::with_capacity(members.len());
        for member in members {
            let content_hash = if options.content_hash {
                let hash = match hashes.get(member.absolute.as_path()) {
                    Some(hash) => hash.clone(),
                    None => {
                        let hash = compute_content_hash(&member.absolute)?;
                        hashes.insert(member.absolute.as_path(), hash.clone());
                        hash
                    }
                };
                Some(hash)
            } else {
                None
            };
            items.push(ResourceItem {
                qualifiers: member.qualifiers.clone(),
                path: format!("{}{}", options.path_prefix, member.rel_path),
                content_hash,
                source: member.rel_path.clone(),
                absolute: member.absolute.clone(),
            });
        }
        items.sort_by(|a, b| a.path.cmp(&b.path));

        descriptors.push(ResourceDescriptor {
            resource_type,
            key,
            items,
        });
    }

    debug!(
        "Collected {} {} keys from {} sources",
        descriptors.len(),
        resource_type,
        sources.len()
    );
    Ok(descriptors)
}

/// Scan `resource_dir` and collect every resource type.
pub fn collect(resource_dir: &Path, options: &CollectOptions) -> ResgenResult<ResourceSet> {
    let scan = scan(resource_dir)?;
    let mut set = ResourceSet::new();
    for (resource_type, sources) in &scan.sources {
        let descriptors = collect_type(*resource_type, sources, options)?;
        if !descriptors.is_empty() {
            set.insert(*resource_type, descriptors);
        }
    }
    Ok(set)
}
