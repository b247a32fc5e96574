//! Generation pipeline: scan, collect, partition and emit every resource
//! type on a worker pool, then commit the output directory in one step.

use std::path::Path;
use std::time::Instant;

use rayon::prelude::*;
use tracing::{error, info};

use crate::config::GeneratorConfig;
use crate::errors::ResgenResult;
use crate::generator::emit::{emit_root, emit_shard, ShardSummary, TypeLayout};
use crate::generator::manifest::{fingerprint, is_up_to_date, Manifest, MANIFEST_FILE};
use crate::generator::partition::partition;
use crate::generator::writer::StagedOutput;
use crate::models::ResourceType;
use crate::scanner::collect::{collect_type, scan, CollectOptions, Scan};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeReport {
    pub resource_type: ResourceType,
    pub keys: usize,
    pub shards: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationReport {
    /// The output already matched the inputs and was left as is.
    pub up_to_date: bool,
    pub fingerprint: String,
    pub types: Vec<TypeReport>,
    pub units_written: usize,
    pub elapsed_ms: u64,
}

impl From<&GeneratorConfig> for CollectOptions {
    fn from(config: &GeneratorConfig) -> Self {
        Self {
            path_prefix: config.path_prefix.clone(),
            content_hash: config.content_hash,
        }
    }
}

/// Collect, partition and emit one type, writing its units into `staged`.
fn generate_type(
    resource_type: ResourceType,
    scan: &Scan,
    config: &GeneratorConfig,
    staged: &StagedOutput,
) -> ResgenResult<TypeLayout> {
    let options = CollectOptions::from(config);
    let descriptors = collect_type(resource_type, scan.sources_for(resource_type), &options)?;
    let shards = partition(resource_type, descriptors, config.shard_size);

    let mut summaries = Vec::with_capacity(shards.len());
    for shard in &shards {
        let unit = emit_shard(shard, config)?;
        staged.write_unit(&unit)?;
        summaries.push(ShardSummary::of(shard));
    }

    let keys: usize = summaries.iter().map(|s| s.keys).sum();
    info!(
        "{}: {} keys in {} shards",
        resource_type,
        keys,
        summaries.len()
    );
    Ok(TypeLayout {
        resource_type,
        shards: summaries,
    })
}

/// Run [`generate_type`] for every type that has sources, one job per type.
///
/// Results come back in [`ResourceType::ALL`] order.
pub fn parallel_generate(
    scan: &Scan,
    config: &GeneratorConfig,
    staged: &StagedOutput,
) -> Vec<(ResourceType, ResgenResult<TypeLayout>)> {
    let jobs: Vec<ResourceType> = ResourceType::ALL
        .into_iter()
        .filter(|ty| !scan.sources_for(*ty).is_empty())
        .collect();
    if jobs.is_empty() {
        return vec![];
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.workers.max(1))
        .build();

    match pool {
        Ok(pool) => pool.install(|| {
            jobs.par_iter()
                .map(|ty| (*ty, generate_type(*ty, scan, config, staged)))
                .collect()
        }),
        Err(_) => {
            // Fallback to sequential
            jobs.iter()
                .map(|ty| (*ty, generate_type(*ty, scan, config, staged)))
                .collect()
        }
    }
}

/// Generate accessor sources for `resource_dir` into `out_dir`.
///
/// `out_dir` is replaced as a whole on success and left untouched on
/// failure. When the manifest in `out_dir` already matches the inputs
/// nothing is written.
pub fn generate(
    resource_dir: &Path,
    out_dir: &Path,
    config: &GeneratorConfig,
) -> ResgenResult<GenerationReport> {
    let started = Instant::now();
    let config = config.clone().validated()?;
    info!(
        "Generating resource accessors from {} into {}",
        resource_dir.display(),
        out_dir.display()
    );

    let scan = scan(resource_dir)?;
    let fingerprint = fingerprint(&scan, &config)?;

    if is_up_to_date(out_dir, &fingerprint) {
        let types = Manifest::read(out_dir)
            .map(|manifest| reports_from_manifest(&manifest))
            .unwrap_or_default();
        info!("Output in {} is up to date", out_dir.display());
        return Ok(GenerationReport {
            up_to_date: true,
            fingerprint,
            types,
            units_written: 0,
            elapsed_ms: started.elapsed().as_millis() as u64,
        });
    }

    let staged = StagedOutput::create(out_dir)?;
    let mut layouts = Vec::new();
    let mut first_error = None;
    for (resource_type, result) in parallel_generate(&scan, &config, &staged) {
        match result {
            Ok(layout) => layouts.push(layout),
            Err(e) => {
                error!("Generation failed for {}: {}", resource_type, e);
                first_error.get_or_insert(e);
            }
        }
    }
    if let Some(e) = first_error {
        return Err(e);
    }

    let root = emit_root(&layouts, &config)?;
    staged.write_unit(&root)?;
    let manifest = Manifest::new(fingerprint.clone(), &layouts);
    staged.write_file(MANIFEST_FILE, manifest.to_json()?.as_bytes())?;
    staged.commit()?;

    let types: Vec<TypeReport> = layouts
        .iter()
        .map(|layout| TypeReport {
            resource_type: layout.resource_type,
            keys: layout.shards.iter().map(|s| s.keys).sum(),
            shards: layout.shards.len(),
        })
        .collect();
    let units_written = types.iter().map(|t| t.shards).sum::<usize>() + 1;
    let elapsed_ms = started.elapsed().as_millis() as u64;
    info!(
        "Generated {} units for {} keys in {}ms",
        units_written,
        types.iter().map(|t| t.keys).sum::<usize>(),
        elapsed_ms
    );

    Ok(GenerationReport {
        up_to_date: false,
        fingerprint,
        types,
        units_written,
        elapsed_ms,
    })
}

fn reports_from_manifest(manifest: &Manifest) -> Vec<TypeReport> {
    let mut reports: Vec<TypeReport> = manifest
        .types
        .iter()
        .filter_map(|(name, entry)| {
            Some(TypeReport {
                resource_type: ResourceType::from_type_name(name)?,
                keys: entry.keys,
                shards: entry.shards.len(),
            })
        })
        .collect();
    reports.sort_by_key(|r| r.resource_type);
    reports
}
