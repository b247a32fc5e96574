//! Generator configuration: defaults, JSON files and environment overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{ResgenError, ResgenResult};
use crate::generator::emit::namespace;
use crate::guards::{clamp_shard_size, clamp_workers, DEFAULT_SHARD_SIZE, DEFAULT_WORKERS};
use crate::models::ResourceType;
use crate::scanner::sanitize::is_plain_identifier;

pub const ENV_SHARD_SIZE: &str = "RESGEN_SHARD_SIZE";
pub const ENV_WORKERS: &str = "RESGEN_WORKERS";
pub const ENV_CONTENT_HASH: &str = "RESGEN_CONTENT_HASH";
pub const ENV_PUBLIC_RES: &str = "RESGEN_PUBLIC_RES";

/// Type names the root unit refers to unqualified.
const ROOT_UNIT_NAMES: &[&str] = &["ResourceDescriptor", "ResourceType", "Option", "Iterator"];

/// Settings for one generation run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Maximum number of keys emitted into one unit.
    pub shard_size: usize,
    /// Name of the root accessor namespace.
    pub res_name: String,
    /// Emit `pub` instead of `pub(crate)` for the root namespace and `resolve`.
    pub public_res: bool,
    /// Module path generated code imports the runtime types from.
    pub runtime_path: String,
    /// Prepended to every emitted item path.
    pub path_prefix: String,
    /// Embed SHA-256 content hashes into emitted items.
    pub content_hash: bool,
    /// Worker threads used across resource types.
    pub workers: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            shard_size: DEFAULT_SHARD_SIZE,
            res_name: "Res".to_string(),
            public_res: false,
            runtime_path: "::resgen_core::runtime".to_string(),
            path_prefix: String::new(),
            content_hash: false,
            workers: DEFAULT_WORKERS,
        }
    }
}

impl GeneratorConfig {
    pub fn from_json_str(text: &str) -> ResgenResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_json_file(path: &Path) -> ResgenResult<Self> {
        let text = std::fs::read_to_string(path).map_err(ResgenError::io_at(path))?;
        debug!("Loaded generator config from {}", path.display());
        Self::from_json_str(&text)
    }

    /// Apply `RESGEN_*` environment variables on top of this config.
    pub fn with_env_overrides(self) -> ResgenResult<Self> {
        self.apply_overrides(|name| std::env::var(name).ok())
    }

    /// Same as [`Self::with_env_overrides`] with an injectable variable source.
    pub fn apply_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> ResgenResult<Self> {
        if let Some(value) = lookup(ENV_SHARD_SIZE) {
            self.shard_size = parse_count(ENV_SHARD_SIZE, &value)?;
        }
        if let Some(value) = lookup(ENV_WORKERS) {
            self.workers = parse_count(ENV_WORKERS, &value)?;
        }
        if let Some(value) = lookup(ENV_CONTENT_HASH) {
            self.content_hash = parse_flag(&value);
        }
        if let Some(value) = lookup(ENV_PUBLIC_RES) {
            self.public_res = parse_flag(&value);
        }
        Ok(self)
    }

    /// Clamp numeric limits and reject values that would emit invalid code.
    pub fn validated(mut self) -> ResgenResult<Self> {
        self.shard_size = clamp_shard_size(self.shard_size);
        self.workers = clamp_workers(self.workers);
        if !is_plain_identifier(&self.res_name) {
            return Err(ResgenError::Config(format!(
                "res_name '{}' is not a valid identifier",
                self.res_name
            )));
        }
        if clashes_with_root_unit(&self.res_name) {
            return Err(ResgenError::Config(format!(
                "res_name '{}' clashes with a name declared in the root unit",
                self.res_name
            )));
        }
        self.runtime_module()?;
        Ok(self)
    }

    /// `runtime_path` as a module path without generic arguments.
    pub fn runtime_module(&self) -> ResgenResult<syn::Path> {
        syn::parse_str::<syn::Path>(&self.runtime_path)
            .ok()
            .filter(|path| path.segments.iter().all(|s| s.arguments.is_none()))
            .ok_or_else(|| {
                ResgenError::Config(format!(
                    "runtime_path '{}' is not a valid module path",
                    self.runtime_path
                ))
            })
    }

    /// Visibility emitted on the root namespace and `resolve`.
    pub fn visibility(&self) -> &'static str {
        if self.public_res {
            "pub"
        } else {
            "pub(crate)"
        }
    }
}

/// Runtime imports, prelude types and shard module names (`drawable0`).
fn clashes_with_root_unit(name: &str) -> bool {
    ROOT_UNIT_NAMES.contains(&name)
        || ResourceType::ALL.into_iter().any(|ty| {
            name.strip_prefix(namespace(ty).as_str())
                .is_some_and(|index| !index.is_empty() && index.bytes().all(|b| b.is_ascii_digit()))
        })
}

fn parse_count(name: &str, value: &str) -> ResgenResult<usize> {
    value
        .trim()
        .parse::<usize>()
        .map_err(|_| ResgenError::Config(format!("{name} must be a positive integer, got '{value}'")))
}

fn parse_flag(value: &str) -> bool {
    let v = value.trim().to_lowercase();
    !matches!(v.as_str(), "0" | "false" | "no" | "off")
}
