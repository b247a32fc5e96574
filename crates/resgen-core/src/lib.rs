//! Resgen core library: compile-time accessor generation for resource trees.
//!
//! A resource directory (`drawable/`, `font/`, `values/`, `files/` and their
//! qualified variants) is scanned into typed descriptors, each resource type
//! is split into fixed-size shards, and every shard is emitted as one Rust
//! source unit. A root unit ties the shards together behind a `Res` namespace
//! (`Res::drawable::icon()`), a `resolve(type, key)` router and an
//! `all(type)` listing in key order.
//!
//! Generated code depends only on [`runtime`]; a build script usually calls
//! [`generate`] and `include!`s the root unit from `OUT_DIR`.

pub mod config;
pub mod errors;
pub mod generator;
pub mod guards;
pub mod models;
pub mod runtime;
pub mod scanner;

pub use config::GeneratorConfig;
pub use errors::{ResgenError, ResgenResult};
pub use generator::emit::{emit_root, emit_shard, ShardSummary, SourceUnit, TypeLayout};
pub use generator::partition::partition;
pub use generator::pipeline::{generate, GenerationReport, TypeReport};
pub use scanner::collect::{collect, CollectOptions, ResourceSet};
