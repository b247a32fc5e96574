//! Shared bounds for configurable generation limits.

// Shard sizing
pub const DEFAULT_SHARD_SIZE: usize = 500;
pub const MIN_SHARD_SIZE: usize = 1;
pub const MAX_SHARD_SIZE: usize = 10_000;

// Worker pool
pub const DEFAULT_WORKERS: usize = 4;
pub const MIN_WORKERS: usize = 1;
pub const MAX_WORKERS: usize = 64;

pub fn clamp_int(value: usize, minimum: usize, maximum: usize) -> usize {
    value.max(minimum).min(maximum)
}

pub fn clamp_shard_size(value: usize) -> usize {
    clamp_int(value, MIN_SHARD_SIZE, MAX_SHARD_SIZE)
}

pub fn clamp_workers(value: usize) -> usize {
    clamp_int(value, MIN_WORKERS, MAX_WORKERS)
}
