//! Splitting one type's keys into fixed-size shards.

use heck::ToSnakeCase;

use crate::models::{ResourceDescriptor, ResourceType, Shard};

/// Contiguous shards of at most `shard_size` descriptors over the byte-wise
/// sorted key sequence. Only the last shard may be smaller.
///
/// Descriptors are sorted here, so callers may pass them in any order.
/// A `shard_size` of zero is treated as one.
pub fn partition(
    resource_type: ResourceType,
    mut descriptors: Vec<ResourceDescriptor>,
    shard_size: usize,
) -> Vec<Shard> {
    let shard_size = shard_size.max(1);
    descriptors.sort_by(|a, b| a.key.cmp(&b.key));

    let mut shards = Vec::with_capacity(descriptors.len().div_ceil(shard_size));
    let mut iter = descriptors.into_iter().peekable();
    while iter.peek().is_some() {
        let chunk: Vec<ResourceDescriptor> = iter.by_ref().take(shard_size).collect();
        shards.push(Shard {
            resource_type,
            index: shards.len(),
            descriptors: chunk,
        });
    }
    shards
}

/// Unit name of a shard: snake-cased type plus index, e.g. `string_array3`.
pub fn unit_name(resource_type: ResourceType, index: usize) -> String {
    format!("{}{}", resource_type.type_name().to_snake_case(), index)
}
