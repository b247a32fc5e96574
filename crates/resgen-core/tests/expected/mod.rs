// Generated by resgen. Do not edit.

#[allow(unused_imports)]
use ::resgen_core::runtime::{ResourceDescriptor, ResourceType};
mod drawable0 {
    include!("drawable0.rs");
}
mod drawable1 {
    include!("drawable1.rs");
}
mod font0 {
    include!("font0.rs");
}
mod string0 {
    include!("string0.rs");
}
mod string_array0 {
    include!("string_array0.rs");
}
mod plurals0 {
    include!("plurals0.rs");
}
#[allow(non_snake_case)]
pub(crate) mod Res {
    pub mod drawable {
        pub use super::super::drawable0::accessors::*;
        pub use super::super::drawable1::accessors::*;
    }
    pub mod font {
        pub use super::super::font0::accessors::*;
    }
    pub mod string {
        pub use super::super::string0::accessors::*;
    }
    pub mod string_array {
        pub use super::super::string_array0::accessors::*;
    }
    pub mod plurals {
        pub use super::super::plurals0::accessors::*;
    }
}
static DRAWABLE_SHARDS: [&[ResourceDescriptor]; 2] = [&drawable0::TABLE, &drawable1::TABLE];
static FONT_SHARDS: [&[ResourceDescriptor]; 1] = [&font0::TABLE];
static STRING_SHARDS: [&[ResourceDescriptor]; 1] = [&string0::TABLE];
static STRING_ARRAY_SHARDS: [&[ResourceDescriptor]; 1] = [&string_array0::TABLE];
static PLURALS_SHARDS: [&[ResourceDescriptor]; 1] = [&plurals0::TABLE];
pub(crate) fn resolve(
    resource_type: ResourceType,
    key: &str,
) -> Option<&'static ResourceDescriptor> {
    match resource_type {
        ResourceType::Drawable => {
            if key < "icon_172" {
                drawable0::lookup(key)
            } else {
                drawable1::lookup(key)
            }
        }
        ResourceType::Font => font0::lookup(key),
        ResourceType::String => string0::lookup(key),
        ResourceType::StringArray => string_array0::lookup(key),
        ResourceType::Plurals => plurals0::lookup(key),
        _ => None,
    }
}
/// Every descriptor of `resource_type`, in key order.
pub(crate) fn all(
    resource_type: ResourceType,
) -> impl Iterator<Item = &'static ResourceDescriptor> {
    let shards: &'static [&'static [ResourceDescriptor]] = match resource_type {
        ResourceType::Drawable => &DRAWABLE_SHARDS,
        ResourceType::Font => &FONT_SHARDS,
        ResourceType::String => &STRING_SHARDS,
        ResourceType::StringArray => &STRING_ARRAY_SHARDS,
        ResourceType::Plurals => &PLURALS_SHARDS,
        _ => &[],
    };
    shards.iter().copied().flatten()
}
