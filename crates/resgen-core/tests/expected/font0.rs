// Generated by resgen. Do not edit.

#[allow(unused_imports)]
use ::resgen_core::runtime::{
    Density, Qualifier, ResourceDescriptor, ResourceItem, ResourceType, Theme,
};
static ITEMS_0: [ResourceItem; 1] = [
    ResourceItem::new(&[], "font/type.ttf", None),
];
pub(crate) static TABLE: [ResourceDescriptor; 1] = [
    ResourceDescriptor::new(ResourceType::Font, "type", "font:type", &ITEMS_0),
];
pub(crate) fn lookup(key: &str) -> Option<&'static ResourceDescriptor> {
    TABLE.binary_search_by(|descriptor| descriptor.key().cmp(key)).ok().map(|index| &TABLE[index])
}
#[allow(non_snake_case)]
pub mod accessors {
    pub fn r#type() -> &'static super::ResourceDescriptor {
        &super::TABLE[0]
    }
}
