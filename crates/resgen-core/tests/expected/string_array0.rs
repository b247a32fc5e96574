// Generated by resgen. Do not edit.

#[allow(unused_imports)]
use ::resgen_core::runtime::{
    Density, Qualifier, ResourceDescriptor, ResourceItem, ResourceType, Theme,
};
static ITEMS_0: [ResourceItem; 1] = [
    ResourceItem::new(&[], "values/strings.xml", None),
];
pub(crate) static TABLE: [ResourceDescriptor; 1] = [
    ResourceDescriptor::new(ResourceType::StringArray, "planets", "string-array:planets", &ITEMS_0),
];
pub(crate) fn lookup(key: &str) -> Option<&'static ResourceDescriptor> {
    TABLE.binary_search_by(|descriptor| descriptor.key().cmp(key)).ok().map(|index| &TABLE[index])
}
#[allow(non_snake_case)]
pub mod accessors {
    pub fn planets() -> &'static super::ResourceDescriptor {
        &super::TABLE[0]
    }
}
