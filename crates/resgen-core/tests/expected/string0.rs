// Generated by resgen. Do not edit.

#[allow(unused_imports)]
use ::resgen_core::runtime::{
    Density, Qualifier, ResourceDescriptor, ResourceItem, ResourceType, Theme,
};
static ITEMS_0: [ResourceItem; 2] = [
    ResourceItem::new(&[Qualifier::Language("fr")], "values-fr/strings.xml", None),
    ResourceItem::new(&[], "values/strings.xml", None),
];
static ITEMS_1: [ResourceItem; 1] = [
    ResourceItem::new(&[], "values/strings.xml", None),
];
pub(crate) static TABLE: [ResourceDescriptor; 2] = [
    ResourceDescriptor::new(ResourceType::String, "app_name", "string:app_name", &ITEMS_0),
    ResourceDescriptor::new(ResourceType::String, "greeting", "string:greeting", &ITEMS_1),
];
pub(crate) fn lookup(key: &str) -> Option<&'static ResourceDescriptor> {
    TABLE.binary_search_by(|descriptor| descriptor.key().cmp(key)).ok().map(|index| &TABLE[index])
}
#[allow(non_snake_case)]
pub mod accessors {
    pub fn app_name() -> &'static super::ResourceDescriptor {
        &super::TABLE[0]
    }
    pub fn greeting() -> &'static super::ResourceDescriptor {
        &super::TABLE[1]
    }
}
