// Generated by resgen. Do not edit.

#[allow(unused_imports)]
use ::resgen_core::runtime::{
    Density, Qualifier, ResourceDescriptor, ResourceItem, ResourceType, Theme,
};
static ITEMS_0: [ResourceItem; 2] = [
    ResourceItem::new(&[Qualifier::Theme(Theme::Dark)], "drawable-dark/ic-launcher.xml", None),
    ResourceItem::new(&[], "drawable/ic-launcher.xml", None),
];
static ITEMS_1: [ResourceItem; 1] = [
    ResourceItem::new(&[], "drawable/icon_17198.xml", None),
];
pub(crate) static TABLE: [ResourceDescriptor; 2] = [
    ResourceDescriptor::new(
        ResourceType::Drawable,
        "ic_launcher",
        "drawable:ic_launcher",
        &ITEMS_0,
    ),
    ResourceDescriptor::new(ResourceType::Drawable, "icon_17198", "drawable:icon_17198", &ITEMS_1),
];
pub(crate) fn lookup(key: &str) -> Option<&'static ResourceDescriptor> {
    TABLE.binary_search_by(|descriptor| descriptor.key().cmp(key)).ok().map(|index| &TABLE[index])
}
#[allow(non_snake_case)]
pub mod accessors {
    pub fn ic_launcher() -> &'static super::ResourceDescriptor {
        &super::TABLE[0]
    }
    pub fn icon_17198() -> &'static super::ResourceDescriptor {
        &super::TABLE[1]
    }
}
