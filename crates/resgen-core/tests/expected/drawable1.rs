// Generated by resgen. Do not edit.

#[allow(unused_imports)]
use ::resgen_core::runtime::{
    Density, Qualifier, ResourceDescriptor, ResourceItem, ResourceType, Theme,
};
static ITEMS_0: [ResourceItem; 2] = [
    ResourceItem::new(
        &[Qualifier::Language("en"), Qualifier::Region("US"), Qualifier::Density(Density::Xhdpi)],
        "drawable-en-rUS-xhdpi/icon_172.png",
        None,
    ),
    ResourceItem::new(&[], "drawable/icon_172.xml", None),
];
static ITEMS_1: [ResourceItem; 1] = [
    ResourceItem::new(&[], "drawable/icon_1720.xml", None),
];
pub(crate) static TABLE: [ResourceDescriptor; 2] = [
    ResourceDescriptor::new(ResourceType::Drawable, "icon_172", "drawable:icon_172", &ITEMS_0),
    ResourceDescriptor::new(ResourceType::Drawable, "icon_1720", "drawable:icon_1720", &ITEMS_1),
];
pub(crate) fn lookup(key: &str) -> Option<&'static ResourceDescriptor> {
    TABLE.binary_search_by(|descriptor| descriptor.key().cmp(key)).ok().map(|index| &TABLE[index])
}
#[allow(non_snake_case)]
pub mod accessors {
    pub fn icon_172() -> &'static super::ResourceDescriptor {
        &super::TABLE[0]
    }
    pub fn icon_1720() -> &'static super::ResourceDescriptor {
        &super::TABLE[1]
    }
}
