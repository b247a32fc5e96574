//! Runtime descriptor types referenced by generated accessor code.
//!
//! Generated units build `static` tables out of these types, so every
//! constructor here is a `const fn` and every string is `&'static str`.

use std::fmt;

// ---------------------------------------------------------------------------
// Resource types
// ---------------------------------------------------------------------------

/// Kind of a resource, shared by the generator and generated code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ResourceType {
    Drawable,
    Font,
    String,
    StringArray,
    Plurals,
    Files,
}

impl ResourceType {
    pub const ALL: [ResourceType; 6] = [
        ResourceType::Drawable,
        ResourceType::Font,
        ResourceType::String,
        ResourceType::StringArray,
        ResourceType::Plurals,
        ResourceType::Files,
    ];

    /// Name used in descriptor ids (`"<type>:<key>"`).
    pub const fn type_name(self) -> &'static str {
        match self {
            ResourceType::Drawable => "drawable",
            ResourceType::Font => "font",
            ResourceType::String => "string",
            ResourceType::StringArray => "string-array",
            ResourceType::Plurals => "plurals",
            ResourceType::Files => "files",
        }
    }

    pub fn from_type_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ty| ty.type_name() == name)
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

// ---------------------------------------------------------------------------
// Qualifier values
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Screen density buckets, ordered from lowest to highest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Density {
    Ldpi,
    #[default]
    Mdpi,
    Hdpi,
    Xhdpi,
    Xxhdpi,
    Xxxhdpi,
}

impl Density {
    pub const ALL: [Density; 6] = [
        Density::Ldpi,
        Density::Mdpi,
        Density::Hdpi,
        Density::Xhdpi,
        Density::Xxhdpi,
        Density::Xxxhdpi,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == value)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Density::Ldpi => "ldpi",
            Density::Mdpi => "mdpi",
            Density::Hdpi => "hdpi",
            Density::Xhdpi => "xhdpi",
            Density::Xxhdpi => "xxhdpi",
            Density::Xxxhdpi => "xxxhdpi",
        }
    }

    pub const fn dpi(self) -> u32 {
        match self {
            Density::Ldpi => 120,
            Density::Mdpi => 160,
            Density::Hdpi => 240,
            Density::Xhdpi => 320,
            Density::Xxhdpi => 480,
            Density::Xxxhdpi => 640,
        }
    }
}

/// A variant selector attached to a resource item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Qualifier {
    Language(&'static str),
    /// Region code without the `r` prefix, e.g. `"US"`.
    Region(&'static str),
    Theme(Theme),
    Density(Density),
}

// ---------------------------------------------------------------------------
// Items and descriptors
// ---------------------------------------------------------------------------

/// One file backing a resource key.
#[derive(Debug, PartialEq, Eq)]
pub struct ResourceItem {
    qualifiers: &'static [Qualifier],
    path: &'static str,
    content_hash: Option<&'static str>,
}

impl ResourceItem {
    pub const fn new(
        qualifiers: &'static [Qualifier],
        path: &'static str,
        content_hash: Option<&'static str>,
    ) -> Self {
        Self {
            qualifiers,
            path,
            content_hash,
        }
    }

    pub fn qualifiers(&self) -> &'static [Qualifier] {
        self.qualifiers
    }

    pub fn path(&self) -> &'static str {
        self.path
    }

    pub fn content_hash(&self) -> Option<&'static str> {
        self.content_hash
    }

    pub fn language(&self) -> Option<&'static str> {
        self.qualifiers.iter().find_map(|q| match q {
            Qualifier::Language(l) => Some(*l),
            _ => None,
        })
    }

    pub fn region(&self) -> Option<&'static str> {
        self.qualifiers.iter().find_map(|q| match q {
            Qualifier::Region(r) => Some(*r),
            _ => None,
        })
    }

    pub fn theme(&self) -> Option<Theme> {
        self.qualifiers.iter().find_map(|q| match q {
            Qualifier::Theme(t) => Some(*t),
            _ => None,
        })
    }

    pub fn density(&self) -> Option<Density> {
        self.qualifiers.iter().find_map(|q| match q {
            Qualifier::Density(d) => Some(*d),
            _ => None,
        })
    }
}

/// The value an accessor returns: `"<type>:<key>"` plus its item set.
#[derive(Debug, PartialEq, Eq)]
pub struct ResourceDescriptor {
    resource_type: ResourceType,
    key: &'static str,
    id: &'static str,
    items: &'static [ResourceItem],
}

impl ResourceDescriptor {
    pub const fn new(
        resource_type: ResourceType,
        key: &'static str,
        id: &'static str,
        items: &'static [ResourceItem],
    ) -> Self {
        Self {
            resource_type,
            key,
            id,
            items,
        }
    }

    pub fn resource_type(&self) -> ResourceType {
        self.resource_type
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn items(&self) -> &'static [ResourceItem] {
        self.items
    }

    /// Pick the item that best fits `env`.
    ///
    /// Each qualifier category narrows the candidates to exact matches, or
    /// to the items that do not carry that category when nothing matches.
    /// Densities prefer the nearest higher bucket, then the nearest lower one.
    pub fn select(&self, env: &ResourceEnvironment<'_>) -> Option<&'static ResourceItem> {
        let items: &'static [ResourceItem] = self.items;
        let mut candidates: Vec<&'static ResourceItem> = items.iter().collect();

        candidates = narrow(
            candidates,
            |item| env.language.is_some() && item.language() == env.language,
            |item| item.language().is_none(),
        );
        candidates = narrow(
            candidates,
            |item| env.region.is_some() && item.region() == env.region,
            |item| item.region().is_none(),
        );
        candidates = narrow(
            candidates,
            |item| item.theme() == Some(env.theme),
            |item| item.theme().is_none(),
        );

        let best_density = nearest_density(&candidates, env.density);
        candidates = narrow(
            candidates,
            |item| best_density.is_some() && item.density() == best_density,
            |item| item.density().is_none(),
        );

        candidates.first().copied()
    }
}

fn narrow(
    items: Vec<&'static ResourceItem>,
    matches: impl Fn(&ResourceItem) -> bool,
    unqualified: impl Fn(&ResourceItem) -> bool,
) -> Vec<&'static ResourceItem> {
    let exact: Vec<&'static ResourceItem> = items.iter().copied().filter(|i| matches(i)).collect();
    if !exact.is_empty() {
        return exact;
    }
    items.into_iter().filter(|i| unqualified(i)).collect()
}

fn nearest_density(items: &[&'static ResourceItem], wanted: Density) -> Option<Density> {
    let available: Vec<Density> = items.iter().filter_map(|i| i.density()).collect();
    if available.contains(&wanted) {
        return Some(wanted);
    }
    let higher = available.iter().copied().filter(|d| *d > wanted).min();
    higher.or_else(|| available.iter().copied().filter(|d| *d < wanted).max())
}

/// Environment an item is selected for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResourceEnvironment<'a> {
    pub language: Option<&'a str>,
    pub region: Option<&'a str>,
    pub theme: Theme,
    pub density: Density,
}

#[cfg(test)]
mod tests {
    use super::*;

    static ICON_ITEMS: [ResourceItem; 4] = [
        ResourceItem::new(&[], "drawable/icon.xml", None),
        ResourceItem::new(&[Qualifier::Theme(Theme::Dark)], "drawable-dark/icon.xml", None),
        ResourceItem::new(
            &[Qualifier::Language("en"), Qualifier::Region("US")],
            "drawable-en-rUS/icon.xml",
            None,
        ),
        ResourceItem::new(
            &[Qualifier::Density(Density::Xxhdpi)],
            "drawable-xxhdpi/icon.xml",
            Some("abc"),
        ),
    ];

    static ICON: ResourceDescriptor =
        ResourceDescriptor::new(ResourceType::Drawable, "icon", "drawable:icon", &ICON_ITEMS);

    #[test]
    fn test_type_names_round_trip() {
        for ty in ResourceType::ALL {
            assert_eq!(ResourceType::from_type_name(ty.type_name()), Some(ty));
        }
        assert_eq!(ResourceType::from_type_name("image"), None);
    }

    #[test]
    fn test_descriptor_accessors() {
        assert_eq!(ICON.id(), "drawable:icon");
        assert_eq!(ICON.key(), "icon");
        assert_eq!(ICON.resource_type(), ResourceType::Drawable);
        assert_eq!(ICON.items().len(), 4);
        assert_eq!(ICON.items()[3].content_hash(), Some("abc"));
    }

    static LABEL_ITEMS: [ResourceItem; 2] = [
        ResourceItem::new(&[], "values/strings.xml", None),
        ResourceItem::new(&[Qualifier::Language("fr")], "values-fr/strings.xml", None),
    ];

    static LABEL: ResourceDescriptor =
        ResourceDescriptor::new(ResourceType::String, "label", "string:label", &LABEL_ITEMS);

    #[test]
    fn test_select_default_environment() {
        let item = LABEL.select(&ResourceEnvironment::default()).unwrap();
        assert_eq!(item.path(), "values/strings.xml");
    }

    #[test]
    fn test_select_prefers_language_and_region() {
        let env = ResourceEnvironment {
            language: Some("en"),
            region: Some("US"),
            ..Default::default()
        };
        assert_eq!(ICON.select(&env).unwrap().path(), "drawable-en-rUS/icon.xml");
    }

    #[test]
    fn test_select_theme() {
        let env = ResourceEnvironment {
            theme: Theme::Dark,
            ..Default::default()
        };
        assert_eq!(ICON.select(&env).unwrap().path(), "drawable-dark/icon.xml");
    }

    #[test]
    fn test_select_density_prefers_higher_bucket() {
        let env = ResourceEnvironment {
            density: Density::Xhdpi,
            ..Default::default()
        };
        assert_eq!(ICON.select(&env).unwrap().path(), "drawable-xxhdpi/icon.xml");
    }

    #[test]
    fn test_select_density_falls_back_to_lower_bucket() {
        let env = ResourceEnvironment {
            density: Density::Xxxhdpi,
            ..Default::default()
        };
        assert_eq!(ICON.select(&env).unwrap().path(), "drawable-xxhdpi/icon.xml");
    }

    #[test]
    fn test_select_unknown_language_falls_back() {
        let env = ResourceEnvironment {
            language: Some("de"),
            ..Default::default()
        };
        assert_eq!(LABEL.select(&env).unwrap().path(), "values/strings.xml");

        let env = ResourceEnvironment {
            language: Some("fr"),
            ..Default::default()
        };
        assert_eq!(LABEL.select(&env).unwrap().path(), "values-fr/strings.xml");
    }

    #[test]
    fn test_density_parse() {
        assert_eq!(Density::parse("xxxhdpi"), Some(Density::Xxxhdpi));
        assert_eq!(Density::parse("tvdpi"), None);
        assert_eq!(Density::Hdpi.dpi(), 240);
    }
}
