pub mod collect;
pub mod filesystem;
pub mod qualifiers;
pub mod sanitize;
pub mod values;
