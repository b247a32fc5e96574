//! Resource name → identifier sanitization.

use proc_macro2::{Ident, Span};

use crate::models::ResourceKey;

/// Keywords that cannot be used even as raw identifiers.
const UNRAWABLE_KEYWORDS: &[&str] = &["self", "Self", "super", "crate"];

/// A non-raw identifier that is not a keyword, e.g. `Res`.
pub fn is_plain_identifier(name: &str) -> bool {
    !name.starts_with("r#") && syn::parse_str::<Ident>(name).is_ok()
}

/// Turn a raw resource name into a key.
///
/// `-` becomes `_` and a leading digit gets a `_` prefix. Every other
/// character outside `[A-Za-z0-9_]` is rejected rather than rewritten, so
/// two different file names can only collide through the `-` rule.
pub fn sanitize_key(raw: &str) -> Result<ResourceKey, String> {
    if raw.is_empty() {
        return Err("name is empty".to_string());
    }

    let mut key = String::with_capacity(raw.len() + 1);
    for c in raw.chars() {
        match c {
            '-' => key.push('_'),
            c if c.is_ascii_alphanumeric() || c == '_' => key.push(c),
            other => {
                return Err(format!(
                    "character {other:?} is not allowed in a resource identifier"
                ))
            }
        }
    }
    if key.starts_with(|c: char| c.is_ascii_digit()) {
        key.insert(0, '_');
    }
    if key == "_" {
        return Err("'_' is not a usable identifier".to_string());
    }
    if UNRAWABLE_KEYWORDS.contains(&key.as_str()) {
        return Err(format!("'{key}' is a reserved keyword"));
    }
    Ok(ResourceKey::new_unchecked(key))
}

/// Identifier as it must appear in generated source (`r#type` for keywords).
///
/// Keys come from [`sanitize_key`], which rejects the names a raw identifier
/// cannot hold.
pub fn accessor_ident(key: &ResourceKey) -> Ident {
    syn::parse_str::<Ident>(key.as_str())
        .unwrap_or_else(|_| Ident::new_raw(key.as_str(), Span::call_site()))
}
