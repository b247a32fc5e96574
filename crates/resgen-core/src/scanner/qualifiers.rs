//! Parsing of `<type>[-<qualifier>...]` resource directory names.

use crate::errors::{ResgenError, ResgenResult};
use crate::models::{Density, Qualifier, ResourceType, Theme};

/// What a top-level resource directory holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DirKind {
    /// One file per key, keyed by file name.
    Typed(ResourceType),
    /// XML string tables yielding `string`, `string-array` and `plurals` keys.
    Values,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedDir {
    pub kind: DirKind,
    /// Canonically sorted.
    pub qualifiers: Vec<Qualifier>,
}

pub fn parse_dir_name(dir_name: &str) -> ResgenResult<ParsedDir> {
    let mut parts = dir_name.split('-');
    let type_part = parts.next().unwrap_or_default();
    let raw_qualifiers: Vec<&str> = parts.collect();

    let kind = match type_part {
        "values" => DirKind::Values,
        "drawable" => DirKind::Typed(ResourceType::Drawable),
        "font" => DirKind::Typed(ResourceType::Font),
        "files" => {
            if !raw_qualifiers.is_empty() {
                return Err(ResgenError::InvalidQualifier(format!(
                    "The 'files' directory doesn't support qualifiers: '{dir_name}'."
                )));
            }
            DirKind::Typed(ResourceType::Files)
        }
        "string" => return Err(ResgenError::ForbiddenDirectory(dir_name.to_string())),
        _ => return Err(ResgenError::UnknownResourceType(dir_name.to_string())),
    };

    let mut qualifiers: Vec<Qualifier> = Vec::with_capacity(raw_qualifiers.len());
    for (position, raw) in raw_qualifiers.iter().enumerate() {
        let qualifier = parse_qualifier(raw).ok_or_else(|| {
            ResgenError::InvalidQualifier(format!(
                "'{dir_name}' contains unknown qualifier: '{raw}'."
            ))
        })?;

        if let Some(existing) = qualifiers
            .iter()
            .find(|q| q.category() == qualifier.category())
        {
            return Err(ResgenError::InvalidQualifier(format!(
                "'{dir_name}' contains repetitive qualifiers: '{existing}' and '{qualifier}'."
            )));
        }

        if let Qualifier::Region(region) = &qualifier {
            let has_language = qualifiers
                .iter()
                .any(|q| matches!(q, Qualifier::Language(_)));
            if !has_language {
                let later_language = raw_qualifiers[position + 1..]
                    .iter()
                    .filter_map(|r| parse_qualifier(r))
                    .find_map(|q| match q {
                        Qualifier::Language(l) => Some(l),
                        _ => None,
                    });
                return Err(ResgenError::InvalidQualifier(match later_language {
                    Some(language) => format!(
                        "Region qualifier must be declared after language: '{language}-r{region}'."
                    ),
                    None => "Region qualifier must be used only with language.".to_string(),
                }));
            }
        }

        qualifiers.push(qualifier);
    }

    qualifiers.sort();
    Ok(ParsedDir { kind, qualifiers })
}

/// Parse one dash-separated directory name segment.
pub fn parse_qualifier(raw: &str) -> Option<Qualifier> {
    if let Some(theme) = Theme::parse(raw) {
        return Some(Qualifier::Theme(theme));
    }
    if let Some(density) = Density::parse(raw) {
        return Some(Qualifier::Density(density));
    }
    if (2..=3).contains(&raw.len()) && raw.chars().all(|c| c.is_ascii_lowercase()) {
        return Some(Qualifier::Language(raw.to_string()));
    }
    if let Some(region) = raw.strip_prefix('r') {
        if region.len() == 2 && region.chars().all(|c| c.is_ascii_uppercase()) {
            return Some(Qualifier::Region(region.to_string()));
        }
    }
    None
}
