//! Rust source emission for shard units and the root unit.
//!
//! Items are built as `quote!` token streams and printed with `prettyplease`.
//! Every collection is iterated in sorted order so unchanged input yields
//! byte-identical units.

use heck::{ToShoutySnakeCase, ToSnakeCase};
use proc_macro2::{Ident, Literal, TokenStream};
use quote::{format_ident, quote};

use crate::config::GeneratorConfig;
use crate::errors::ResgenResult;
use crate::generator::partition::unit_name;
use crate::models::{Qualifier, ResourceDescriptor, ResourceItem, ResourceType, Shard};
use crate::scanner::sanitize::accessor_ident;

pub const HEADER: &str = "// Generated by resgen. Do not edit.";
pub const ROOT_UNIT: &str = "mod.rs";

/// One generated source file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceUnit {
    pub file_name: String,
    pub contents: String,
}

/// What the root unit needs to know about an emitted shard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShardSummary {
    pub unit_name: String,
    pub first_key: String,
    pub last_key: String,
    pub keys: usize,
}

impl ShardSummary {
    pub fn of(shard: &Shard) -> Self {
        Self {
            unit_name: unit_name(shard.resource_type, shard.index),
            first_key: shard.first_key().map(|k| k.to_string()).unwrap_or_default(),
            last_key: shard.last_key().map(|k| k.to_string()).unwrap_or_default(),
            keys: shard.len(),
        }
    }
}

/// All shards of one type, in index order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeLayout {
    pub resource_type: ResourceType,
    pub shards: Vec<ShardSummary>,
}

/// Namespace of a type below the root accessor module, e.g. `string_array`.
pub fn namespace(resource_type: ResourceType) -> String {
    resource_type.type_name().to_snake_case()
}

fn type_variant(resource_type: ResourceType) -> Ident {
    format_ident!("{}", format!("{resource_type:?}"))
}

/// Pretty-print an item list and prefix the header.
fn render(tokens: TokenStream) -> ResgenResult<String> {
    let file: syn::File = syn::parse2(tokens)?;
    Ok(format!("{HEADER}\n\n{}", prettyplease::unparse(&file)))
}

// ---------------------------------------------------------------------------
// Shard units
// ---------------------------------------------------------------------------

/// Emit one shard: item tables, the descriptor table, `lookup` and accessors.
pub fn emit_shard(shard: &Shard, config: &GeneratorConfig) -> ResgenResult<SourceUnit> {
    let runtime = config.runtime_module()?;

    let item_tables = shard.descriptors.iter().enumerate().map(|(index, descriptor)| {
        let name = format_ident!("ITEMS_{}", index);
        let len = Literal::usize_unsuffixed(descriptor.items.len());
        let items = descriptor.items.iter().map(item_tokens);
        quote! {
            static #name: [ResourceItem; #len] = [#(#items),*];
        }
    });
    let entries = shard
        .descriptors
        .iter()
        .enumerate()
        .map(|(index, descriptor)| descriptor_tokens(descriptor, index));
    let accessors = shard.descriptors.iter().enumerate().map(|(index, descriptor)| {
        let name = accessor_ident(&descriptor.key);
        let index = Literal::usize_unsuffixed(index);
        quote! {
            pub fn #name() -> &'static super::ResourceDescriptor {
                &super::TABLE[#index]
            }
        }
    });
    let count = Literal::usize_unsuffixed(shard.len());

    let tokens = quote! {
        #[allow(unused_imports)]
        use #runtime::{Density, Qualifier, ResourceDescriptor, ResourceItem, ResourceType, Theme};

        #(#item_tables)*

        pub(crate) static TABLE: [ResourceDescriptor; #count] = [#(#entries),*];

        pub(crate) fn lookup(key: &str) -> Option<&'static ResourceDescriptor> {
            TABLE
                .binary_search_by(|descriptor| descriptor.key().cmp(key))
                .ok()
                .map(|index| &TABLE[index])
        }

        #[allow(non_snake_case)]
        pub mod accessors {
            #(#accessors)*
        }
    };

    Ok(SourceUnit {
        file_name: format!("{}.rs", unit_name(shard.resource_type, shard.index)),
        contents: render(tokens)?,
    })
}

fn descriptor_tokens(descriptor: &ResourceDescriptor, index: usize) -> TokenStream {
    let variant = type_variant(descriptor.resource_type);
    let key = Literal::string(descriptor.key.as_str());
    let id = Literal::string(&descriptor.id());
    let items = format_ident!("ITEMS_{}", index);
    quote! {
        ResourceDescriptor::new(ResourceType::#variant, #key, #id, &#items)
    }
}

fn item_tokens(item: &ResourceItem) -> TokenStream {
    let qualifiers = item.qualifiers.iter().map(qualifier_tokens);
    let path = Literal::string(&item.path);
    let hash = match &item.content_hash {
        Some(hash) => {
            let hash = Literal::string(hash);
            quote!(Some(#hash))
        }
        None => quote!(None),
    };
    quote! {
        ResourceItem::new(&[#(#qualifiers),*], #path, #hash)
    }
}

fn qualifier_tokens(qualifier: &Qualifier) -> TokenStream {
    match qualifier {
        Qualifier::Language(language) => {
            let language = Literal::string(language);
            quote!(Qualifier::Language(#language))
        }
        Qualifier::Region(region) => {
            let region = Literal::string(region);
            quote!(Qualifier::Region(#region))
        }
        Qualifier::Theme(theme) => {
            let theme = format_ident!("{}", format!("{theme:?}"));
            quote!(Qualifier::Theme(Theme::#theme))
        }
        Qualifier::Density(density) => {
            let density = format_ident!("{}", format!("{density:?}"));
            quote!(Qualifier::Density(Density::#density))
        }
    }
}

// ---------------------------------------------------------------------------
// Root unit
// ---------------------------------------------------------------------------

/// Emit `mod.rs`: shard modules, the accessor namespace, `resolve` and `all`.
pub fn emit_root(layouts: &[TypeLayout], config: &GeneratorConfig) -> ResgenResult<SourceUnit> {
    let runtime = config.runtime_module()?;
    let visibility: syn::Visibility = syn::parse_str(config.visibility())?;
    let res_name: Ident = syn::parse_str(&config.res_name)?;
    let routed: Vec<&TypeLayout> = layouts.iter().filter(|l| !l.shards.is_empty()).collect();

    let modules = routed.iter().flat_map(|layout| &layout.shards).map(|shard| {
        let name = format_ident!("{}", shard.unit_name);
        let file = Literal::string(&format!("{}.rs", shard.unit_name));
        quote! {
            mod #name {
                include!(#file);
            }
        }
    });
    let namespaces = routed.iter().map(|layout| {
        let module = format_ident!("{}", namespace(layout.resource_type));
        let units = layout.shards.iter().map(|s| format_ident!("{}", s.unit_name));
        quote! {
            pub mod #module {
                #(pub use super::super::#units::accessors::*;)*
            }
        }
    });
    let shard_tables = routed.iter().map(|layout| {
        let name = shards_static(layout.resource_type);
        let count = Literal::usize_unsuffixed(layout.shards.len());
        let units = layout.shards.iter().map(|s| format_ident!("{}", s.unit_name));
        quote! {
            static #name: [&[ResourceDescriptor]; #count] = [#(&#units::TABLE),*];
        }
    });

    let functions = if routed.is_empty() {
        quote! {
            #visibility fn resolve(_resource_type: ResourceType, _key: &str) -> Option<&'static ResourceDescriptor> {
                None
            }

            #visibility fn all(_resource_type: ResourceType) -> impl Iterator<Item = &'static ResourceDescriptor> {
                ::core::iter::empty()
            }
        }
    } else {
        let routes = routed.iter().map(|layout| route_arm(layout));
        let listings = routed.iter().map(|layout| {
            let variant = type_variant(layout.resource_type);
            let name = shards_static(layout.resource_type);
            quote!(ResourceType::#variant => &#name,)
        });
        quote! {
            #visibility fn resolve(resource_type: ResourceType, key: &str) -> Option<&'static ResourceDescriptor> {
                match resource_type {
                    #(#routes)*
                    _ => None,
                }
            }

            /// Every descriptor of `resource_type`, in key order.
            #visibility fn all(resource_type: ResourceType) -> impl Iterator<Item = &'static ResourceDescriptor> {
                let shards: &'static [&'static [ResourceDescriptor]] = match resource_type {
                    #(#listings)*
                    _ => &[],
                };
                shards.iter().copied().flatten()
            }
        }
    };

    let tokens = quote! {
        #[allow(unused_imports)]
        use #runtime::{ResourceDescriptor, ResourceType};

        #(#modules)*

        #[allow(non_snake_case)]
        #visibility mod #res_name {
            #(#namespaces)*
        }

        #(#shard_tables)*

        #functions
    };

    Ok(SourceUnit {
        file_name: ROOT_UNIT.to_string(),
        contents: render(tokens)?,
    })
}

/// Name of the static listing one type's shard tables, e.g. `STRING_ARRAY_SHARDS`.
fn shards_static(resource_type: ResourceType) -> Ident {
    format_ident!("{}_SHARDS", namespace(resource_type).to_shouty_snake_case())
}

/// One `match` arm routing a key to the shard whose range holds it.
fn route_arm(layout: &TypeLayout) -> TokenStream {
    let variant = type_variant(layout.resource_type);
    let units: Vec<Ident> = layout
        .shards
        .iter()
        .map(|s| format_ident!("{}", s.unit_name))
        .collect();
    let Some((last, rest)) = units.split_last() else {
        return quote!();
    };
    if rest.is_empty() {
        return quote!(ResourceType::#variant => #last::lookup(key),);
    }

    // Built from the last shard outwards so each bound is the next shard's first key.
    let mut chain = quote!({ #last::lookup(key) });
    for (position, unit) in rest.iter().enumerate().rev() {
        let upper = Literal::string(&layout.shards[position + 1].first_key);
        chain = quote! {
            if key < #upper { #unit::lookup(key) } else #chain
        };
    }
    quote! {
        ResourceType::#variant => { #chain }
    }
}
