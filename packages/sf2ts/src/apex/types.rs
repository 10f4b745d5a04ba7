/**
 * Type mapper
 *
 * Rewrites apex type references into TypeScript declaration types:
 * primitive renames, collection generics, and qualification of nested
 * class names against the compilation scope. Unknown names pass through
 * verbatim so user-defined types keep their spelling.
 */
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

use super::ast::{TypeRef, TypeRefKind};
use crate::logging::Logger;

/// Primitive renames, keyed by lower-cased apex name.
pub(crate) static TYPE_OVERRIDES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("string", "string"),
        ("datetime", "Date"),
        ("decimal", "number"),
        ("integer", "number"),
        ("boolean", "boolean"),
        ("id", "string"),
    ])
});

/// Per-compilation scope. Fresh for every compile call; the nested-name set
/// grows as nested classes are discovered during the top-down walk.
#[derive(Debug, Default)]
pub struct TypeScope {
    pub outer_class_name: Option<String>,
    pub known_nested_class_names: HashSet<String>,
}

impl TypeScope {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Maps one type reference. An absent reference yields the empty string;
/// the caller is responsible for treating that as a structural gap.
pub fn map_type(type_ref: Option<&TypeRef>, scope: &TypeScope, logger: &dyn Logger) -> String {
    let Some(type_ref) = type_ref else {
        return String::new();
    };
    if let TypeRefKind::Generic { base, args } = &type_ref.kind {
        if args.is_empty() {
            return String::new();
        }
        return match base.to_lowercase().as_str() {
            "list" => format!("{}[]", map_type(args.first(), scope, logger)),
            "map" => format!(
                "Record<{}, {}>",
                map_type(args.first(), scope, logger),
                map_type(args.get(1), scope, logger)
            ),
            "set" => format!("Set<{}>", map_type(args.first(), scope, logger)),
            _ => {
                logger.error(&format!("Unexpected generic type {}", base));
                String::new()
            }
        };
    }
    if scope.known_nested_class_names.contains(&type_ref.text) {
        if let Some(outer) = &scope.outer_class_name {
            return format!("{}.{}", outer, type_ref.text);
        }
    }
    match TYPE_OVERRIDES.get(type_ref.text.to_lowercase().as_str()) {
        Some(mapped) => (*mapped).to_string(),
        None => type_ref.text.clone(),
    }
}
