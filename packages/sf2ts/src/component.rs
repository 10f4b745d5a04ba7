/**
 * Metadata components
 *
 * Input/output units of a conversion and the closed set of metadata kinds
 * the dispatcher understands.
 */
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::builder::AlignmentPair;
use crate::error::ConvertError;

/// The metadata kinds with a declaration emitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MetadataKind {
    ApexClass,
    ContentAsset,
    CustomField,
    CustomLabel,
    CustomLabels,
    CustomObject,
    CustomPermission,
    StaticResource,
}

/// Metadata file-name suffixes that identify a kind.
static META_SUFFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\.(cls|asset-meta\.xml|field-meta\.xml|labels-meta\.xml|label-meta\.xml|object-meta\.xml|customPermission-meta\.xml|resource-meta\.xml)$",
    )
    .unwrap()
});

impl MetadataKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetadataKind::ApexClass => "apexClass",
            MetadataKind::ContentAsset => "contentAsset",
            MetadataKind::CustomField => "customField",
            MetadataKind::CustomLabel => "customLabel",
            MetadataKind::CustomLabels => "customLabels",
            MetadataKind::CustomObject => "customObject",
            MetadataKind::CustomPermission => "customPermission",
            MetadataKind::StaticResource => "staticResource",
        }
    }

    /// Infers the kind from a metadata file name.
    pub fn from_path(path: &str) -> Result<Self, ConvertError> {
        let captures = META_SUFFIX.captures(path).ok_or_else(|| {
            ConvertError::UnsupportedKind {
                kind: path.to_string(),
            }
        })?;
        let kind = match &captures[1] {
            "cls" => MetadataKind::ApexClass,
            "asset-meta.xml" => MetadataKind::ContentAsset,
            "field-meta.xml" => MetadataKind::CustomField,
            "labels-meta.xml" => MetadataKind::CustomLabels,
            "label-meta.xml" => MetadataKind::CustomLabel,
            "object-meta.xml" => MetadataKind::CustomObject,
            "customPermission-meta.xml" => MetadataKind::CustomPermission,
            "resource-meta.xml" => MetadataKind::StaticResource,
            other => {
                return Err(ConvertError::UnsupportedKind {
                    kind: other.to_string(),
                })
            }
        };
        Ok(kind)
    }
}

impl fmt::Display for MetadataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetadataKind {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s {
            "apexClass" => MetadataKind::ApexClass,
            "contentAsset" => MetadataKind::ContentAsset,
            "customField" => MetadataKind::CustomField,
            "customLabel" => MetadataKind::CustomLabel,
            "customLabels" => MetadataKind::CustomLabels,
            "customObject" => MetadataKind::CustomObject,
            "customPermission" => MetadataKind::CustomPermission,
            "staticResource" => MetadataKind::StaticResource,
            other => {
                return Err(ConvertError::UnsupportedKind {
                    kind: other.to_string(),
                })
            }
        };
        Ok(kind)
    }
}

/// An immutable input artifact. `content` is the verbatim original text,
/// apex source or XML depending on `kind`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceUnit {
    pub path: String,
    pub kind: MetadataKind,
    pub content: String,
}

impl SourceUnit {
    pub fn new(path: impl Into<String>, kind: MetadataKind, content: impl Into<String>) -> Self {
        SourceUnit {
            path: path.into(),
            kind,
            content: content.into(),
        }
    }
}

/// The immutable output of one conversion.
#[derive(Debug, Clone, Serialize)]
pub struct CompiledUnit {
    pub path: String,
    pub kind: MetadataKind,
    #[serde(rename = "dts")]
    pub declaration_text: String,
    #[serde(rename = "mapData")]
    pub alignment: Vec<AlignmentPair>,
}

impl CompiledUnit {
    pub fn new(unit: &SourceUnit, declaration_text: String, alignment: Vec<AlignmentPair>) -> Self {
        CompiledUnit {
            path: unit.path.clone(),
            kind: unit.kind,
            declaration_text,
            alignment,
        }
    }

    /// The explicit empty result for inputs the emitter does not apply to.
    pub fn not_applicable(unit: &SourceUnit) -> Self {
        CompiledUnit {
            path: unit.path.clone(),
            kind: unit.kind,
            declaration_text: String::new(),
            alignment: Vec::new(),
        }
    }
}

/// Final path segment cut at its first `.`, the name most descriptor kinds
/// derive their module name from.
pub fn file_base_name(path: &str) -> Option<&str> {
    let segment = path.rsplit('/').next()?;
    match segment.split('.').next() {
        Some(base) if !base.is_empty() => Some(base),
        _ => None,
    }
}
