/**
 * Metadata file discovery
 *
 * Expands glob patterns into the metadata files the converter understands
 * and derives declaration file names from metadata file names.
 */
use std::path::PathBuf;

use sf2ts::{Logger, MetadataKind};

/// Expands `patterns` and keeps the files with a recognized metadata
/// suffix, in a stable order. Bad patterns are reported and skipped.
pub fn discover(patterns: &[String], logger: &dyn Logger) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for pattern in patterns {
        match glob::glob(pattern) {
            Ok(paths) => {
                for entry in paths.flatten() {
                    if !entry.is_file() {
                        continue;
                    }
                    let path = entry.to_string_lossy().replace('\\', "/");
                    if MetadataKind::from_path(&path).is_ok() {
                        files.push(entry);
                    } else {
                        logger.debug(&format!("skipping {} (no metadata suffix)", path));
                    }
                }
            }
            Err(error) => {
                logger.warn(&format!("invalid glob pattern '{}': {}", pattern, error));
            }
        }
    }
    files.sort();
    files
}

/// Declaration file name for a metadata file. The `-meta.xml` or `.cls`
/// suffix becomes `.d.ts`; the kind segment stays in the name
/// (`Account.label-meta.xml` maps to `Account.label.d.ts`).
pub fn declaration_file_name(path: &str) -> Option<String> {
    let file = path.rsplit('/').next()?;
    if let Some(stem) = file.strip_suffix("-meta.xml") {
        return Some(format!("{}.d.ts", stem));
    }
    if let Some(stem) = file.strip_suffix(".cls") {
        return Some(format!("{}.d.ts", stem));
    }
    None
}
