#![deny(clippy::all)]

/**
 * sf2ts CLI
 *
 * Batch front end over the sf2ts converter: expands glob patterns,
 * converts every matched metadata file in parallel and writes declaration
 * files plus optional alignment sidecars.
 */
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use rayon::prelude::*;

use sf2ts::{ConsoleLogger, Converter, LogLevel, Logger, MetadataKind, SourceUnit};

pub mod discovery;

/// Options assembled from the command line.
pub struct CliOptions {
    pub patterns: Vec<String>,
    pub out_dir: PathBuf,
    pub write_maps: bool,
    pub quiet: bool,
    pub verbose: bool,
}

/// Per-run counters reported to the caller.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub written: usize,
    pub skipped: usize,
    pub failed: usize,
}

enum Outcome {
    Written,
    Skipped,
    Failed(String),
}

/// Converts every file matched by the patterns. Failures are isolated per
/// file and counted; only setup problems abort the run.
pub fn run(options: &CliOptions) -> anyhow::Result<RunSummary> {
    let level = if options.quiet {
        LogLevel::Warn
    } else if options.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Info
    };
    let logger: Arc<dyn Logger> = Arc::new(ConsoleLogger::new(level));
    let converter = Converter::new(Arc::clone(&logger));

    let files = discovery::discover(&options.patterns, logger.as_ref());
    if files.is_empty() {
        logger.warn("no metadata files matched");
        return Ok(RunSummary::default());
    }
    logger.info(&format!("converting {} metadata files", files.len()));
    fs::create_dir_all(&options.out_dir)
        .with_context(|| format!("cannot create {}", options.out_dir.display()))?;

    converter.warm_up().wait();

    let outcomes: Vec<Outcome> = files
        .par_iter()
        .map(|file| convert_file(&converter, options, file))
        .collect();

    let mut summary = RunSummary::default();
    for outcome in outcomes {
        match outcome {
            Outcome::Written => summary.written += 1,
            Outcome::Skipped => summary.skipped += 1,
            Outcome::Failed(message) => {
                logger.error(&message);
                summary.failed += 1;
            }
        }
    }
    logger.info(&format!(
        "{} written, {} skipped, {} failed",
        summary.written, summary.skipped, summary.failed
    ));
    Ok(summary)
}

fn convert_file(converter: &Converter, options: &CliOptions, file: &Path) -> Outcome {
    let path = file.to_string_lossy().replace('\\', "/");
    let kind = match MetadataKind::from_path(&path) {
        Ok(kind) => kind,
        Err(error) => return Outcome::Failed(error.to_string()),
    };
    let content = match fs::read_to_string(file) {
        Ok(content) => content,
        Err(error) => return Outcome::Failed(format!("{}: {}", path, error)),
    };
    let unit = SourceUnit::new(path.clone(), kind, content);
    let compiled = match converter.convert(&unit) {
        Ok(compiled) => compiled,
        Err(error) => return Outcome::Failed(error.to_string()),
    };
    if compiled.declaration_text.is_empty() {
        return Outcome::Skipped;
    }
    let Some(file_name) = discovery::declaration_file_name(&path) else {
        return Outcome::Failed(format!("{}: cannot derive a declaration file name", path));
    };
    let dts_path = options.out_dir.join(&file_name);
    if let Err(error) = fs::write(&dts_path, &compiled.declaration_text) {
        return Outcome::Failed(format!("{}: {}", dts_path.display(), error));
    }
    if options.write_maps {
        let map_path = options.out_dir.join(format!("{}.map", file_name));
        let map = match serde_json::to_string(&compiled.alignment) {
            Ok(map) => map,
            Err(error) => return Outcome::Failed(format!("{}: {}", map_path.display(), error)),
        };
        if let Err(error) = fs::write(&map_path, map) {
            return Outcome::Failed(format!("{}: {}", map_path.display(), error));
        }
    }
    Outcome::Written
}
