/**
 * sf2ts - Salesforce metadata to TypeScript declarations
 *
 * Command line entry point for batch conversion
 */
use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;
use std::process;

use sf2ts_cli::{run, CliOptions};

fn main() {
    let matches = Command::new("sf2ts")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Salesforce metadata to TypeScript declaration compiler")
        .arg(
            Arg::new("patterns")
                .value_name("PATTERN")
                .num_args(1..)
                .required(true)
                .help("Glob patterns of metadata files to convert"),
        )
        .arg(
            Arg::new("out-dir")
                .short('o')
                .long("out-dir")
                .value_name("DIR")
                .default_value("types")
                .help("Directory declaration files are written to"),
        )
        .arg(
            Arg::new("maps")
                .long("maps")
                .action(ArgAction::SetTrue)
                .help("Write a .d.ts.map alignment file next to each declaration"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Only report warnings and errors"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Also report skipped files and other details"),
        )
        .get_matches();

    let options = CliOptions {
        patterns: matches
            .get_many::<String>("patterns")
            .map(|values| values.cloned().collect())
            .unwrap_or_default(),
        out_dir: matches
            .get_one::<String>("out-dir")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("types")),
        write_maps: matches.get_flag("maps"),
        quiet: matches.get_flag("quiet"),
        verbose: matches.get_flag("verbose"),
    };

    match run(&options) {
        Ok(summary) if summary.failed > 0 => process::exit(1),
        Ok(_) => {}
        Err(error) => {
            eprintln!("Error: {}", error);
            process::exit(1);
        }
    }
}
