//! drawlint CLI binary entry point.
//! Delegates to library modules for analysis and prints results.

mod aggregate;
mod classify;
mod cli;
mod config;
mod filter;
mod models;
mod output;
mod rules;
mod scan;

use aggregate::ResultStore;
use clap::Parser;
use cli::{Cli, Commands};
use models::ClassEvents;
use rayon::prelude::*;
use rules::RuleSet;
use std::fs;
use std::path::PathBuf;

fn main() {
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Analyze {
            repo_root,
            variant,
            output,
            events,
        } => {
            let eff = config::resolve_effective(
                repo_root.as_deref(),
                variant.as_deref(),
                output.as_deref(),
                &events,
            );
            if config::load_config(&eff.repo_root).is_none() {
                eprintln!("note: no drawlint.toml found; using defaults.");
            }

            // Discover event dump files
            let mut files: Vec<PathBuf> = Vec::new();
            for pat in &eff.event_patterns {
                let abs = eff.repo_root.join(pat);
                let pattern = abs.to_string_lossy().to_string();
                if let Ok(entries) = glob::glob(&pattern) {
                    for entry in entries.flatten() {
                        files.push(entry);
                    }
                }
            }
            if files.is_empty() {
                eprintln!(
                    "error: no event dumps matched {:?} under {} (pass --events or configure [events] in drawlint.toml)",
                    eff.event_patterns,
                    eff.repo_root.to_string_lossy()
                );
                std::process::exit(2);
            }

            // Unreadable or unparsable dumps are skipped: a diagnostics-only
            // pass must never break the build
            let mut classes: Vec<ClassEvents> = Vec::new();
            let mut skipped_files = 0usize;
            for path in &files {
                let data = match fs::read_to_string(path) {
                    Ok(s) => s,
                    Err(_) => {
                        skipped_files += 1;
                        continue;
                    }
                };
                match serde_json::from_str::<Vec<ClassEvents>>(&data) {
                    Ok(mut batch) => classes.append(&mut batch),
                    Err(_) => match serde_json::from_str::<ClassEvents>(&data) {
                        Ok(one) => classes.push(one),
                        Err(_) => skipped_files += 1,
                    },
                }
            }
            if skipped_files > 0 {
                eprintln!("note: skipped {} unreadable event dump(s).", skipped_files);
            }

            let rule_set = RuleSet::new(eff.toggles.clone(), &eff.custom_patterns);
            let store = ResultStore::new();
            classes
                .par_iter()
                .filter(|c| {
                    !filter::should_skip(&c.class_name, &eff.exclude_packages, &eff.exclude_classes)
                })
                .filter_map(|c| scan::scan_class(c, &rule_set, |_| {}))
                .for_each(|result| store.submit(&eff.variant, result));

            store.report_once(&eff.variant, |results| {
                let summary = aggregate::summarize(results);
                output::print_analysis(&eff.variant, results, &summary, &eff.output);
            });
        }
    }
}
