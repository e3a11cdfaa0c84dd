//! Cohort criteria command-line interface
//!
//! Batch front-end over the criteria engine: reads a field catalog and
//! one or more criteria trees from JSON files, then validates, renders
//! or compiles them.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cohort::{compile, render, validate, Expr, FieldCatalog};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Cohort criteria command-line tool
#[derive(Parser)]
#[command(name = "cohort")]
#[command(author, version, about = "Cohort targeting criteria tools", long_about = None)]
struct Cli {
    /// Field catalog JSON file (array of field descriptors)
    #[arg(short, long, global = true, default_value = "catalog.json")]
    catalog: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate criteria trees against the catalog
    Validate {
        /// Criteria tree JSON files
        files: Vec<PathBuf>,
    },
    /// Render a criteria tree as a human-readable expression
    Render {
        /// Criteria tree JSON file
        file: PathBuf,
    },
    /// Compile a criteria tree to a parameterized SQL predicate
    Sql {
        /// Criteria tree JSON file
        file: PathBuf,
        /// Number of placeholders already consumed by the caller
        #[arg(short, long, default_value_t = 0)]
        start_index: usize,
    },
}

fn main() -> ExitCode {
    human_panic::setup_panic!();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let catalog = read_catalog(&cli.catalog)?;

    match cli.command {
        Commands::Validate { files } => {
            let mut all_valid = true;
            for file in &files {
                let tree = read_tree(file)?;
                let report = validate(&tree, &catalog);
                if report.is_valid() {
                    println!("{} {}", "ok".green(), file.display());
                } else {
                    all_valid = false;
                    println!("{} {}", "invalid".red().bold(), file.display());
                    for message in report.messages() {
                        println!("  {message}");
                    }
                }
            }
            Ok(if all_valid { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
        Commands::Render { file } => {
            let tree = read_tree(&file)?;
            println!("{}", render(&tree, &catalog));
            Ok(ExitCode::SUCCESS)
        }
        Commands::Sql { file, start_index } => {
            let tree = read_tree(&file)?;
            let predicate = compile(&tree, &catalog, start_index);
            println!("{}", predicate.sql);
            println!(
                "{}",
                serde_json::to_string(&predicate.params).context("serializing params")?
            );
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn read_catalog(path: &Path) -> Result<FieldCatalog> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading catalog {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing catalog {}", path.display()))
}

fn read_tree(path: &Path) -> Result<Expr> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading criteria {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing criteria {}", path.display()))
}
