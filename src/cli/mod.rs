//! Command-line interface for reelbase.
//!
//! Every command works on the configured catalog file: it is loaded first
//! (an unreadable file just means an empty catalog) and commands that change
//! the catalog save it back afterwards.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use crate::config;
use crate::domain::{Content, ContentId, DetailView};
use crate::library::CatalogService;

/// reelbase - Audiovisual content catalog
#[derive(Parser, Debug)]
#[command(name = "reelbase")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Catalog file to use instead of the configured one
    #[arg(long, global = true, env = "REELBASE_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every record
    List {
        /// Sort order
        #[arg(short, long, value_enum)]
        sort: Option<SortKey>,
    },

    /// Show details of a record
    Show {
        /// Record ID
        id: ContentId,

        /// Print the detail view as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search titles (case-insensitive substring)
    Search {
        /// Search query
        query: String,
    },

    /// Filter by genre (case-insensitive substring)
    Genre {
        /// Genre query
        query: String,
    },

    /// Records whose duration lies between MIN and MAX minutes (inclusive)
    Duration { min: u32, max: u32 },

    /// Show catalog statistics
    Stats,

    /// Add a record given as a flat record line, e.g. "MOVIE,0,Avatar,162,Sci-Fi,Fox"
    Add {
        /// Record line
        record: String,
    },

    /// Remove a record
    Remove {
        /// Record ID
        id: ContentId,
    },

    /// Replace the catalog with the records in a file
    Import {
        /// Catalog file to read
        path: PathBuf,
    },

    /// Write the catalog to another file
    Export {
        /// Catalog file to write
        path: PathBuf,
    },

    /// Show resolved configuration (debug)
    Config,
}

/// Sort order for `list`
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortKey {
    /// Ascending by title
    Title,

    /// Ascending by duration
    Duration,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        if let Commands::Config = self.command {
            return show_config();
        }

        let data_file = match self.data_file {
            Some(path) => path,
            None => config::data_file()?,
        };
        let mut service = CatalogService::new(data_file);
        service.load_default();

        match self.command {
            Commands::List { sort } => list_records(&service, sort),
            Commands::Show { id, json } => show_record(&service, id, json),
            Commands::Search { query } => {
                print_table(&service.search_by_title(&query));
                Ok(())
            }
            Commands::Genre { query } => {
                print_table(&service.filter_by_genre(&query));
                Ok(())
            }
            Commands::Duration { min, max } => {
                print_table(&service.filter_by_duration(min, max)?);
                Ok(())
            }
            Commands::Stats => {
                print!("{}", service.statistics());
                Ok(())
            }
            Commands::Add { record } => add_record(&mut service, &record),
            Commands::Remove { id } => {
                let removed = service.remove(id)?;
                save(&service)?;
                println!("Removed: {}", removed);
                Ok(())
            }
            Commands::Import { path } => import_catalog(&mut service, &path),
            Commands::Export { path } => {
                let written = service
                    .save(&path)
                    .with_context(|| format!("Failed to export to {}", path.display()))?;
                println!("Exported {} record(s) to {}", written, path.display());
                Ok(())
            }
            Commands::Config => show_config(),
        }
    }
}

fn save(service: &CatalogService) -> Result<()> {
    service.save_default().with_context(|| {
        format!(
            "Failed to save catalog: {}",
            service.default_path().display()
        )
    })?;
    Ok(())
}

fn list_records(service: &CatalogService, sort: Option<SortKey>) -> Result<()> {
    if service.total_count() == 0 {
        println!("Catalog is empty. Use 'reelbase add <record>' to add content.");
        return Ok(());
    }

    let records = match sort {
        Some(SortKey::Title) => service.sorted_by_title(),
        Some(SortKey::Duration) => service.sorted_by_duration(),
        None => service.all(),
    };
    print_table(&records);
    println!("\nTotal: {} records", service.total_count());

    Ok(())
}

fn print_table(records: &[&Content]) {
    if records.is_empty() {
        println!("No matching records");
        return;
    }

    println!(
        "{:<6} {:<13} {:<40} {:>8} {:<20}",
        "ID", "TYPE", "TITLE", "MINUTES", "GENRE"
    );
    println!("{}", "-".repeat(91));

    for record in records {
        println!(
            "{:<6} {:<13} {:<40} {:>8} {:<20}",
            record.id(),
            record.kind().name(),
            truncate(record.title(), 40),
            record.duration_minutes(),
            truncate(record.genre(), 20)
        );
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() > width {
        let head: String = text.chars().take(width - 3).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}

fn show_record(service: &CatalogService, id: ContentId, json: bool) -> Result<()> {
    let record = service
        .get(id)
        .ok_or_else(|| anyhow::anyhow!("Content not found: {}", id))?;
    let view = record.describe();

    if json {
        let rendered =
            serde_json::to_string_pretty(&view).context("Failed to serialize detail view")?;
        println!("{}", rendered);
    } else {
        print_details(&view);
    }

    Ok(())
}

fn print_details(view: &DetailView) {
    println!("=== {} ===", view.kind);
    for field in &view.fields {
        println!("  {}: {}", field.label, field.value);
    }
    for section in &view.sections {
        println!("\n  {}:", section.title);
        for entry in &section.entries {
            println!("    - {}", entry);
        }
    }
}

fn add_record(service: &mut CatalogService, line: &str) -> Result<()> {
    let record = service
        .parse_record(line)
        .with_context(|| format!("Invalid record line: {}", line))?;
    let summary = record.to_string();

    let id = service.add(record)?;
    save(service)?;
    println!("Added [{}] {}", id, summary);

    Ok(())
}

fn import_catalog(service: &mut CatalogService, path: &Path) -> Result<()> {
    let summary = service
        .load(path)
        .with_context(|| format!("Failed to import {}", path.display()))?;

    for skipped in &summary.skipped {
        eprintln!("  line {}: {}", skipped.line_number, skipped.error);
    }
    save(service)?;
    println!(
        "Imported {} record(s), skipped {} line(s)",
        summary.loaded,
        summary.skipped.len()
    );

    Ok(())
}

fn show_config() -> Result<()> {
    let cfg = config::config()?;

    println!("reelbase configuration");
    println!();
    println!(
        "Config file: {}",
        cfg.config_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none - using defaults)".to_string())
    );
    println!();
    println!("Paths:");
    println!("  Home:      {}", cfg.home.display());
    println!("  Data file: {}", cfg.data_file.display());
    println!();
    println!("Logging:");
    println!("  Level:     {}", cfg.log_level);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_commands() {
        let cli = Cli::try_parse_from(["reelbase", "list", "--sort", "duration"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::List {
                sort: Some(SortKey::Duration)
            }
        ));

        let cli = Cli::try_parse_from(["reelbase", "show", "3", "--json"]).unwrap();
        assert!(matches!(cli.command, Commands::Show { json: true, .. }));

        let cli = Cli::try_parse_from(["reelbase", "duration", "30", "120"]).unwrap();
        assert!(matches!(cli.command, Commands::Duration { min: 30, max: 120 }));
    }

    #[test]
    fn test_cli_rejects_zero_id() {
        assert!(Cli::try_parse_from(["reelbase", "remove", "0"]).is_err());
    }

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("Ñandú Ñandú Ñandú", 8), "Ñandú...");
    }
}
