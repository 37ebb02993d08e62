mod catalog;
mod constants;
mod model;
mod reclaimer;
mod stats;

use anyhow::{Context, Result};
use catalog::Catalog;
use clap::{Parser, Subcommand};
use humansize::{BINARY, format_size};
use indicatif::{ProgressBar, ProgressStyle};
use model::{Mode, ReclaimResult};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;
use sysinfo::Disks;

#[derive(Parser)]
#[command(version, about = "Reclaim disposable cache data under your home directory")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the cache targets this tool knows how to reclaim
    List,
    /// Permanently delete the contents of a cache target
    Clean {
        /// Target name as shown by `list`
        target: String,
        /// Enumerate and report without deleting anything
        #[arg(long)]
        dry_run: bool,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Recursively delete a single folder
    Delete {
        path: PathBuf,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let catalog = Catalog::builtin()?;

    match cli.command {
        Command::List => {
            for name in catalog.names() {
                println!("{name}");
            }
        }
        Command::Clean {
            target,
            dry_run,
            yes,
        } => {
            let home = dirs::home_dir().context("home directory not found")?;
            run_clean(&catalog, &target, &home, dry_run, yes)?;
        }
        Command::Delete { path, yes } => {
            run_delete(&path, yes)?;
        }
    }

    Ok(())
}

fn run_clean(catalog: &Catalog, target: &str, home: &Path, dry_run: bool, yes: bool) -> Result<()> {
    // Resolve the name up front so a typo fails before the prompt.
    let Some(entry) = catalog.find(target) else {
        anyhow::bail!("unknown cache target: {target}");
    };

    let mode = if dry_run { Mode::DryRun } else { Mode::Delete };

    if mode == Mode::Delete
        && !yes
        && !confirm(&format!(
            "Permanently delete the contents of \"{}\"?",
            entry.name
        ))?
    {
        println!("Aborted.");
        return Ok(());
    }

    let pb = spinner(&format!("Cleaning {}...", entry.name));
    let result = reclaimer::reclaim_by_name(catalog, target, home, mode)?;
    pb.finish_and_clear();

    if result.directories_missing.len() == entry.path_templates.len() {
        println!("Cache directory does not exist.");
        return Ok(());
    }

    report(&result, mode);

    if mode == Mode::Delete {
        print_free_space();
    }

    Ok(())
}

fn run_delete(path: &Path, yes: bool) -> Result<()> {
    if !yes {
        let size = reclaimer::folder_size(path);
        let prompt = format!(
            "Permanently delete {} ({})?",
            path.display(),
            format_size(size, BINARY)
        );
        if !confirm(&prompt)? {
            println!("Aborted.");
            return Ok(());
        }
    }

    let outcome = reclaimer::delete_folder(path);
    println!("{}", outcome.message);
    if !outcome.success {
        std::process::exit(1);
    }
    Ok(())
}

fn report(result: &ReclaimResult, mode: Mode) {
    if mode == Mode::DryRun {
        println!(
            "Dry run. Would delete {} items ({}).",
            result.items_deleted,
            format_size(result.bytes_reclaimed, BINARY)
        );
    } else {
        println!("Cache cleared. Total items deleted: {}", result.items_deleted);
        println!("Reclaimed {}.", format_size(result.bytes_reclaimed, BINARY));
    }

    for missing in &result.directories_missing {
        println!("Skipped missing directory: {}", missing.display());
    }

    if !result.failures.is_empty() {
        eprintln!("{} entries could not be removed:", result.failures.len());
        for failure in &result.failures {
            eprintln!("  {}: {}", failure.path.display(), failure.error);
        }
    }
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt} [y/N] ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;
    Ok(matches!(input.trim(), "y" | "Y" | "yes"))
}

fn print_free_space() {
    let disks = Disks::new_with_refreshed_list();
    if let Some(disk) = disks.list().iter().find(|d| d.mount_point() == Path::new("/")) {
        println!(
            "Free space on /: {}",
            format_size(disk.available_space(), BINARY)
        );
    }
}
