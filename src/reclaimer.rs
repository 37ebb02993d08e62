use crate::catalog::{CacheTarget, Catalog};
use crate::model::{DeleteOutcome, EntryFailure, Mode, ReclaimResult};
use crate::stats::{entry_size, entry_sizes};
use anyhow::{Result, bail};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Runs one cache target against `home`. Missing directories are skipped
/// and recorded; per-entry failures are collected and never abort the
/// batch. Runs to completion on the calling thread.
pub fn reclaim(target: &CacheTarget, home: &Path, mode: Mode) -> ReclaimResult {
    let mut result = ReclaimResult::default();

    for dir in target.resolve(home) {
        let read_dir = match fs::read_dir(&dir) {
            Ok(read_dir) => read_dir,
            Err(err) => {
                // An existing directory that cannot be listed is a failure;
                // anything else counts as missing and is skipped.
                if dir.is_dir() {
                    result.failures.push(EntryFailure {
                        path: dir,
                        error: err.to_string(),
                    });
                } else {
                    result.directories_missing.push(dir);
                }
                continue;
            }
        };

        let entries: Vec<PathBuf> = read_dir
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .collect();

        // Sizes must be taken before deletion; once an entry is gone there
        // is nothing left to measure.
        let sizes = entry_sizes(&entries);

        for (path, size) in entries.into_iter().zip(sizes) {
            match remove_entry(&path, mode) {
                Ok(()) => {
                    result.items_deleted += 1;
                    result.bytes_reclaimed += size;
                }
                Err(err) => result.failures.push(EntryFailure {
                    path,
                    error: err.to_string(),
                }),
            }
        }
    }

    result
}

/// Looks the target up by name first; an unknown name is a hard error with
/// no work performed.
pub fn reclaim_by_name(
    catalog: &Catalog,
    name: &str,
    home: &Path,
    mode: Mode,
) -> Result<ReclaimResult> {
    let Some(target) = catalog.find(name) else {
        bail!("unknown cache target: {name}");
    };
    Ok(reclaim(target, home, mode))
}

/// Ad-hoc single-folder delete sharing the same primitive as `reclaim`.
pub fn delete_folder(path: &Path) -> DeleteOutcome {
    if fs::symlink_metadata(path).is_err() {
        return DeleteOutcome {
            success: false,
            message: "Folder does not exist.".to_string(),
        };
    }

    match remove_entry(path, Mode::Delete) {
        Ok(()) => DeleteOutcome {
            success: true,
            message: format!("Deleted: {}", path.display()),
        },
        Err(err) => DeleteOutcome {
            success: false,
            message: format!("Failed to delete {}: {err}", path.display()),
        },
    }
}

/// Shared delete primitive. Classification never follows symlinks: a link
/// is removed as a single non-directory entry, its target untouched, so a
/// link pointing outside the cache tree cannot drag its target along.
fn remove_entry(path: &Path, mode: Mode) -> io::Result<()> {
    let meta = fs::symlink_metadata(path)?;

    if mode == Mode::DryRun {
        return Ok(());
    }

    if meta.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
}

/// Recursive size of an arbitrary folder, for previewing `delete_folder`.
pub fn folder_size(path: &Path) -> u64 {
    entry_size(path)
}
