use jwalk::WalkDir;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// Recursive size of one entry. Symlinks are not followed; a link reports
/// the size of the link itself. Uses serial execution per entry to avoid
/// resource exhaustion when many entries are sized at once.
pub fn entry_size(path: &Path) -> u64 {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.is_dir() => WalkDir::new(path)
            .skip_hidden(false)
            .parallelism(jwalk::Parallelism::Serial)
            .into_iter()
            .flatten()
            .filter_map(|entry| entry.metadata().ok())
            .filter(|meta| meta.is_file())
            .map(|meta| meta.len())
            .sum(),
        Ok(meta) => meta.len(),
        Err(_) => 0,
    }
}

/// Sizes a batch of entries, parallelized across entries.
pub fn entry_sizes(paths: &[PathBuf]) -> Vec<u64> {
    paths.par_iter().map(|path| entry_size(path)).collect()
}
