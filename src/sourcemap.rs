//! Source map discovery under the output directory

use std::path::{Path, PathBuf};

use crate::discovery::{glob_files, normalize_separators};
use crate::ui::Console;

/// Recursive pattern for source map files
pub const SOURCE_MAP_PATTERN: &str = "**/*.map";

/// Every `*.map` file below `output_dir`, relative to it and sorted
pub fn find_source_maps(output_dir: &Path) -> Vec<PathBuf> {
    glob_files(output_dir, SOURCE_MAP_PATTERN, None)
        .into_iter()
        .filter_map(|p| p.strip_prefix(output_dir).ok().map(Path::to_path_buf))
        .collect()
}

/// Scan `output_dir` and report each source map on the console
pub fn scan(output_dir: &Path, console: &mut Console) -> Vec<PathBuf> {
    console.info("Searching for source map files...");
    let maps = find_source_maps(output_dir);

    if maps.is_empty() {
        console.warning("No source map files found");
        return maps;
    }

    console.success(format!("Found {} source map file(s):", maps.len()));
    for map in &maps {
        console.info(format!("  {}", normalize_separators(map)));
    }
    maps
}
