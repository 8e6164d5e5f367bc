//! Per-size iteration tables: loading, differencing and writing
//! `size-{N}-iterations.csv` files.

pub mod diff;
pub mod load;
pub mod writer;

use std::path::{Path, PathBuf};

pub use diff::first_difference;
pub use load::{IterationTable, LoadError};
pub use writer::{IterationLog, LogError};

/// Header of the independent variable column.
pub const NEW_MAX: &str = "new_max";
/// Header of the dependent variable column.
pub const ITERATIONS: &str = "iterations";

/// File name used for the table of a given size.
pub fn table_file_name(size: u32) -> String {
    format!("size-{}-iterations.csv", size)
}

/// Location of the table for `size` inside `directory`.
pub fn table_path(directory: &Path, size: u32) -> PathBuf {
    directory.join(table_file_name(size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_follows_naming_pattern() {
        assert_eq!(table_file_name(5), "size-5-iterations.csv");
        assert_eq!(
            table_path(Path::new("data"), 3),
            Path::new("data").join("size-3-iterations.csv")
        );
    }

    #[test]
    fn current_directory_keeps_bare_name() {
        assert_eq!(
            table_path(Path::new(""), 7),
            PathBuf::from("size-7-iterations.csv")
        );
    }
}
