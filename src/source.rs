use ignore::WalkBuilder;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

const DATA_EXTENSIONS: [&str; 2] = ["yaml", "yml"];

/// Every YAML file under `dir`, honouring `.gitignore` and `.tabqignore`, sorted by name.
pub fn collect_data_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    let walker = WalkBuilder::new(dir)
        .hidden(false)
        .git_ignore(true)
        .git_global(false)
        .git_exclude(false)
        .add_custom_ignore_filename(".tabqignore")
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    for entry in walker.flatten() {
        let path = entry.path();
        let is_data = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map_or(false, |ext| DATA_EXTENSIONS.contains(&ext));
        if path.is_file() && is_data {
            files.push(path.to_path_buf());
        }
    }

    files
}

/// Non-blank stdin lines, as read.
pub fn read_lines_from_stdin() -> Vec<String> {
    let stdin = io::stdin();
    read_lines(stdin.lock())
}

fn read_lines(reader: impl BufRead) -> Vec<String> {
    reader
        .lines()
        .map_while(Result::ok)
        .filter(|line| !line.trim().is_empty())
        .collect()
}
