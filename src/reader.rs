use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use crate::error::SignalError;
use crate::signal::{Sample, Signal};
/// Finds `*.txt` signal files directly under `dir`, sorted by filename so
/// the subplot order is reproducible.
pub fn discover(dir: &Path) -> Result<Vec<PathBuf>, SignalError> {
    let entries = std::fs::read_dir(dir).map_err(|source| SignalError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| SignalError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "txt") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
/// Reads one signal file: a header line (ignored) followed by `time,value`
/// records. Blank lines are skipped; anything else malformed is an error
/// carrying the path and 1-based line number.
pub fn read_signal(path: &Path) -> Result<Signal, SignalError> {
    let file = File::open(path).map_err(|source| SignalError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    let mut samples = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| SignalError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if index == 0 {
            // header
            continue;
        }
        let record = line.trim();
        if record.is_empty() {
            continue;
        }
        let fields: Vec<&str> = record.split(',').collect();
        if fields.len() != 2 {
            return Err(SignalError::BadRecord {
                path: path.to_path_buf(),
                line: index + 1,
                found: fields.len(),
            });
        }
        let time = parse_field(path, index + 1, fields[0])?;
        let value = parse_field(path, index + 1, fields[1])?;
        samples.push(Sample::new(time, value));
    }
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(Signal { name, samples })
}
fn parse_field(path: &Path, line: usize, field: &str) -> Result<i64, SignalError> {
    field
        .trim()
        .parse()
        .map_err(|source| SignalError::BadInteger {
            path: path.to_path_buf(),
            line,
            field: field.to_string(),
            source,
        })
}
