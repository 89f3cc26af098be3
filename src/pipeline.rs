use std::path::Path;
use crate::crossing::transform;
use crate::error::SignalError;
use crate::reader::{discover, read_signal};
use crate::signal::AugmentedSignal;
/// Reads every signal file under `dir` and produces plot-ready waveforms,
/// one per file, in sorted-filename order.
pub fn collect_signals(dir: &Path) -> Result<Vec<AugmentedSignal>, SignalError> {
    let paths = discover(dir)?;
    if paths.is_empty() {
        return Err(SignalError::NoInputs(dir.to_path_buf()));
    }
    let mut signals = Vec::with_capacity(paths.len());
    for path in paths {
        let signal = read_signal(&path)?;
        log::debug!("{}: {} samples", signal.name, signal.samples.len());
        signals.push(AugmentedSignal {
            points: transform(&signal.samples),
            name: signal.name,
        });
    }
    Ok(signals)
}
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    fn write_file(dir: &Path, name: &str, contents: &str) {
        let mut file = File::create(dir.join(name)).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
    }
    #[test]
    fn collects_transformed_signals_in_filename_order() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "b.txt", "time,value\n0,2\n1,4\n");
        write_file(dir.path(), "a.txt", "time,value\n0,5\n1,-3\n");
        let signals = collect_signals(dir.path()).unwrap();
        assert_eq!(signals.len(), 2);
        assert_eq!(signals[0].name, "a.txt");
        // a.txt gains one interpolated crossing
        assert_eq!(signals[0].points.len(), 3);
        assert_eq!(signals[0].zero_points().count(), 1);
        assert_eq!(signals[1].name, "b.txt");
        assert_eq!(signals[1].points.len(), 2);
    }
    #[test]
    fn empty_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = collect_signals(dir.path()).unwrap_err();
        assert!(matches!(err, SignalError::NoInputs(_)));
    }
    #[test]
    fn parse_failure_propagates() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "bad.txt", "time,value\nnope\n");
        assert!(collect_signals(dir.path()).is_err());
    }
}
