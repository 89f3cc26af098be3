use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum SignalError {
    #[error("{path}:{line}: expected two comma-separated fields, got {found}", path = .path.display())]
    BadRecord {
        path: PathBuf,
        line: usize,
        found: usize,
    },
    #[error("{path}:{line}: field {field:?} is not an integer", path = .path.display())]
    BadInteger {
        path: PathBuf,
        line: usize,
        field: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("failed to read {path}", path = .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no *.txt signal files under {}", .0.display())]
    NoInputs(PathBuf),
    #[error("failed to render plot: {0}")]
    Plot(String),
}
impl<E: std::error::Error + Send + Sync + 'static> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for SignalError
{
    fn from(value: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        SignalError::Plot(format!("{value:?}"))
    }
}
impl From<image::ImageError> for SignalError {
    fn from(value: image::ImageError) -> Self {
        SignalError::Plot(value.to_string())
    }
}
