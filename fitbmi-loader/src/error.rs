use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("reference dataset {} could not be opened: {}", .path.display(), .source)]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("reference dataset {} has no \"{column}\" column", .path.display())]
    MissingColumn { path: PathBuf, column: &'static str },
    #[error("reference dataset {} is not valid CSV: {}", .path.display(), .source)]
    Malformed {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
