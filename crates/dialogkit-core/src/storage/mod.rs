use crate::error::StorageError;

pub mod archive;
pub mod config;
pub mod file;
pub mod yaml;

type Result<T> = std::result::Result<T, StorageError>;

fn io_error(path: &std::path::Path, source: std::io::Error) -> StorageError {
    StorageError::FileIo {
        path: path.to_string_lossy().to_string(),
        source,
    }
}
