//! Directory archiving

use super::{Result, io_error};
use crate::error::StorageError;
use std::fs::{self, File};
use std::io::{self, Seek, Write};
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

fn archive_error(path: &Path, message: impl Into<String>) -> StorageError {
    StorageError::Archive {
        path: path.to_string_lossy().to_string(),
        message: message.into(),
    }
}

/// Create a zip archive holding everything below `folder`.
///
/// The archive is written to a fresh file in the system temp directory and
/// its path is returned. The file is not removed automatically.
pub fn zip_folder<P: AsRef<Path>>(folder: P) -> Result<PathBuf> {
    zip_folder_in(folder.as_ref(), &std::env::temp_dir())
}

/// Like [`zip_folder`], writing the archive into `target_dir`.
///
/// Nothing is left in `target_dir` when archiving fails.
pub fn zip_folder_in(folder: &Path, target_dir: &Path) -> Result<PathBuf> {
    if !folder.is_dir() {
        return Err(archive_error(folder, "not a directory"));
    }

    let target = tempfile::Builder::new()
        .prefix("dialogkit-")
        .suffix(".zip")
        .tempfile_in(target_dir)
        .map_err(|source| io_error(target_dir, source))?;

    // Dropping the temp file on an early return deletes it
    let mut writer = ZipWriter::new(target);
    add_dir_entries(&mut writer, folder, folder)?;
    let target = writer
        .finish()
        .map_err(|e| archive_error(folder, e.to_string()))?;
    let (_, zipped_path) = target
        .keep()
        .map_err(|e| archive_error(folder, e.to_string()))?;

    log::debug!(
        "Archived '{}' to '{}'",
        folder.display(),
        zipped_path.display()
    );
    Ok(zipped_path)
}

fn file_options() -> SimpleFileOptions {
    SimpleFileOptions::default().compression_method(CompressionMethod::Deflated)
}

fn add_dir_entries<W: Write + Seek>(
    writer: &mut ZipWriter<W>,
    root: &Path,
    dir: &Path,
) -> Result<()> {
    let mut entries = fs::read_dir(dir)
        .map_err(|source| io_error(dir, source))?
        .collect::<io::Result<Vec<_>>>()
        .map_err(|source| io_error(dir, source))?;
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let path = entry.path();
        let name = entry_name(root, &path);

        if path.is_dir() {
            writer
                .add_directory(format!("{}/", name), file_options())
                .map_err(|e| archive_error(&path, e.to_string()))?;
            add_dir_entries(writer, root, &path)?;
        } else {
            writer
                .start_file(name, file_options())
                .map_err(|e| archive_error(&path, e.to_string()))?;
            let mut source = File::open(&path).map_err(|source| io_error(&path, source))?;
            io::copy(&mut source, writer).map_err(|source| io_error(&path, source))?;
        }
    }
    Ok(())
}

/// Archive entry names always use forward slashes
fn entry_name(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use tempfile::TempDir;
    use zip::ZipArchive;

    #[test]
    fn test_zip_folder_contains_nested_files() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let model_dir = temp_dir.path().join("model");
        fs::create_dir_all(model_dir.join("policy_0")).unwrap();
        fs::write(model_dir.join("domain.yml"), "intents:\n- greet\n").unwrap();
        fs::write(model_dir.join("policy_0").join("weights.json"), "[1, 2]").unwrap();

        let zipped = zip_folder(&model_dir).expect("Failed to zip folder");
        assert_eq!(zipped.extension().and_then(|e| e.to_str()), Some("zip"));

        let mut archive = ZipArchive::new(File::open(&zipped).unwrap()).unwrap();
        let mut names: Vec<String> = archive.file_names().map(String::from).collect();
        names.sort();
        assert_eq!(
            names,
            vec!["domain.yml", "policy_0/", "policy_0/weights.json"]
        );

        let mut content = String::new();
        archive
            .by_name("policy_0/weights.json")
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "[1, 2]");

        fs::remove_file(zipped).unwrap();
    }

    #[test]
    fn test_zip_folder_rejects_missing_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let result = zip_folder(temp_dir.path().join("nope"));
        assert!(matches!(result, Err(StorageError::Archive { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_failed_archive_leaves_no_file_behind() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let model_dir = temp_dir.path().join("model");
        let target_dir = temp_dir.path().join("archives");
        fs::create_dir_all(&model_dir).unwrap();
        fs::create_dir_all(&target_dir).unwrap();
        fs::write(model_dir.join("domain.yml"), "intents: []\n").unwrap();
        std::os::unix::fs::symlink("/nonexistent/target", model_dir.join("dangling")).unwrap();

        let result = zip_folder_in(&model_dir, &target_dir);
        assert!(matches!(result, Err(StorageError::FileIo { .. })));
        assert_eq!(fs::read_dir(&target_dir).unwrap().count(), 0);
    }

    #[test]
    fn test_zip_folder_in_target_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let model_dir = temp_dir.path().join("model");
        fs::create_dir_all(&model_dir).unwrap();
        fs::write(model_dir.join("a.txt"), "a").unwrap();

        let zipped = zip_folder_in(&model_dir, temp_dir.path()).unwrap();
        assert_eq!(zipped.parent(), Some(temp_dir.path()));
        let name = zipped.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("dialogkit-") && name.ends_with(".zip"));
    }

    #[test]
    fn test_each_call_uses_a_new_archive() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        fs::write(temp_dir.path().join("a.txt"), "a").unwrap();

        let first = zip_folder(temp_dir.path()).unwrap();
        let second = zip_folder(temp_dir.path()).unwrap();
        assert_ne!(first, second);

        fs::remove_file(first).unwrap();
        fs::remove_file(second).unwrap();
    }
}
