use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

const STORAGE_DIR_NAME: &str = ".taskpad";
const TASKS_FILE_NAME: &str = "tasks.json";

/// Get the storage directory - checks for a local .taskpad first, then falls
/// back to the global ~/.taskpad
pub fn get_storage_dir() -> Result<PathBuf> {
    let current_dir = env::current_dir().context("Could not determine current directory")?;

    if let Some(local_dir) = find_local_storage(&current_dir) {
        return Ok(local_dir);
    }

    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(STORAGE_DIR_NAME))
}

/// Find a local .taskpad directory by walking up the directory tree
fn find_local_storage(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir;

    loop {
        let storage_dir = current.join(STORAGE_DIR_NAME);
        if storage_dir.exists() && storage_dir.is_dir() {
            return Some(storage_dir);
        }

        current = current.parent()?;
    }
}

/// Ensure the storage directory exists
pub fn ensure_storage_dir() -> Result<PathBuf> {
    let dir = get_storage_dir()?;
    if !dir.exists() {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    Ok(dir)
}

/// Initialize a local .taskpad directory in the current directory
pub fn init_local_storage() -> Result<PathBuf> {
    let current_dir = env::current_dir().context("Could not determine current directory")?;
    let storage_dir = current_dir.join(STORAGE_DIR_NAME);

    if storage_dir.exists() {
        anyhow::bail!("Taskpad directory already exists: {}", storage_dir.display());
    }

    fs::create_dir_all(&storage_dir)
        .with_context(|| format!("Failed to create directory: {}", storage_dir.display()))?;

    Ok(storage_dir)
}

/// Get path to the task snapshot file (the single storage slot)
pub fn tasks_file() -> Result<PathBuf> {
    Ok(ensure_storage_dir()?.join(TASKS_FILE_NAME))
}

/// Atomically write content to a file using temp file + rename
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let dir = path
        .parent()
        .context("File path has no parent directory")?;

    // Temp file must live in the same directory for the rename to be atomic
    let mut temp_file = NamedTempFile::new_in(dir)
        .context("Failed to create temporary file")?;

    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write to temporary file")?;

    temp_file
        .as_file()
        .sync_all()
        .context("Failed to sync temporary file")?;

    temp_file
        .persist(path)
        .with_context(|| format!("Failed to persist file: {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_storage_dir() {
        let dir = get_storage_dir().unwrap();
        assert!(dir.to_string_lossy().contains(".taskpad"));
    }

    #[test]
    fn test_atomic_write_and_read() {
        let temp_dir = tempfile::tempdir().unwrap();
        let test_file = temp_dir.path().join("test.txt");

        let content = "Hello, world!";
        atomic_write(&test_file, content).unwrap();

        let read_content = fs::read_to_string(&test_file).unwrap();
        assert_eq!(read_content, content);
    }

    #[test]
    fn test_atomic_write_overwrites() {
        let temp_dir = tempfile::tempdir().unwrap();
        let test_file = temp_dir.path().join("test.txt");

        atomic_write(&test_file, "first").unwrap();
        atomic_write(&test_file, "second").unwrap();

        let read_content = fs::read_to_string(&test_file).unwrap();
        assert_eq!(read_content, "second");
    }
}
