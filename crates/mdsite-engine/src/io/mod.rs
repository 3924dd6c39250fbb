use relative_path::RelativePathBuf;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid directory {path}: {reason}")]
    InvalidDir { path: PathBuf, reason: String },
}

impl IoError {
    fn at(path: &Path) -> impl FnOnce(std::io::Error) -> IoError + '_ {
        move |source| IoError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Read a text file
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::at(path))
}

/// Write content to a file, creating parent directories as needed
pub fn write_file(path: &Path, content: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(IoError::at(parent))?;
    }
    fs::write(path, content).map_err(IoError::at(path))
}

/// Scan for markdown files under `root`, as sorted paths relative to it
pub fn scan_markdown_files(root: &Path) -> Result<Vec<RelativePathBuf>, IoError> {
    validate_dir(root)?;

    let mut files = Vec::new();
    scan_directory_recursive(root, root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(
    root: &Path,
    dir: &Path,
    files: &mut Vec<RelativePathBuf>,
) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::at(dir))?;

    for entry in entries {
        let entry = entry.map_err(IoError::at(dir))?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(root, &path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            match path
                .strip_prefix(root)
                .ok()
                .and_then(|rel| RelativePathBuf::from_path(rel).ok())
            {
                Some(rel) => files.push(rel),
                None => log::warn!(
                    "Skipping {}: not representable as a relative path",
                    path.display()
                ),
            }
        }
    }

    Ok(())
}

/// Remove everything inside `dir`, keeping `dir` itself. Missing dirs are fine.
pub fn clear_directory(dir: &Path) -> Result<(), IoError> {
    if !dir.exists() {
        return Ok(());
    }
    for entry in fs::read_dir(dir).map_err(IoError::at(dir))? {
        let path = entry.map_err(IoError::at(dir))?.path();
        if path.is_dir() && !path.is_symlink() {
            fs::remove_dir_all(&path).map_err(IoError::at(&path))?;
        } else {
            fs::remove_file(&path).map_err(IoError::at(&path))?;
        }
    }
    Ok(())
}

/// Copy the tree under `src` into `dst`, returning the copied file paths
pub fn copy_directory(src: &Path, dst: &Path) -> Result<Vec<PathBuf>, IoError> {
    validate_dir(src)?;
    let mut copied = Vec::new();
    copy_directory_recursive(src, dst, &mut copied)?;
    copied.sort();
    Ok(copied)
}

fn copy_directory_recursive(
    src: &Path,
    dst: &Path,
    copied: &mut Vec<PathBuf>,
) -> Result<(), IoError> {
    fs::create_dir_all(dst).map_err(IoError::at(dst))?;

    for entry in fs::read_dir(src).map_err(IoError::at(src))? {
        let entry = entry.map_err(IoError::at(src))?;
        let from = entry.path();
        let to = dst.join(entry.file_name());

        if from.is_dir() {
            copy_directory_recursive(&from, &to, copied)?;
        } else {
            fs::copy(&from, &to).map_err(IoError::at(&from))?;
            log::info!("Copied {} -> {}", from.display(), to.display());
            copied.push(to);
        }
    }

    Ok(())
}

pub fn validate_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidDir {
            path: path.to_path_buf(),
            reason: "directory does not exist".to_string(),
        });
    }

    Ok(())
}
