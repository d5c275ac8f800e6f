use crate::error::{CipherError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Read a whole file as text
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let path_ref = path.as_ref();
    fs::read_to_string(path_ref).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CipherError::FileNotFound(path_ref.display().to_string())
        } else {
            CipherError::Io(e)
        }
    })
}

/// Write text to a file, replacing any previous content.
///
/// The content goes to a sibling `.tmp` file first and is renamed into place,
/// so a failed write never leaves a half-written destination.
pub fn write_text<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(CipherError::InvalidArgument(
            "Output path cannot be empty".to_string(),
        ));
    }

    let tmp_path = tmp_path_for(path);
    {
        let mut file = File::create(&tmp_path)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }

    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(CipherError::Io(e));
    }
    Ok(())
}

fn tmp_path_for(path: &Path) -> std::path::PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
