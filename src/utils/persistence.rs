//! Generic JSON persistence helpers for ~/.parlor/ files.
//!
//! Both games keep their flat JSON files (save slots, config, high score)
//! under a single dot directory in the user's home.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Get the ~/.parlor/ directory path, creating it if needed.
pub fn parlor_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    dot_dir(&home_dir)
}

fn dot_dir(base: &Path) -> io::Result<PathBuf> {
    let dir = base.join(".parlor");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get a subdirectory of ~/.parlor/, creating it if needed.
pub fn parlor_subdir(name: &str) -> io::Result<PathBuf> {
    let dir = parlor_dir()?.join(name);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the full path for a file in ~/.parlor/.
pub fn file_path(filename: &str) -> io::Result<PathBuf> {
    Ok(parlor_dir()?.join(filename))
}

/// Load a JSON file from ~/.parlor/, returning `T::default()` if missing or invalid.
pub fn load_json_or_default<T: Default + serde::de::DeserializeOwned>(filename: &str) -> T {
    match file_path(filename) {
        Ok(path) => read_json_or_default(&path),
        Err(_) => T::default(),
    }
}

fn read_json_or_default<T: Default + serde::de::DeserializeOwned>(path: &Path) -> T {
    match fs::read_to_string(path) {
        Ok(json) => serde_json::from_str(&json).unwrap_or_default(),
        Err(_) => T::default(),
    }
}

/// Save a value as pretty-printed JSON to ~/.parlor/.
pub fn save_json<T: serde::Serialize>(filename: &str, data: &T) -> io::Result<()> {
    write_json(&file_path(filename)?, data)
}

fn write_json<T: serde::Serialize>(path: &Path, data: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(path, json)?;
    Ok(())
}
