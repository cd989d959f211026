// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Local};
use image::ImageFormat;

use crate::core::sanitize::sanitize_file_stem;
use crate::error::{Error, Result};

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// Ensure the parent dir of `path` exists (no-op for bare file names).
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    Ok(())
}

/// `<dir>/<NN>_<safe name>_<YYYYmmdd_HHMMSS>.png`, `NN` being the 1-based run index.
pub fn screenshot_path(dir: &Path, index: usize, name: &str, at: &DateTime<Local>) -> PathBuf {
    let stem = sanitize_file_stem(name);
    dir.join(format!("{index:02}_{stem}_{}.png", at.format("%Y%m%d_%H%M%S")))
}

/// Decode whatever the fetcher captured and store it as PNG.
pub fn write_screenshot(path: &Path, bytes: &[u8]) -> std::result::Result<(), Box<dyn std::error::Error>> {
    ensure_parent_dir(path)?;
    let img = image::load_from_memory(bytes)?;
    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn screenshot_name_layout() {
        let at = Local.with_ymd_and_hms(2026, 3, 7, 9, 5, 1).unwrap();
        let p = screenshot_path(Path::new("shots"), 3, "Sony WH-1000XM5 (Black)", &at);
        assert_eq!(p, Path::new("shots").join("03_Sony_WH-1000XM5_Black__20260307_090501.png"));
    }

    #[test]
    fn refuses_file_as_directory() {
        let dir = tempfile::tempdir().unwrap();
        let f = dir.path().join("plain");
        fs::write(&f, b"x").unwrap();
        assert!(matches!(ensure_directory(&f), Err(Error::NotADirectory(_))));
    }

    #[test]
    fn screenshot_roundtrips_through_png() {
        let dir = tempfile::tempdir().unwrap();
        let mut png = Vec::new();
        image::RgbImage::new(2, 2)
            .write_to(&mut std::io::Cursor::new(&mut png), ImageFormat::Png)
            .unwrap();

        let path = dir.path().join("shots").join("01_x.png");
        write_screenshot(&path, &png).unwrap();
        assert!(path.exists());

        assert!(write_screenshot(&dir.path().join("bad.png"), b"not an image").is_err());
    }
}
