use std::fs;
use std::path::{Path, PathBuf};

use zip::ZipWriter;
use zip::write::FileOptions;

use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

pub struct BackupLogic;

impl BackupLogic {
    /// Copies the data file to `dest_file`, optionally compressing it to a
    /// `.zip` next to it. An existing destination asks for confirmation.
    pub fn backup(cfg: &Config, dest_file: &str, compress: bool) -> AppResult<()> {
        let src = Path::new(&cfg.data_file);
        let dest = Path::new(dest_file);

        if !src.exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Data file not found: {}", src.display()),
            )
            .into());
        }

        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        if dest.exists() {
            warning(format!("The file '{}' already exists.", dest.display()));

            use std::io::{Write, stdin, stdout};

            let mut answer = String::new();
            print!("Overwrite? [y/N]: ");
            stdout().flush().ok();
            stdin().read_line(&mut answer)?;

            let answer = answer.trim().to_lowercase();
            if !(answer == "y" || answer == "yes") {
                println!("Backup cancelled.");
                return Ok(());
            }
        }

        fs::copy(src, dest)?;
        success(format!("Backup created: {}", dest.display()));

        if compress {
            let compressed = compress_backup(dest)?;
            if compressed != dest.to_path_buf() {
                if let Err(e) = fs::remove_file(dest) {
                    warning(format!("Failed to remove uncompressed backup: {e}"));
                } else {
                    println!("🗑️ Removed uncompressed backup: {}", dest.display());
                }
            }
        }

        Ok(())
    }
}

/// Compress a backup using .zip
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut f = fs::File::open(path)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "backup.json".to_string());
    zip.start_file(name, options).map_err(std::io::Error::other)?;

    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    println!("📦 Compressed: {}", zip_path.display());

    Ok(zip_path)
}
