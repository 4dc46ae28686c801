//! Non-destructive zip backups, taken before an edit run writes anything.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use walkdir::WalkDir;
use zip::CompressionMethod;
use zip::write::FileOptions;

/// Zip a types file, or a whole mission directory, into a timestamped
/// archive next to it. Returns the archive path.
pub fn zip_backup(target: &Path) -> io::Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let name = target
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("backup");
    let ts = chrono::Local::now().format("%Y%m%d-%H%M%S");
    let dest = parent.join(format!("{}_{}.zip", name, ts));

    let file = fs::File::create(&dest)?;
    let mut zip = zip::ZipWriter::new(file);
    let options = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .unix_permissions(0o644);

    if target.is_file() {
        zip.start_file(name, options)?;
        zip.write_all(&fs::read(target)?)?;
    } else if target.is_dir() {
        for entry in WalkDir::new(target) {
            let entry = entry.map_err(|e| io::Error::other(e.to_string()))?;
            let path = entry.path();
            let rel = path.strip_prefix(target).unwrap();
            if rel.as_os_str().is_empty() {
                continue;
            }
            let entry_name = rel.to_string_lossy().replace('\\', "/");
            if path.is_dir() {
                zip.add_directory(entry_name, options)?;
            } else {
                zip.start_file(entry_name, options)?;
                zip.write_all(&fs::read(path)?)?;
            }
        }
    } else {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "not a file or directory",
        ));
    }

    zip.finish()?;
    Ok(dest)
}
