// crates/infra/src/persistence/file_writer.rs
use std::{
    fs::{self, File, OpenOptions},
    io::{BufWriter, ErrorKind, Write},
    path::{Path, PathBuf},
};

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Atomically write `data` to `path` via a temp file and rename.
    ///
    /// Symlinks are followed: the file they point at is replaced and the link
    /// itself stays. The temp file lives in the target's directory so the
    /// rename never crosses filesystems. Permissions of an existing target are
    /// carried over. Best-effort fsync is attempted where available.
    pub fn atomic_write<P: AsRef<Path>>(path: P, data: &[u8]) -> std::io::Result<()> {
        let path = path.as_ref();
        let resolved = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        let path = resolved.as_path();
        let tmp = Self::temp_path(path)?;

        if let Err(err) = Self::write_temp(&tmp, path, data) {
            // A colliding name belongs to someone else; leave it alone.
            if err.kind() != ErrorKind::AlreadyExists {
                let _ = fs::remove_file(&tmp);
            }
            return Err(err);
        }
        if let Err(err) = fs::rename(&tmp, path) {
            let _ = fs::remove_file(&tmp);
            return Err(err);
        }

        // Attempt to sync parent directory to make the rename durable on Unix.
        #[cfg(unix)]
        {
            if let Ok(dir) = File::open(Self::parent_dir(path)) {
                let _ = dir.sync_all();
            }
        }

        Ok(())
    }

    fn write_temp(tmp: &Path, target: &Path, data: &[u8]) -> std::io::Result<()> {
        let file = OpenOptions::new().write(true).create_new(true).open(tmp)?;
        if let Ok(meta) = fs::metadata(target) {
            file.set_permissions(meta.permissions())?;
        }
        let mut w = BufWriter::new(file);
        w.write_all(data)?;
        w.flush()?;
        let _ = w.get_ref().sync_all();
        Ok(())
    }

    fn parent_dir(path: &Path) -> &Path {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    // PID + current time nanos keeps the name unique without a retry loop.
    fn temp_path(path: &Path) -> std::io::Result<PathBuf> {
        let name = path
            .file_name()
            .ok_or_else(|| std::io::Error::other("path has no file name"))?;
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        Ok(Self::parent_dir(path).join(format!(
            ".{}.{}.{}.tmp",
            name.to_string_lossy(),
            std::process::id(),
            nanos
        )))
    }
}
