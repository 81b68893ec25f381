//! Size-rotated log file
//!
//! `<name>.log` is the live file. Rotated files are `<name>.1.log`
//! (newest) up to `<name>.<max_files - 1>.log` (oldest).

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::MakeWriter;

struct Inner {
    dir: PathBuf,
    name: String,
    max_bytes: u64,
    max_files: usize,
    file: File,
    size: u64,
}

impl Inner {
    fn path_for(&self, index: usize) -> PathBuf {
        if index == 0 {
            self.dir.join(format!("{}.log", self.name))
        } else {
            self.dir.join(format!("{}.{}.log", self.name, index))
        }
    }

    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;

        if self.max_files > 1 {
            let oldest = self.path_for(self.max_files - 1);
            if oldest.exists() {
                fs::remove_file(&oldest)?;
            }
            for index in (0..self.max_files - 1).rev() {
                let from = self.path_for(index);
                if from.exists() {
                    fs::rename(&from, self.path_for(index + 1))?;
                }
            }
        }

        // With a single file allowed the live file is simply truncated
        self.file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(self.path_for(0))?;
        self.size = 0;
        Ok(())
    }
}

/// Cheap to clone; all clones share the same file
#[derive(Clone)]
pub struct RollingWriter {
    inner: Arc<Mutex<Inner>>,
}

impl RollingWriter {
    pub fn new(dir: &Path, name: &str, max_bytes: u64, max_files: usize) -> io::Result<Self> {
        fs::create_dir_all(dir)?;
        let path = dir.join(format!("{}.log", name));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let size = file.metadata()?.len();
        Ok(Self {
            inner: Arc::new(Mutex::new(Inner {
                dir: dir.to_path_buf(),
                name: name.to_string(),
                max_bytes: max_bytes.max(1),
                max_files: max_files.max(1),
                file,
                size,
            })),
        })
    }

    /// Path of the live log file
    pub fn current_path(&self) -> PathBuf {
        match self.inner.lock() {
            Ok(inner) => inner.path_for(0),
            Err(poisoned) => poisoned.into_inner().path_for(0),
        }
    }
}

impl Write for RollingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log writer poisoned"))?;
        if inner.size > 0 && inner.size + buf.len() as u64 > inner.max_bytes {
            inner.rotate()?;
        }
        inner.file.write_all(buf)?;
        inner.size += buf.len() as u64;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log writer poisoned"))?;
        inner.file.flush()
    }
}

impl<'a> MakeWriter<'a> for RollingWriter {
    type Writer = RollingWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log_files(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_writes_to_live_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = RollingWriter::new(dir.path(), "app", 1024, 3).unwrap();
        writer.write_all(b"hello\n").unwrap();
        writer.flush().unwrap();

        assert_eq!(fs::read_to_string(writer.current_path()).unwrap(), "hello\n");
        assert_eq!(log_files(dir.path()), vec!["app.log"]);
    }

    #[test]
    fn test_rotates_at_size_limit() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = RollingWriter::new(dir.path(), "app", 10, 3).unwrap();
        writer.write_all(b"aaaaaaaa\n").unwrap();
        writer.write_all(b"bbbbbbbb\n").unwrap();
        writer.flush().unwrap();

        assert_eq!(log_files(dir.path()), vec!["app.1.log", "app.log"]);
        assert_eq!(fs::read_to_string(dir.path().join("app.1.log")).unwrap(), "aaaaaaaa\n");
        assert_eq!(fs::read_to_string(dir.path().join("app.log")).unwrap(), "bbbbbbbb\n");
    }

    #[test]
    fn test_keeps_at_most_max_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = RollingWriter::new(dir.path(), "app", 10, 3).unwrap();
        for line in ["one......\n", "two......\n", "three....\n", "four.....\n", "five.....\n"] {
            writer.write_all(line.as_bytes()).unwrap();
        }
        writer.flush().unwrap();

        assert_eq!(log_files(dir.path()), vec!["app.1.log", "app.2.log", "app.log"]);
        assert_eq!(fs::read_to_string(dir.path().join("app.log")).unwrap(), "five.....\n");
        assert_eq!(fs::read_to_string(dir.path().join("app.2.log")).unwrap(), "three....\n");
    }

    #[test]
    fn test_single_file_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = RollingWriter::new(dir.path(), "app", 10, 1).unwrap();
        writer.write_all(b"first....\n").unwrap();
        writer.write_all(b"second...\n").unwrap();
        writer.flush().unwrap();

        assert_eq!(log_files(dir.path()), vec!["app.log"]);
        assert_eq!(fs::read_to_string(dir.path().join("app.log")).unwrap(), "second...\n");
    }

    #[test]
    fn test_reopen_appends_and_counts_existing_size() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("app.log"), b"old line\n").unwrap();

        let mut writer = RollingWriter::new(dir.path(), "app", 12, 2).unwrap();
        writer.write_all(b"new line\n").unwrap();
        writer.flush().unwrap();

        assert_eq!(fs::read_to_string(dir.path().join("app.1.log")).unwrap(), "old line\n");
        assert_eq!(fs::read_to_string(dir.path().join("app.log")).unwrap(), "new line\n");
    }
}
