use std::{
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
    sync::{Mutex, PoisonError},
};

use crate::{
    log_writer::LogStream,
    record::LogRecord,
    style::{Style, format_record, strip_ansi},
};

/// Configuration for a file stream.
#[derive(Debug, Clone, Default)]
pub struct LogFileConfig {
    pub folder: PathBuf,
    pub filename: String,
    /// Start a new file every calendar day: `<filename>.<YYYY-MM-DD>.log`.
    pub rollover: bool,
    /// Start a new segment `<stem>.<n>.log` once the current one reaches this size.
    pub max_file_size_kb: Option<u64>,
    pub style: Style,
}

#[derive(Default)]
struct FileState {
    file: Option<File>,
    path: PathBuf,
    date: Option<String>,
    segment: u32,
    size: u64,
}

/// A file stream appending plain-text records, with optional daily and size rollover.
///
/// Files are opened lazily on the first write. Every write holds the stream's lock,
/// so records and file switches from concurrent callers never interleave.
pub struct LogFile {
    folder: PathBuf,
    filename: String,
    rollover: bool,
    max_file_size: Option<u64>,
    style: Style,
    state: Mutex<FileState>,
}

impl LogFile {
    pub fn new(config: LogFileConfig) -> Result<Self, io::Error> {
        if config.folder.as_os_str().is_empty() || config.filename.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "folder and filename must be set",
            ));
        }
        let max_file_size = match config.max_file_size_kb {
            Some(0) => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "max_file_size_kb must be at least 1",
                ));
            }
            Some(kb) => Some(kb.checked_mul(1024).ok_or_else(|| {
                io::Error::new(io::ErrorKind::InvalidInput, "max_file_size_kb is too large")
            })?),
            None => None,
        };
        Ok(Self {
            folder: config.folder,
            filename: config.filename,
            rollover: config.rollover,
            max_file_size,
            style: config.style,
            state: Mutex::new(FileState::default()),
        })
    }

    pub fn style(&self) -> Style {
        self.style
    }

    /// Path of the file currently open, if any write happened yet.
    pub fn current_path(&self) -> Option<PathBuf> {
        let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.file.as_ref().map(|_| state.path.clone())
    }

    fn segment_path(&self, date: Option<&str>, segment: u32) -> PathBuf {
        let mut name = self.filename.clone();
        if let Some(date) = date {
            name.push('.');
            name.push_str(date);
        }
        if segment > 0 {
            name.push_str(&format!(".{segment}"));
        }
        name.push_str(".log");
        self.folder.join(name)
    }

    fn is_full(&self, size: u64) -> bool {
        self.max_file_size.is_some_and(|max| size >= max)
    }

    fn open_segment(
        &self,
        state: &mut FileState,
        date: Option<String>,
        mut segment: u32,
    ) -> Result<(), io::Error> {
        state.file = None;
        fs::create_dir_all(&self.folder)?;
        // resume the newest segment left by an earlier run
        if self.max_file_size.is_some() {
            while self.segment_path(date.as_deref(), segment + 1).try_exists()? {
                segment += 1;
            }
        }
        let mut path = self.segment_path(date.as_deref(), segment);
        while self.is_full(existing_len(&path)?) {
            segment += 1;
            path = self.segment_path(date.as_deref(), segment);
        }
        let file = File::options().create(true).append(true).open(&path)?;
        let size = file.metadata()?.len();
        *state = FileState {
            file: Some(file),
            path,
            date,
            segment,
            size,
        };
        Ok(())
    }
}

fn existing_len(path: &Path) -> Result<u64, io::Error> {
    match fs::metadata(path) {
        Ok(metadata) => Ok(metadata.len()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(0),
        Err(err) => Err(err),
    }
}

impl LogStream for LogFile {
    fn write(&self, record: &LogRecord) -> io::Result<()> {
        let line = strip_ansi(&format_record(record, self.style));
        let date = self
            .rollover
            .then(|| record.time.format("%Y-%m-%d").to_string());
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if state.file.is_none() || state.date != date {
            self.open_segment(&mut state, date, 0)?;
        } else if self.is_full(state.size) {
            let next = state.segment + 1;
            self.open_segment(&mut state, date, next)?;
        }
        let Some(file) = state.file.as_mut() else {
            return Err(io::Error::other("log file is not open"));
        };
        file.write_all(line.as_bytes())?;
        state.size += line.len() as u64;
        Ok(())
    }

    fn flush(&self) -> io::Result<()> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        match state.file.as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }
}
