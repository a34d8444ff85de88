//! The append-only operations journal.
//!
//! Every mutating directory operation emits a single prefixed line through a
//! [`Journal`]. The journal writes through a [`LogSink`], so embedders can
//! substitute their own sink; the default [`FileSink`] echoes each line to
//! standard output and appends it to a log file.

use std::cell::RefCell;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::rc::Rc;

/// An append-only line sink.
///
/// Sinks are infallible from the caller's perspective: a sink that cannot
/// write (e.g. the log file cannot be opened) drops the line rather than
/// surfacing an error. Journal output is best-effort by design.
pub trait LogSink: std::fmt::Debug {
    /// Append one line to the sink.
    fn append(&mut self, line: &str);
}

/// Sink that echoes lines to stdout and appends them to a file.
///
/// The file is opened in append mode and closed again on every write, so no
/// handle is held across operations. Open or write failures are silently
/// dropped; the stdout echo still happens.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    /// Create a sink appending to the file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this sink appends to.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl LogSink for FileSink {
    fn append(&mut self, line: &str) {
        println!("{line}");
        if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(file, "{line}");
        }
    }
}

/// In-memory sink backed by a shared line buffer.
///
/// Cloning the sink before handing it to a [`Journal`] keeps a handle on the
/// buffer, which is how tests inspect journal output without touching the
/// filesystem.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Rc<RefCell<Vec<String>>>,
}

impl MemorySink {
    /// Create an empty in-memory sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all lines appended so far.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// Whether any appended line contains `needle`.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.borrow().iter().any(|l| l.contains(needle))
    }
}

impl LogSink for MemorySink {
    fn append(&mut self, line: &str) {
        self.lines.borrow_mut().push(line.to_string());
    }
}

/// The operations journal.
///
/// Wraps a [`LogSink`] and prefixes entries with `[LOG] ` or `[ERROR] `.
#[derive(Debug)]
pub struct Journal {
    sink: Box<dyn LogSink>,
}

impl Journal {
    /// Create a journal writing to the given sink.
    #[must_use]
    pub fn new(sink: Box<dyn LogSink>) -> Self {
        Self { sink }
    }

    /// Convenience constructor for the default stdout-plus-file sink.
    #[must_use]
    pub fn to_file(path: impl Into<PathBuf>) -> Self {
        Self::new(Box::new(FileSink::new(path)))
    }

    /// Append an informational entry.
    pub fn log(&mut self, message: &str) {
        self.sink.append(&format!("[LOG] {message}"));
    }

    /// Append an error entry.
    pub fn error(&mut self, message: &str) {
        self.sink.append(&format!("[ERROR] {message}"));
    }
}
