
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::error::SinkError;

/// An opaque, append-only byte destination.
///
/// Implementations accept bytes and may fail on write; nothing else is
/// assumed about the target.
pub trait Sink: Send {
  /// Appends `bytes` to the target.
  fn write(&mut self, bytes: &[u8]) -> Result<(), SinkError>;

  /// Identifier used in failure reports ("console", a path, ...).
  fn target(&self) -> &str;
}

/// Console sink writing to stdout.
pub struct ConsoleSink;

impl ConsoleSink {
  pub fn new() -> Self {
    Self
  }
}

impl Default for ConsoleSink {
  fn default() -> Self {
    Self::new()
  }
}

impl Sink for ConsoleSink {
  fn write(&mut self, bytes: &[u8]) -> Result<(), SinkError> {
    std::io::stdout()
      .write_all(bytes)
      .map_err(|source| SinkError::Write {
        target: "console".to_string(),
        source,
      })
  }

  fn target(&self) -> &str {
    "console"
  }
}

/// File-backed sink opened in append mode.
///
/// The sink owns the file handle exclusively for its lifetime; dropping the
/// sink releases the handle exactly once, on every exit path.
pub struct FileSink {
  path: String,
  file: std::fs::File,
}

impl FileSink {
  /// Open (or create if missing) `path` for appending.
  ///
  /// Parent directories are created as needed. Failure to open surfaces
  /// immediately as [`SinkError::Open`]; it is never deferred to the first
  /// write.
  pub fn new(path: impl AsRef<Path>) -> Result<Self, SinkError> {
    let path = path.as_ref();

    // Ensure parent directories exist
    if let Some(parent) = path.parent() {
      if !parent.as_os_str().is_empty() {
        std::fs::create_dir_all(parent).map_err(|source| SinkError::Open {
          path: path.display().to_string(),
          source,
        })?;
      }
    }

    // Open existing file, or create if missing; never truncate
    let file = OpenOptions::new()
      .create(true)
      .append(true)
      .open(path)
      .map_err(|source| SinkError::Open {
        path: path.display().to_string(),
        source,
      })?;

    debug!(path = %path.display(), "file sink acquired");

    Ok(Self {
      path: path.display().to_string(),
      file,
    })
  }
}

impl Sink for FileSink {
  fn write(&mut self, bytes: &[u8]) -> Result<(), SinkError> {
    self
      .file
      .write_all(bytes)
      .map_err(|source| SinkError::Write {
        target: self.path.clone(),
        source,
      })
  }

  fn target(&self) -> &str {
    &self.path
  }
}

/// In-memory sink backed by a shared buffer.
///
/// Cloning shares the buffer: one clone can be handed to a handler or writer
/// while another is kept to inspect what was written. Used heavily by tests.
#[derive(Clone, Default)]
pub struct MemorySink {
  buffer: Arc<Mutex<Vec<u8>>>,
}

impl MemorySink {
  pub fn new() -> Self {
    Self::default()
  }

  /// Copies out everything written so far.
  pub fn contents(&self) -> Vec<u8> {
    match self.buffer.lock() {
      Ok(buf) => buf.clone(),
      Err(_) => Vec::new(),
    }
  }

  /// Everything written so far, as UTF-8 (lossy).
  pub fn contents_string(&self) -> String {
    String::from_utf8_lossy(&self.contents()).into_owned()
  }
}

impl Sink for MemorySink {
  fn write(&mut self, bytes: &[u8]) -> Result<(), SinkError> {
    if let Ok(mut buf) = self.buffer.lock() {
      buf.extend_from_slice(bytes);
    }
    Ok(())
  }

  fn target(&self) -> &str {
    "memory"
  }
}
