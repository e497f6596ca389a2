
use serde::{Deserialize, Serialize};

/// Severity classes routed by the pipeline.
///
/// The set is closed: anything that does not name one of the three known
/// severities folds to [`Severity::Unknown`] instead of failing, so a
/// malformed classification still routes through the pipeline like any other
/// event. There is no inherent ordering between severities; each one is
/// handled independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
  /// A recoverable condition worth surfacing.
  Warning,
  /// A failure the process can survive.
  Error,
  /// A failure that should halt further handling of the event.
  Fatal,
  /// Anything that could not be classified.
  Unknown,
}

impl Severity {
  /// Returns the canonical label used in rendered log lines.
  ///
  /// # Example
  ///
  /// ```rust
  /// use logfan::event::Severity;
  /// assert_eq!(Severity::Fatal.as_str(), "Fatal");
  /// ```
  pub fn as_str(&self) -> &'static str {
    match self {
      Severity::Warning => "Warning",
      Severity::Error => "Error",
      Severity::Fatal => "Fatal",
      Severity::Unknown => "Unknown",
    }
  }

  /// Maps a free-form label onto the closed severity set.
  ///
  /// Matching is case-insensitive. Labels outside the known set fold to
  /// [`Severity::Unknown`]; this never fails.
  ///
  /// # Example
  ///
  /// ```rust
  /// use logfan::event::Severity;
  /// assert_eq!(Severity::from_label("WARN"), Severity::Warning);
  /// assert_eq!(Severity::from_label("notice"), Severity::Unknown);
  /// ```
  pub fn from_label(label: &str) -> Self {
    match label.to_ascii_lowercase().as_str() {
      "warning" | "warn" => Severity::Warning,
      "error" => Severity::Error,
      "fatal" => Severity::Fatal,
      _ => Severity::Unknown,
    }
  }
}

impl From<&str> for Severity {
  fn from(label: &str) -> Self {
    Severity::from_label(label)
  }
}

impl std::fmt::Display for Severity {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

/// A single log occurrence: a severity plus a message.
///
/// Events are immutable once constructed. The pipeline borrows an event for
/// the duration of one dispatch and never retains it across calls, so the
/// creating call stack keeps ownership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEvent {
  severity: Severity,
  message: String,
}

impl LogEvent {
  /// Creates a new `LogEvent` from a severity and a message.
  ///
  /// # Example
  ///
  /// ```rust
  /// use logfan::event::{LogEvent, Severity};
  /// let event = LogEvent::new(Severity::Warning, "disk at 80%");
  /// assert_eq!(event.severity(), Severity::Warning);
  /// assert_eq!(event.message(), "disk at 80%");
  /// ```
  pub fn new(severity: Severity, message: impl Into<String>) -> Self {
    Self {
      severity,
      message: message.into(),
    }
  }

  /// The event's severity class.
  pub fn severity(&self) -> Severity {
    self.severity
  }

  /// The event's message text.
  pub fn message(&self) -> &str {
    &self.message
  }

  /// Serializes the event into a JSON string.
  ///
  /// # Example
  ///
  /// ```rust
  /// use logfan::event::{LogEvent, Severity};
  /// let json = LogEvent::new(Severity::Error, "query failed").to_json();
  /// assert!(json.contains("\"Error\""));
  /// ```
  pub fn to_json(&self) -> String {
    serde_json::to_string(self).expect("Failed to serialize")
  }

  /// Deserializes a JSON string produced by [`LogEvent::to_json`].
  ///
  /// # Panics
  /// Panics if the input is not a valid event record.
  pub fn from_json(json: &str) -> Self {
    serde_json::from_str::<Self>(json).expect("Failed to deserialize")
  }
}

impl std::fmt::Display for LogEvent {
  /// Renders the canonical line form `"<Severity>: <message>"`.
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}: {}", self.severity.as_str(), self.message)
  }
}
