
/// Maps an event message to its output representation.
///
/// Implementations are pure and total: formatting always succeeds and touches
/// nothing but the message. Any formatter is substitutable for any other.
pub trait Format: Send + Sync {
  fn format(&self, message: &str) -> String;
}

/// Passes the message through unchanged.
pub struct PlainFormatter;

impl Format for PlainFormatter {
  fn format(&self, message: &str) -> String {
    message.to_string()
  }
}

/// Wraps the message in a fixed `<tag>...</tag>` pair.
pub struct TagFormatter {
  tag: String,
}

impl TagFormatter {
  /// The tag is fixed per formatter instance.
  pub fn new(tag: impl Into<String>) -> Self {
    Self { tag: tag.into() }
  }
}

impl Format for TagFormatter {
  fn format(&self, message: &str) -> String {
    format!("<{}>{}</{}>", self.tag, message, self.tag)
  }
}

/// Renders the message as a single-field JSON record: `{"data": "<message>"}`.
///
/// The shape is fixed byte-for-byte for compatibility with existing readers,
/// so it is rendered by hand rather than through a serializer. Messages are
/// assumed not to contain characters that would need escaping.
pub struct JsonFormatter;

impl Format for JsonFormatter {
  fn format(&self, message: &str) -> String {
    format!("{{\"data\": \"{}\"}}", message)
  }
}
