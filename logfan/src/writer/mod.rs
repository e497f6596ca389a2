mod __test__;

use crate::error::SinkError;
use crate::event::LogEvent;
use crate::formatter::Format;
use crate::sink::Sink;

/// Binds one formatter to one sink.
///
/// The binding is fixed at construction. [`EventWriter::write`] formats the
/// event message and hands the bytes to the sink; the sink's verdict is
/// returned unchanged and never retried.
pub struct EventWriter {
  formatter: Box<dyn Format>,
  sink: Box<dyn Sink>,
}

impl EventWriter {
  pub fn new(formatter: Box<dyn Format>, sink: Box<dyn Sink>) -> Self {
    Self { formatter, sink }
  }

  /// Writes the formatted event message to the bound sink.
  pub fn write(&mut self, event: &LogEvent) -> Result<(), SinkError> {
    let rendered = self.formatter.format(event.message());
    self.sink.write(rendered.as_bytes())
  }

  /// Identifier of the bound sink, for failure reports.
  pub fn target(&self) -> &str {
    self.sink.target()
  }
}
