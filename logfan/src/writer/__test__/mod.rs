#[cfg(test)]
mod __test__ {

  use std::io;

  use crate::error::SinkError;
  use crate::event::{LogEvent, Severity};
  use crate::formatter::{Format, JsonFormatter, PlainFormatter, TagFormatter};
  use crate::sink::{MemorySink, Sink};
  use crate::writer::EventWriter;

  struct RejectingSink;

  impl Sink for RejectingSink {
    fn write(&mut self, _bytes: &[u8]) -> Result<(), SinkError> {
      Err(SinkError::Write {
        target: "rejecting".to_string(),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
      })
    }

    fn target(&self) -> &str {
      "rejecting"
    }
  }

  fn write_with(formatter: Box<dyn Format>) -> String {
    let sink = MemorySink::new();
    let mut writer = EventWriter::new(formatter, Box::new(sink.clone()));

    writer
      .write(&LogEvent::new(Severity::Error, "Sample Data"))
      .unwrap();

    sink.contents_string()
  }

  #[test]
  fn test_identity_round_trip() {
    assert_eq!(write_with(Box::new(PlainFormatter)), "Sample Data");
  }

  #[test]
  fn test_tagged_round_trip() {
    assert_eq!(
      write_with(Box::new(TagFormatter::new("html"))),
      "<html>Sample Data</html>"
    );
  }

  #[test]
  fn test_structured_round_trip() {
    assert_eq!(
      write_with(Box::new(JsonFormatter)),
      "{\"data\": \"Sample Data\"}"
    );
  }

  #[test]
  fn test_sink_verdict_propagates_verbatim() {
    let mut writer = EventWriter::new(Box::new(PlainFormatter), Box::new(RejectingSink));

    let result = writer.write(&LogEvent::new(Severity::Warning, "anything"));

    assert!(matches!(result, Err(SinkError::Write { .. })));
    assert_eq!(writer.target(), "rejecting");
  }
}
