
use tracing::warn;

use crate::error::SinkError;
use crate::event::{LogEvent, Severity};
use crate::sink::Sink;
use crate::writer::EventWriter;

/// Callbacks for the severities a subscriber cares about.
///
/// Each slot defaults to a no-op; implementors override the ones they are
/// interested in. A callback reports its own sink trouble through the
/// returned `Result` instead of panicking, so one subscriber's failure stays
/// contained.
pub trait Subscribe: Send {
  /// Name used in failure reports and diagnostics.
  fn name(&self) -> &'static str {
    "subscriber"
  }

  fn on_warning(&mut self, _message: &str) -> Result<(), SinkError> {
    Ok(())
  }

  fn on_error(&mut self, _message: &str) -> Result<(), SinkError> {
    Ok(())
  }

  fn on_fatal(&mut self, _message: &str) -> Result<(), SinkError> {
    Ok(())
  }
}

/// One subscriber's failure while handling a notification.
#[derive(Debug)]
pub struct SubscriberFailure {
  pub subscriber: &'static str,
  pub error: SinkError,
}

/// Outcome of one fan-out pass.
///
/// An empty failure list means every interested subscriber handled the event.
#[derive(Debug, Default)]
pub struct NotifyReport {
  pub failures: Vec<SubscriberFailure>,
}

impl NotifyReport {
  pub fn is_clean(&self) -> bool {
    self.failures.is_empty()
  }
}

/// Ordered set of subscribers notified for every event.
///
/// Subscribers are appended once and live for the lifetime of the set;
/// registration order is notification order.
#[derive(Default)]
pub struct SubscriberSet {
  subscribers: Vec<Box<dyn Subscribe>>,
}

impl SubscriberSet {
  pub fn new() -> Self {
    Self::default()
  }

  /// Appends a subscriber. No duplicate detection is performed.
  pub fn register(&mut self, subscriber: Box<dyn Subscribe>) {
    self.subscribers.push(subscriber);
  }

  pub fn len(&self) -> usize {
    self.subscribers.len()
  }

  pub fn is_empty(&self) -> bool {
    self.subscribers.is_empty()
  }

  /// Notifies every subscriber of `event`, in registration order.
  ///
  /// The severity selects which callback fires; [`Severity::Unknown`] fires
  /// none of the three. A failing subscriber is recorded in the report and
  /// does not stop the fan-out to later subscribers.
  pub fn notify(&mut self, event: &LogEvent) -> NotifyReport {
    let mut report = NotifyReport::default();

    for subscriber in self.subscribers.iter_mut() {
      let outcome = match event.severity() {
        Severity::Warning => subscriber.on_warning(event.message()),
        Severity::Error => subscriber.on_error(event.message()),
        Severity::Fatal => subscriber.on_fatal(event.message()),
        Severity::Unknown => Ok(()),
      };

      if let Err(error) = outcome {
        warn!(
          subscriber = subscriber.name(),
          %error,
          "subscriber failed, continuing fan-out"
        );
        report.failures.push(SubscriberFailure {
          subscriber: subscriber.name(),
          error,
        });
      }
    }

    report
  }
}

/// Appends `Warning: <message>` lines to its sink.
pub struct WarningSubscriber {
  sink: Box<dyn Sink>,
}

impl WarningSubscriber {
  pub fn new(sink: Box<dyn Sink>) -> Self {
    Self { sink }
  }
}

impl Subscribe for WarningSubscriber {
  fn name(&self) -> &'static str {
    "warning"
  }

  fn on_warning(&mut self, message: &str) -> Result<(), SinkError> {
    self.sink.write(format!("Warning: {}\n", message).as_bytes())
  }
}

/// Appends `Error: <message>` lines to its sink.
pub struct ErrorSubscriber {
  sink: Box<dyn Sink>,
}

impl ErrorSubscriber {
  pub fn new(sink: Box<dyn Sink>) -> Self {
    Self { sink }
  }
}

impl Subscribe for ErrorSubscriber {
  fn name(&self) -> &'static str {
    "error"
  }

  fn on_error(&mut self, message: &str) -> Result<(), SinkError> {
    self.sink.write(format!("Error: {}\n", message).as_bytes())
  }
}

/// Appends `Fatal: <message>` lines to its sink.
pub struct FatalSubscriber {
  sink: Box<dyn Sink>,
}

impl FatalSubscriber {
  pub fn new(sink: Box<dyn Sink>) -> Self {
    Self { sink }
  }
}

impl Subscribe for FatalSubscriber {
  fn name(&self) -> &'static str {
    "fatal"
  }

  fn on_fatal(&mut self, message: &str) -> Result<(), SinkError> {
    self.sink.write(format!("Fatal: {}\n", message).as_bytes())
  }
}

/// Routes every classified event through a bound [`EventWriter`].
///
/// Useful as a tap: whatever formatter/sink pair the writer was built with
/// sees each warning, error and fatal message.
pub struct WriterSubscriber {
  writer: EventWriter,
}

impl WriterSubscriber {
  pub fn new(writer: EventWriter) -> Self {
    Self { writer }
  }

  fn forward(&mut self, severity: Severity, message: &str) -> Result<(), SinkError> {
    self.writer.write(&LogEvent::new(severity, message))
  }
}

impl Subscribe for WriterSubscriber {
  fn name(&self) -> &'static str {
    "writer"
  }

  fn on_warning(&mut self, message: &str) -> Result<(), SinkError> {
    self.forward(Severity::Warning, message)
  }

  fn on_error(&mut self, message: &str) -> Result<(), SinkError> {
    self.forward(Severity::Error, message)
  }

  fn on_fatal(&mut self, message: &str) -> Result<(), SinkError> {
    self.forward(Severity::Fatal, message)
  }
}
