
use smallvec::SmallVec;
use tracing::warn;

use crate::error::SinkError;
use crate::event::{LogEvent, Severity};
use crate::sink::{ConsoleSink, Sink};

/// A handler's verdict on one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandleOutcome {
  /// The event is outside this handler's severity interest.
  Ignored,
  /// The handler acted on the event; the walk continues.
  Handled,
  /// Stop the chain for this event and report the reason to the caller.
  Escalate(String),
}

/// A single link in the handler chain.
///
/// Handlers decide purely from the event severity whether they apply, and
/// are immutable after construction apart from their owned sinks. An `Err`
/// means the handler's own resource failed, which is distinct from an
/// escalation: the chain records it and keeps walking.
pub trait Handle: Send {
  /// Name used in failure reports and diagnostics.
  fn name(&self) -> &'static str;

  fn handle(&mut self, event: &LogEvent) -> Result<HandleOutcome, SinkError>;
}

/// Terminal state of one [`HandlerChain::process`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainOutcome {
  /// Every handler in the chain was offered the event.
  Completed,
  /// A handler escalated; the remaining handlers were skipped for this
  /// event.
  Aborted(String),
}

/// One handler's I/O failure while acting on an event.
#[derive(Debug)]
pub struct HandlerFailure {
  pub handler: &'static str,
  pub error: SinkError,
}

/// Outcome of one `process` call plus the I/O failures collected on the way.
#[derive(Debug)]
pub struct ProcessReport {
  pub outcome: ChainOutcome,
  pub failures: Vec<HandlerFailure>,
}

impl ProcessReport {
  pub fn completed(&self) -> bool {
    matches!(self.outcome, ChainOutcome::Completed)
  }

  pub fn aborted_reason(&self) -> Option<&str> {
    match &self.outcome {
      ChainOutcome::Aborted(reason) => Some(reason),
      ChainOutcome::Completed => None,
    }
  }
}

/// Ordered, fixed sequence of handlers every event is offered to.
///
/// This is a filter chain, not a first-match chain: every handler sees every
/// event unless one of them escalates, and each handler filters by its own
/// severity interest. Order is fixed at construction and never reordered at
/// runtime.
#[derive(Default)]
pub struct HandlerChain {
  handlers: SmallVec<[Box<dyn Handle>; 4]>,
}

impl HandlerChain {
  pub fn new() -> Self {
    Self::default()
  }

  /// The conventional chain: fatal detection first, then the error writer
  /// over `error_sink`, the console warning printer, and the unknown
  /// detector last.
  pub fn standard(error_sink: Box<dyn Sink>) -> Self {
    let mut chain = Self::new();
    chain.push(Box::new(FatalDetector));
    chain.push(Box::new(ErrorWriter::new(error_sink)));
    chain.push(Box::new(WarningPrinter::new(Box::new(ConsoleSink::new()))));
    chain.push(Box::new(UnknownDetector));
    chain
  }

  /// Appends a handler. Chain order is processing order.
  pub fn push(&mut self, handler: Box<dyn Handle>) {
    self.handlers.push(handler);
  }

  pub fn len(&self) -> usize {
    self.handlers.len()
  }

  pub fn is_empty(&self) -> bool {
    self.handlers.is_empty()
  }

  /// Offers `event` to each handler in chain order.
  ///
  /// An escalation stops the walk for this event only and surfaces as
  /// [`ChainOutcome::Aborted`]; the chain stays usable for the next event.
  /// Handler I/O failures are collected in the report and never stop the
  /// walk.
  pub fn process(&mut self, event: &LogEvent) -> ProcessReport {
    let mut failures = Vec::new();

    for handler in self.handlers.iter_mut() {
      match handler.handle(event) {
        Ok(HandleOutcome::Escalate(reason)) => {
          return ProcessReport {
            outcome: ChainOutcome::Aborted(reason),
            failures,
          };
        },
        Ok(_) => {},
        Err(error) => {
          warn!(
            handler = handler.name(),
            %error,
            "handler failed, continuing chain"
          );
          failures.push(HandlerFailure {
            handler: handler.name(),
            error,
          });
        },
      }
    }

    ProcessReport {
      outcome: ChainOutcome::Completed,
      failures,
    }
  }
}

/// Escalates every fatal event instead of performing local I/O.
pub struct FatalDetector;

impl Handle for FatalDetector {
  fn name(&self) -> &'static str {
    "fatal-detector"
  }

  fn handle(&mut self, event: &LogEvent) -> Result<HandleOutcome, SinkError> {
    if event.severity() != Severity::Fatal {
      return Ok(HandleOutcome::Ignored);
    }
    Ok(HandleOutcome::Escalate(format!("fatal: {}", event.message())))
  }
}

/// Appends `Error: <message>` lines to its bound sink.
pub struct ErrorWriter {
  sink: Box<dyn Sink>,
}

impl ErrorWriter {
  pub fn new(sink: Box<dyn Sink>) -> Self {
    Self { sink }
  }
}

impl Handle for ErrorWriter {
  fn name(&self) -> &'static str {
    "error-writer"
  }

  fn handle(&mut self, event: &LogEvent) -> Result<HandleOutcome, SinkError> {
    if event.severity() != Severity::Error {
      return Ok(HandleOutcome::Ignored);
    }
    self
      .sink
      .write(format!("Error: {}\n", event.message()).as_bytes())?;
    Ok(HandleOutcome::Handled)
  }
}

/// Prints `Warning: <message>` lines to a console-like sink.
pub struct WarningPrinter {
  sink: Box<dyn Sink>,
}

impl WarningPrinter {
  pub fn new(sink: Box<dyn Sink>) -> Self {
    Self { sink }
  }
}

impl Handle for WarningPrinter {
  fn name(&self) -> &'static str {
    "warning-printer"
  }

  fn handle(&mut self, event: &LogEvent) -> Result<HandleOutcome, SinkError> {
    if event.severity() != Severity::Warning {
      return Ok(HandleOutcome::Ignored);
    }
    self
      .sink
      .write(format!("Warning: {}\n", event.message()).as_bytes())?;
    Ok(HandleOutcome::Handled)
  }
}

/// Escalates events that could not be classified.
///
/// An unrecognized severity is itself an anomaly worth halting on, so this
/// detector sits last in the conventional chain.
pub struct UnknownDetector;

impl Handle for UnknownDetector {
  fn name(&self) -> &'static str {
    "unknown-detector"
  }

  fn handle(&mut self, event: &LogEvent) -> Result<HandleOutcome, SinkError> {
    if event.severity() != Severity::Unknown {
      return Ok(HandleOutcome::Ignored);
    }
    Ok(HandleOutcome::Escalate(format!(
      "unrecognized severity: {}",
      event.message()
    )))
  }
}
