mod __test__;

use crate::event::{LogEvent, Severity};
use crate::handler::{HandlerChain, ProcessReport};
use crate::subscriber::{NotifyReport, SubscriberSet};

/// Top-level façade over the two pipelines.
///
/// One [`Dispatcher::emit`] fans the event out to the subscriber set first,
/// then walks the handler chain, so passive observers see every event even
/// when the chain aborts on it. Both outcomes come back to the caller;
/// nothing here panics or terminates the process. A caller that drops the
/// report silently loses visibility into escalations and partial failures.
pub struct Dispatcher {
  subscribers: SubscriberSet,
  chain: HandlerChain,
}

/// What one `emit` produced: the fan-out report and the chain outcome.
#[derive(Debug)]
pub struct EmitReport {
  pub notify: NotifyReport,
  pub chain: ProcessReport,
}

impl EmitReport {
  /// True when every subscriber succeeded and the chain ran to completion
  /// without handler failures.
  pub fn is_clean(&self) -> bool {
    self.notify.is_clean() && self.chain.completed() && self.chain.failures.is_empty()
  }

  /// The escalation reason, when the chain aborted on this event.
  pub fn aborted_reason(&self) -> Option<&str> {
    self.chain.aborted_reason()
  }
}

impl Dispatcher {
  pub fn new(subscribers: SubscriberSet, chain: HandlerChain) -> Self {
    Self { subscribers, chain }
  }

  /// Routes one event: subscribers first, handler chain second.
  pub fn emit(&mut self, event: &LogEvent) -> EmitReport {
    let notify = self.subscribers.notify(event);
    let chain = self.chain.process(event);
    EmitReport { notify, chain }
  }

  /// Emits a warning-severity event built from `message`.
  pub fn warning(&mut self, message: impl Into<String>) -> EmitReport {
    self.emit(&LogEvent::new(Severity::Warning, message))
  }

  /// Emits an error-severity event built from `message`.
  pub fn error(&mut self, message: impl Into<String>) -> EmitReport {
    self.emit(&LogEvent::new(Severity::Error, message))
  }

  /// Emits a fatal-severity event built from `message`.
  pub fn fatal(&mut self, message: impl Into<String>) -> EmitReport {
    self.emit(&LogEvent::new(Severity::Fatal, message))
  }

  /// Emits an unknown-severity event built from `message`.
  pub fn unknown(&mut self, message: impl Into<String>) -> EmitReport {
    self.emit(&LogEvent::new(Severity::Unknown, message))
  }
}
