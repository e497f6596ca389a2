#[cfg(test)]
mod __test__ {

  use std::sync::{Arc, Mutex};

  use crate::dispatcher::Dispatcher;
  use crate::error::SinkError;
  use crate::event::{LogEvent, Severity};
  use crate::handler::{ErrorWriter, FatalDetector, HandlerChain, UnknownDetector, WarningPrinter};
  use crate::sink::MemorySink;
  use crate::subscriber::{Subscribe, SubscriberSet};

  /// Logs every notification it receives, tagged with the callback slot.
  struct Seen {
    log: Arc<Mutex<Vec<String>>>,
  }

  impl Subscribe for Seen {
    fn name(&self) -> &'static str {
      "seen"
    }

    fn on_warning(&mut self, message: &str) -> Result<(), SinkError> {
      self.log.lock().unwrap().push(format!("warning:{}", message));
      Ok(())
    }

    fn on_error(&mut self, message: &str) -> Result<(), SinkError> {
      self.log.lock().unwrap().push(format!("error:{}", message));
      Ok(())
    }

    fn on_fatal(&mut self, message: &str) -> Result<(), SinkError> {
      self.log.lock().unwrap().push(format!("fatal:{}", message));
      Ok(())
    }
  }

  /// The conventional setup: one observing subscriber, the standard chain
  /// order with memory sinks in place of file/console.
  fn scenario() -> (Dispatcher, MemorySink, MemorySink, Arc<Mutex<Vec<String>>>) {
    let errors = MemorySink::new();
    let warnings = MemorySink::new();
    let log = Arc::new(Mutex::new(Vec::new()));

    let mut subscribers = SubscriberSet::new();
    subscribers.register(Box::new(Seen {
      log: Arc::clone(&log),
    }));

    let mut chain = HandlerChain::new();
    chain.push(Box::new(FatalDetector));
    chain.push(Box::new(ErrorWriter::new(Box::new(errors.clone()))));
    chain.push(Box::new(WarningPrinter::new(Box::new(warnings.clone()))));
    chain.push(Box::new(UnknownDetector));

    (Dispatcher::new(subscribers, chain), errors, warnings, log)
  }

  #[test]
  fn test_warning_completes_and_prints() {
    let (mut dispatcher, _errors, warnings, _log) = scenario();

    let report = dispatcher.emit(&LogEvent::new(Severity::Warning, "disk at 80%"));

    assert!(report.is_clean());
    assert_eq!(warnings.contents_string(), "Warning: disk at 80%\n");
  }

  #[test]
  fn test_fatal_aborts_and_error_sink_stays_untouched() {
    let (mut dispatcher, errors, _warnings, _log) = scenario();

    let report = dispatcher.emit(&LogEvent::new(Severity::Fatal, "core dump"));

    let reason = report.aborted_reason().unwrap();
    assert!(reason.contains("core dump"));
    assert!(errors.contents().is_empty());
  }

  #[test]
  fn test_fanout_runs_even_when_chain_aborts() {
    let (mut dispatcher, _errors, _warnings, log) = scenario();

    dispatcher.emit(&LogEvent::new(Severity::Fatal, "core dump"));

    assert_eq!(*log.lock().unwrap(), vec!["fatal:core dump"]);
  }

  #[test]
  fn test_no_cross_event_leakage_after_abort() {
    let (mut dispatcher, _errors, warnings, _log) = scenario();

    let first = dispatcher.emit(&LogEvent::new(Severity::Unknown, "garbled"));
    assert!(first.aborted_reason().is_some());

    let second = dispatcher.emit(&LogEvent::new(Severity::Warning, "recovered"));
    assert!(second.is_clean());
    assert_eq!(warnings.contents_string(), "Warning: recovered\n");
  }

  #[test]
  fn test_unknown_notifies_no_subscriber() {
    let (mut dispatcher, _errors, _warnings, log) = scenario();

    dispatcher.emit(&LogEvent::new(Severity::Unknown, "garbled"));

    assert!(log.lock().unwrap().is_empty());
  }

  #[test]
  fn test_convenience_emitters() {
    let (mut dispatcher, errors, warnings, log) = scenario();

    assert!(dispatcher.warning("This is a warning.").is_clean());
    assert!(dispatcher.error("This is an error.").is_clean());
    assert!(dispatcher.fatal("This is a fatal error.").aborted_reason().is_some());
    assert!(dispatcher
      .unknown("This is an unknown message.")
      .aborted_reason()
      .is_some());

    assert_eq!(warnings.contents_string(), "Warning: This is a warning.\n");
    assert_eq!(errors.contents_string(), "Error: This is an error.\n");
    // The unknown event fires no subscriber callback.
    assert_eq!(log.lock().unwrap().len(), 3);
  }

  #[test]
  fn test_report_from_label_routing() {
    let (mut dispatcher, _errors, warnings, _log) = scenario();

    let severity = Severity::from_label("warn");
    let report = dispatcher.emit(&LogEvent::new(severity, "from a label"));

    assert!(report.is_clean());
    assert_eq!(warnings.contents_string(), "Warning: from a label\n");
  }
}
