use thiserror::Error;

/// Failures surfaced by sinks.
///
/// [`SinkError::Open`] is fatal to constructing the component that needed the
/// sink and propagates out of the factory immediately. [`SinkError::Write`]
/// is recoverable at the call site: the responsible handler or subscriber
/// reports it and the rest of the pipeline keeps running.
///
/// An escalation is not an error. It is a structured outcome
/// ([`crate::handler::HandleOutcome::Escalate`]) and never travels through
/// this type.
#[derive(Debug, Error)]
pub enum SinkError {
  /// The sink target could not be opened or created.
  #[error("unable to open {path}: {source}")]
  Open {
    path: String,
    #[source]
    source: std::io::Error,
  },

  /// The sink rejected a write after successful acquisition.
  #[error("write to {target} failed: {source}")]
  Write {
    target: String,
    #[source]
    source: std::io::Error,
  },
}
