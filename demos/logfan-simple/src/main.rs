use tracing::info;

use logfan::dispatcher::Dispatcher;
use logfan::event::{LogEvent, Severity};
use logfan::formatter::JsonFormatter;
use logfan::handler::HandlerChain;
use logfan::sink::{ConsoleSink, FileSink, MemorySink};
use logfan::subscriber::{ErrorSubscriber, SubscriberSet, WarningSubscriber, WriterSubscriber};
use logfan::writer::EventWriter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
  // Make the pipeline's internal diagnostics visible.
  tracing_subscriber::fmt()
    .with_max_level(tracing::Level::DEBUG)
    .init();

  info!("logfan quick start");

  // Fan-out side: console warnings, a file-backed error log, a JSON tap.
  let tap = MemorySink::new();
  let mut subscribers = SubscriberSet::new();
  subscribers.register(Box::new(WarningSubscriber::new(Box::new(
    ConsoleSink::new(),
  ))));
  subscribers.register(Box::new(ErrorSubscriber::new(Box::new(FileSink::new(
    "logs/errors.log",
  )?))));
  subscribers.register(Box::new(WriterSubscriber::new(EventWriter::new(
    Box::new(JsonFormatter),
    Box::new(tap.clone()),
  ))));

  // Escalation side: the conventional chain over its own error log.
  let chain = HandlerChain::standard(Box::new(FileSink::new("logs/chain-errors.log")?));

  let mut dispatcher = Dispatcher::new(subscribers, chain);

  let report = dispatcher.warning("disk usage at 80%");
  println!("warning clean: {}", report.is_clean());

  let report = dispatcher.error("query failed, retrying");
  println!("error clean: {}", report.is_clean());

  let report = dispatcher.fatal("core dump");
  println!("fatal aborted: {:?}", report.aborted_reason());

  // Unclassified labels fold to Unknown and still route.
  let event = LogEvent::new(Severity::from_label("notice"), "unclassified input");
  let report = dispatcher.emit(&event);
  println!("unknown aborted: {:?}", report.aborted_reason());

  // The abort was scoped to that one event; the next one routes normally.
  let report = dispatcher.warning("back to normal");
  println!("after abort clean: {}", report.is_clean());

  println!("json tap captured: {}", tap.contents_string());

  Ok(())
}
