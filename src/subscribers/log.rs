//! # LogWriter - simple payload logger
//!
//! A minimal subscriber that records every payload it receives as a
//! `tracing` event at `INFO`. Use it for tests or demos.
//!
//! ## Example output
//! ```text
//! INFO fanout_channel::subscribers::log: [event] data=42
//! INFO fanout_channel::subscribers::log: [event] data="tick"
//! INFO fanout_channel::subscribers::log: [failure] err="link lost"
//! ```
//!
//! ## Example
//! ```rust
//! use std::rc::Rc;
//! use fanout_channel::{Event, EventChannel, EventChannelCore, Handler, LogWriter};
//!
//! let channel: EventChannelCore<u32> = EventChannelCore::new();
//! channel.add_handler(Handler::from_subscriber(Rc::new(LogWriter::new())));
//! let _ = channel.notify(Event::new(42));
//! ```

use std::fmt::Debug;

use crate::core::Outcome;
use crate::events::{Event, Notification};
use crate::subscribers::Subscribe;

/// Payload writer subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogWriter;

impl LogWriter {
    /// Construct a new [`LogWriter`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl<T: Debug> Subscribe<Event<T>> for LogWriter {
    fn on_event(&self, e: &Event<T>) -> Outcome {
        tracing::info!("[event] data={:?}", e.data);
        Outcome::done()
    }

    fn name(&self) -> &'static str {
        "LogWriter"
    }
}

impl<T: Debug> Subscribe<Notification<T>> for LogWriter {
    fn on_event(&self, n: &Notification<T>) -> Outcome {
        match n {
            Notification::Event(e) => {
                tracing::info!("[event] data={:?}", e.data);
            }
            Notification::Failure(err) => {
                tracing::info!("[failure] err={:?}", err.to_string());
            }
        }
        Outcome::done()
    }

    fn name(&self) -> &'static str {
        "LogWriter"
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::rc::Rc;
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::subscribers::Handler;

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Capture {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn capturing(capture: &Capture) -> impl tracing::Subscriber + Send + Sync {
        let capture = capture.clone();
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_ansi(false)
            .with_writer(move || capture.clone())
            .finish()
    }

    #[test]
    fn test_logs_data_events() {
        let capture = Capture::default();
        let h: Handler<Event<u32>> = Handler::from_subscriber(Rc::new(LogWriter::new()));
        assert_eq!(h.name(), "LogWriter");

        tracing::subscriber::with_default(capturing(&capture), || {
            assert!(matches!(h.call(&Event::new(42)), Outcome::Complete(Ok(()))));
        });
        assert!(capture.text().contains("[event] data=42"));
    }

    #[test]
    fn test_logs_failures() {
        let capture = Capture::default();
        let h: Handler<Notification<&'static str>> = Handler::from_subscriber(Rc::new(LogWriter));

        tracing::subscriber::with_default(capturing(&capture), || {
            let _ = h.call(&Notification::data("tick"));
            let _ = h.call(&Notification::failure("link lost"));
        });
        let text = capture.text();
        assert!(text.contains("[event] data=\"tick\""));
        assert!(text.contains("[failure] err=\"link lost\""));
    }
}
