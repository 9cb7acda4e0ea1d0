//! Log subscriber setup.
//!
//! Diagnostics go to standard error. Standard output is reserved for the
//! window id printed with `-x`, which embedding parents read.

use tracing::Subscriber;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_DIRECTIVE: &str = "skiff=info";

/// `RUST_LOG` plus `directive`, or [`DEFAULT_DIRECTIVE`] if it does not parse.
pub fn filter(directive: &str) -> EnvFilter {
    let directive = directive
        .parse::<Directive>()
        .or_else(|_| DEFAULT_DIRECTIVE.parse::<Directive>());
    match directive {
        Ok(d) => EnvFilter::from_default_env().add_directive(d),
        Err(_) => EnvFilter::from_default_env(),
    }
}

/// Formatting subscriber writing every record to `writer`.
pub fn subscriber<W>(directive: &str, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter(directive))
        .with_writer(writer)
        .finish()
}

/// Install the process-wide subscriber on standard error.
pub fn init(directive: &str) {
    subscriber(directive, std::io::stderr).init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Capture {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Capture {
        type Writer = Capture;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn records_reach_the_given_writer() {
        let capture = Capture::default();
        tracing::subscriber::with_default(subscriber("skiff=info", capture.clone()), || {
            tracing::error!(target: "skiff_platform::spawn", "execvp /missing/helper failed");
            tracing::debug!(target: "skiff_platform::spawn", "below the filter");
        });

        let text = capture.text();
        assert!(text.contains("execvp /missing/helper failed"));
        assert!(!text.contains("below the filter"));
    }

    #[test]
    fn bad_directive_falls_back_to_default() {
        let capture = Capture::default();
        tracing::subscriber::with_default(subscriber("skiff=loudest", capture.clone()), || {
            tracing::info!(target: "skiff_session", "session info");
        });
        assert!(capture.text().contains("session info"));
    }
}
