use std::any::Any;

use tracing_forest::ForestLayer;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};

/// Keeps the profiling subscriber alive. Traces are flushed when it drops.
#[must_use = "profiling output is flushed when the guard is dropped"]
pub struct LoggerGuard {
    _profile: Option<Box<dyn Any>>,
}

/// Initializes the global tracing subscriber.
///
/// The default `Level` is `INFO`. It can be overridden with `RUST_LOG`. Hold
/// the returned guard until the program exits.
pub fn init_logger() -> LoggerGuard {
    if cfg!(feature = "profile") || cfg!(feature = "perfetto") {
        use tracing_profile::init_tracing;
        let guard = init_tracing().expect("failed to initialize tracing");
        LoggerGuard {
            _profile: Some(Box::new(guard)),
        }
    } else {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        // Tests may call this more than once.
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(ForestLayer::default())
            .try_init();
        LoggerGuard { _profile: None }
    }
}
