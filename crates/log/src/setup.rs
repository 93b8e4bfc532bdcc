use std::path::PathBuf;

use bevy::prelude::*;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter};

pub(crate) struct LogPlugin;

/// Holds the guard of the non-blocking log writer. Dropping it would disable
/// logging to the file.
#[derive(Resource)]
struct LogFileGuard {
    #[allow(dead_code)]
    guard: WorkerGuard,
}

impl Plugin for LogPlugin {
    fn build(&self, app: &mut App) {
        let start = chrono::Local::now();
        let file_name: PathBuf = start
            .format("vanguard_%Y-%m-%d_%H-%M-%S.log")
            .to_string()
            .into();
        let file_appender = tracing_appender::rolling::never("logs", file_name);
        let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

        let collector = tracing_subscriber::registry()
            .with(
                EnvFilter::builder()
                    // defaults to INFO if RUST_LOG is not set
                    .with_default_directive(Level::INFO.into())
                    .from_env_lossy(),
            )
            .with(fmt::layer().with_writer(std::io::stdout))
            .with(fmt::layer().with_ansi(false).with_writer(file_writer));
        tracing::subscriber::set_global_default(collector)
            .expect("Unable to set a global log collector");

        app.insert_resource(LogFileGuard { guard });
    }
}
