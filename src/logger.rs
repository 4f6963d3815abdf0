use tracing::{
    Level,
    subscriber::{SetGlobalDefaultError, set_global_default},
};
use tracing_subscriber::{filter::Targets, layer::SubscriberExt};

/// Installs the stdout logger. Toolkit chatter is capped at `WARN`.
pub fn setup_logger(level: Level) -> Result<(), SetGlobalDefaultError> {
    let filter = Targets::new()
        .with_default(level)
        .with_target("druid", Level::WARN)
        .with_target("druid_shell", Level::WARN);

    let std_logger = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(false);

    let collector = tracing_subscriber::registry().with(std_logger).with(filter);

    set_global_default(collector)
}
