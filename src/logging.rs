//! Log4rs logging for the client. Stdout belongs to the ranking surface so
//! console logging is written to stderr alongside the rolling log files

use crate::error::LoggingError;
use log::LevelFilter;
use log4rs::{
    append::{
        console::{ConsoleAppender, Target},
        rolling_file::{
            policy::compound::{
                roll::fixed_window::FixedWindowRoller, trigger::size::SizeTrigger, CompoundPolicy,
            },
            RollingFileAppender,
        },
    },
    config::{Appender, Logger, Root},
    encode::pattern::PatternEncoder,
    init_config, Config,
};

/// The pattern to use when logging
const LOGGING_PATTERN: &str = "[{d} {h({l})} {M}] {m}{n}";
/// Max logging file size before rolling over to the next log file. (5mb)
const LOGGING_MAX_SIZE: u64 = 1024 * 1024 * 5;
/// The max number of logging files to keep before deleting
const LOGGING_MAX_FILES: u32 = 8;
/// The module to enable logging for
const LOGGING_MODULE: &str = "ranking_sync";

const STDERR_APPENDER: &str = "stderr";
const FILE_APPENDER: &str = "file";

/// Initializes logging for the client module at `logging_level` writing
/// log files into the `logging_path` directory. Nothing is initialized
/// when the level is [LevelFilter::Off]
pub fn setup(logging_level: LevelFilter, logging_path: &str) -> Result<(), LoggingError> {
    if logging_level == LevelFilter::Off {
        return Ok(());
    }

    let config = create_config(logging_level, logging_path)?;
    init_config(config)?;
    Ok(())
}

/// Creates the logging config with a stderr appender and a size rolled
/// file appender both used by the client module logger
fn create_config(logging_level: LevelFilter, logging_path: &str) -> Result<Config, LoggingError> {
    const APPENDERS: [&str; 2] = [STDERR_APPENDER, FILE_APPENDER];

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(LOGGING_PATTERN)))
        .build();
    let file = create_file_appender(logging_path)?;

    Config::builder()
        .appender(Appender::builder().build(STDERR_APPENDER, Box::new(stderr)))
        .appender(Appender::builder().build(FILE_APPENDER, Box::new(file)))
        .logger(
            Logger::builder()
                .appenders(APPENDERS)
                .additive(false)
                .build(LOGGING_MODULE, logging_level),
        )
        .build(
            Root::builder()
                .appenders(APPENDERS)
                .build(LevelFilter::Warn),
        )
        .map_err(|err| LoggingError::Config(err.to_string()))
}

/// Creates the appender writing to `log.log` within the logging path,
/// rolling over into numbered files once the size limit is reached
fn create_file_appender(logging_path: &str) -> Result<RollingFileAppender, LoggingError> {
    let file_pattern = format!("{}/log-{{}}.log", logging_path);
    let latest_path = format!("{}/log.log", logging_path);

    let roller = FixedWindowRoller::builder()
        .build(&file_pattern, LOGGING_MAX_FILES)
        .map_err(|err| LoggingError::Roller(err.to_string()))?;
    let policy = CompoundPolicy::new(
        Box::new(SizeTrigger::new(LOGGING_MAX_SIZE)),
        Box::new(roller),
    );

    let appender = RollingFileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOGGING_PATTERN)))
        .build(latest_path, Box::new(policy))?;
    Ok(appender)
}
