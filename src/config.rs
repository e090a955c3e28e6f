//! Settings for the `seqradix` binary, read from environment variables.

use std::env;
use std::fmt;
use std::str::FromStr;

use flexi_logger::{colored_with_thread, FlexiLoggerError, Logger, LoggerHandle, WriteMode};

use seqradix::matching::ParseStrategyError;
use seqradix::Strategy;

/// Selects the matching strategy, `ordered` or `unordered`
pub const STRATEGY_VAR: &str = "SEQRADIX_STRATEGY";

/// Selects the output format, `outline` or `html`
pub const FORMAT_VAR: &str = "SEQRADIX_FORMAT";

/// flexi_logger spec string, e.g. `info` or `debug, seqradix=trace`
pub const LOG_VAR: &str = "SEQRADIX_LOG";

/// Log spec used when [`LOG_VAR`] is unset
pub const DEFAULT_LOG_SPEC: &str = "info";

#[derive(Debug)]
pub enum Error {
    /// Strategy name is neither `ordered` nor `unordered`
    UnknownStrategy(String),

    /// Format name is neither `outline` nor `html`
    UnknownFormat(String),

    /// The logger rejected its spec or could not start
    Logger(FlexiLoggerError),
}

/// How the finished tree is printed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    /// Indented plain text, one node per line
    #[default]
    Outline,

    /// Nested `<ul>` lists
    Html,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub strategy: Strategy,
    pub format: Format,
    pub log_spec: String,
}

impl Config {
    /// Reads the configuration from the process environment
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name
    /// to its value if set. Unset variables fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let strategy = match lookup(STRATEGY_VAR) {
            Some(s) => s.parse()?,
            None => Strategy::default(),
        };
        let format = match lookup(FORMAT_VAR) {
            Some(s) => s.parse()?,
            None => Format::default(),
        };
        let log_spec = lookup(LOG_VAR)
            .unwrap_or_else(|| DEFAULT_LOG_SPEC.to_string());

        Ok(Self {
            strategy,
            format,
            log_spec,
        })
    }

    /// Starts logging to stderr, keeping stdout for the rendered tree.
    ///
    /// The returned handle must be held for as long as logging is needed,
    /// otherwise the logger is dropped.
    pub fn start_logger(&self) -> Result<LoggerHandle, Error> {
        let handle = Logger::try_with_str(&self.log_spec)?
            .log_to_stderr()
            .write_mode(WriteMode::Async)
            .format(colored_with_thread)
            .use_utc()
            .start()?;
        Ok(handle)
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "outline" => Ok(Format::Outline),
            "html" => Ok(Format::Html),
            _ => Err(Error::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::UnknownStrategy(s) => {
                write!(f, "{}: unknown strategy {:?}, expected ordered or unordered", STRATEGY_VAR, s)
            },
            Error::UnknownFormat(s) => {
                write!(f, "{}: unknown format {:?}, expected outline or html", FORMAT_VAR, s)
            },
            Error::Logger(e) => write!(f, "logger error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<ParseStrategyError> for Error {
    fn from(e: ParseStrategyError) -> Self {
        Error::UnknownStrategy(e.0)
    }
}

impl From<FlexiLoggerError> for Error {
    fn from(e: FlexiLoggerError) -> Self {
        Error::Logger(e)
    }
}
