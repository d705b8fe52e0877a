use std::fmt;
use std::path::PathBuf;

#[derive(Debug, PartialEq, Eq)]
pub enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidSeed { raw: String },
    InvalidCatalog { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidSeed { raw } => write!(f, "invalid --seed value: {raw}"),
            ArgsError::InvalidCatalog { raw } => write!(f, "invalid --catalog value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

pub fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  quiz [--team <name>] [--topics <id,id,..>] [--catalog <path>] [--seed <u64>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  built-in sample catalog, all topics, random selection");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_TEAM, QUIZ_TOPICS, QUIZ_CATALOG, QUIZ_SEED, RUST_LOG");
}

/// Startup configuration, from environment variables overridden by flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub team: String,
    /// `None` means every catalog topic is allowed.
    pub topics: Option<Vec<String>>,
    /// `None` means the built-in sample catalog.
    pub catalog: Option<PathBuf>,
    pub seed: Option<u64>,
    pub show_help: bool,
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn split_topics(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_seed(raw: String) -> Result<u64, ArgsError> {
    raw.trim().parse().map_err(|_| ArgsError::InvalidSeed { raw })
}

impl Config {
    /// Read `QUIZ_*` environment variables, then apply command-line flags.
    ///
    /// # Errors
    ///
    /// Returns `ArgsError` for unknown flags, missing values, or unparsable values.
    pub fn load(args: impl IntoIterator<Item = String>) -> Result<Self, ArgsError> {
        Self::from_sources(|key| std::env::var(key).ok(), args)
    }

    pub(crate) fn from_sources(
        env: impl Fn(&str) -> Option<String>,
        args: impl IntoIterator<Item = String>,
    ) -> Result<Self, ArgsError> {
        let mut config = Self {
            team: env("QUIZ_TEAM").unwrap_or_default(),
            topics: env("QUIZ_TOPICS").map(|raw| split_topics(&raw)),
            catalog: env("QUIZ_CATALOG")
                .filter(|raw| !raw.trim().is_empty())
                .map(PathBuf::from),
            seed: env("QUIZ_SEED").map(parse_seed).transpose()?,
            show_help: false,
        };

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--team" => config.team = require_value(&mut args, "--team")?,
                "--topics" => {
                    let value = require_value(&mut args, "--topics")?;
                    config.topics = Some(split_topics(&value));
                }
                "--catalog" => {
                    let value = require_value(&mut args, "--catalog")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidCatalog { raw: value });
                    }
                    config.catalog = Some(PathBuf::from(value));
                }
                "--seed" => config.seed = Some(parse_seed(require_value(&mut args, "--seed")?)?),
                "--help" | "-h" => config.show_help = true,
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(config)
    }
}
