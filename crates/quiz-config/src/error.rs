//! Errors raised while loading or consulting quizlint settings.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A TOML file or `QUIZLINT_*` variable could not be read into [`QuizConfig`](crate::QuizConfig).
    #[error("failed to load quizlint settings: {0}")]
    Load(#[from] figment::Error),

    /// A command needs a site but none was passed and `sites.default` is blank.
    #[error(
        "no quiz site given and sites.default is unset (pass a site URL or set QUIZLINT_SITES__DEFAULT)"
    )]
    NoSite,

    /// A numeric setting is below the smallest value the URL checker can run with.
    #[error("setting '{field}' must be at least {min}, found {found}")]
    TooSmall {
        field: &'static str,
        min: u64,
        found: u64,
    },
}
