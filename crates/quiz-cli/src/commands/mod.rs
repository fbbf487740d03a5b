pub mod combinations;
pub mod dispatch;
pub mod graph;
pub mod sites;
pub mod urls;
pub mod validate;

/// What a command found, for `--strict` exit codes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    Clean,
    Failures,
}

impl Outcome {
    #[must_use]
    pub const fn from_failures(has_failures: bool) -> Self {
        if has_failures {
            Self::Failures
        } else {
            Self::Clean
        }
    }
}
