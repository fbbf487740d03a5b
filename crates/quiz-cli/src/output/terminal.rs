//! What the attached terminal can show, decided once per run.

use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat};

/// Below this many columns the validate table is left unwrapped.
const MIN_TABLE_WIDTH: usize = 40;

static TERMINAL: OnceLock<Terminal> = OnceLock::new();

/// Facts about the process environment the display settings depend on.
#[derive(Clone, Debug, Default)]
pub struct Surroundings {
    pub stdout_is_tty: bool,
    pub stderr_is_tty: bool,
    pub no_color: bool,
    pub columns: Option<String>,
}

impl Surroundings {
    #[must_use]
    pub fn capture() -> Self {
        Self {
            stdout_is_tty: std::io::stdout().is_terminal(),
            stderr_is_tty: std::io::stderr().is_terminal(),
            no_color: std::env::var_os("NO_COLOR").is_some(),
            columns: std::env::var("COLUMNS").ok(),
        }
    }
}

/// Display settings for validation tables and site-loading spinners.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Terminal {
    /// Paint status, severity and HTTP code cells.
    pub paint_status: bool,
    /// Draw `loading <site>` spinners on stderr.
    pub spinners: bool,
    /// Width tables are fitted into.
    pub width: Option<usize>,
}

impl Terminal {
    #[must_use]
    pub fn decide(flags: &GlobalFlags, env: &Surroundings) -> Self {
        let tabular = flags.format == OutputFormat::Table;
        let paint_status = tabular
            && match flags.color {
                ColorMode::Always => true,
                ColorMode::Never => false,
                ColorMode::Auto => env.stdout_is_tty && !env.no_color,
            };

        // Debug logs share stderr with the spinner.
        let spinners = env.stderr_is_tty && !flags.quiet && !flags.verbose;

        let width = env
            .columns
            .as_deref()
            .and_then(|value| value.trim().parse::<usize>().ok())
            .filter(|width| *width >= MIN_TABLE_WIDTH);

        Self {
            paint_status,
            spinners,
            width,
        }
    }

    /// Record the settings for this run. Later calls keep the first value.
    pub fn install(self) {
        if TERMINAL.set(self).is_err() {
            tracing::debug!("terminal settings already installed");
        }
    }

    /// Installed settings, or plain output when nothing was installed.
    #[must_use]
    pub fn current() -> Self {
        TERMINAL.get().copied().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn flags(format: OutputFormat, color: ColorMode) -> GlobalFlags {
        GlobalFlags {
            format,
            color,
            quiet: false,
            verbose: false,
            strict: false,
        }
    }

    fn interactive() -> Surroundings {
        Surroundings {
            stdout_is_tty: true,
            stderr_is_tty: true,
            no_color: false,
            columns: Some("120".to_string()),
        }
    }

    #[rstest]
    #[case(OutputFormat::Table, ColorMode::Auto, true)]
    #[case(OutputFormat::Table, ColorMode::Never, false)]
    #[case(OutputFormat::Json, ColorMode::Always, false)]
    #[case(OutputFormat::Raw, ColorMode::Auto, false)]
    fn status_paint_follows_format_and_color(
        #[case] format: OutputFormat,
        #[case] color: ColorMode,
        #[case] expected: bool,
    ) {
        let terminal = Terminal::decide(&flags(format, color), &interactive());
        assert_eq!(terminal.paint_status, expected);
    }

    #[test]
    fn no_color_only_affects_auto() {
        let env = Surroundings {
            no_color: true,
            ..interactive()
        };
        assert!(!Terminal::decide(&flags(OutputFormat::Table, ColorMode::Auto), &env).paint_status);
        assert!(Terminal::decide(&flags(OutputFormat::Table, ColorMode::Always), &env).paint_status);
    }

    #[test]
    fn piped_output_gets_no_spinner_or_width() {
        let env = Surroundings {
            stderr_is_tty: false,
            columns: Some("20".to_string()),
            ..interactive()
        };
        let terminal = Terminal::decide(&flags(OutputFormat::Table, ColorMode::Auto), &env);
        assert!(!terminal.spinners);
        assert_eq!(terminal.width, None);
    }

    #[test]
    fn verbose_runs_hide_spinners() {
        let mut verbose = flags(OutputFormat::Table, ColorMode::Auto);
        verbose.verbose = true;
        let terminal = Terminal::decide(&verbose, &interactive());
        assert!(!terminal.spinners);
        assert_eq!(terminal.width, Some(120));
    }
}
