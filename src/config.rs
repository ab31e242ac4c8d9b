pub const PRINT_TOKENS_VAR: &str = "GOFI_PRINT_TOKENS";
pub const DUMP_VARS_VAR: &str = "GOFI_DUMP_VARS";
pub const NO_TIMING_VAR: &str = "GOFI_NO_TIMING";
pub const LOG_VAR: &str = "GOFI_LOG";

/// Presentation options for a CLI run. The interpreter itself takes no
/// configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    pub print_tokens: bool,
    pub dump_variables: bool,
    pub report_timing: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            print_tokens: false,
            dump_variables: false,
            report_timing: true,
        }
    }
}

impl RunConfig {
    /// Builds the options from resolved CLI flags. The CLI fills unset
    /// flags from the environment variables above.
    pub fn from_flags(print_tokens: bool, dump_variables: bool, no_timing: bool) -> Self {
        Self {
            print_tokens,
            dump_variables,
            report_timing: !no_timing,
        }
    }
}

/// Default log filter for the given `-v` count.
pub fn log_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
