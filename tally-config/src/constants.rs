//! Names of the environment variables and files the loader consults.

/// Path to a TOML or JSON config file.
pub const CONFIG_PATH_ENV: &str = "TALLY_CONFIG_PATH";

/// Inline JSON config.
pub const CONFIG_JSON_ENV: &str = "TALLY_CONFIG_JSON";

/// Files checked in the working directory when no variable is set.
pub const DEFAULT_CONFIG_FILES: &[&str] = &[
    "tally.toml",
    "tally.json",
    "config/tally.toml",
    "config/tally.json",
];

/// Upper bound for `display.total_precision`.
pub const MAX_TOTAL_PRECISION: usize = 9;
