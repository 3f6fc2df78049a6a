use super::Quoting;
use anyhow::{Result, ensure};
use std::{env::var_os, ffi::OsString, path::PathBuf};

pub const SHELL_VAR: &str = "WITH_DIRENV_SHELL";
pub const QUOTE_VAR: &str = "WITH_DIRENV_QUOTE";
pub const ERREXIT_VAR: &str = "WITH_DIRENV_ERREXIT";

pub const DEFAULT_SHELL: &str = "/bin/sh";

/// Settings that cannot be passed on the command line, because every argument belongs to the
/// relayed command
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub shell: PathBuf,
    pub quoting: Quoting,
    pub errexit: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            shell: PathBuf::from(DEFAULT_SHELL),
            quoting: Quoting::Verbatim,
            errexit: false,
        }
    }
}

impl Config {
    /// Read the `WITH_DIRENV_*` variables. They are only read, so they are still visible to the
    /// relayed command.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| var_os(key))
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<OsString>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(shell) = lookup(SHELL_VAR) {
            ensure!(!shell.is_empty(), "`{SHELL_VAR}` is set but empty");
            config.shell = PathBuf::from(shell);
        }
        if enabled(lookup(QUOTE_VAR)) {
            config.quoting = Quoting::Posix;
        }
        config.errexit = enabled(lookup(ERREXIT_VAR));
        Ok(config)
    }
}

fn enabled(value: Option<OsString>) -> bool {
    value.is_some_and(|value| value != "0")
}
