use anyhow::{Context, Result};
use log::{debug, trace};
use std::{
    ffi::{OsStr, OsString},
    path::Path,
    process::{Command, ExitStatus},
};

mod command;
pub use command::{Quoting, build_shell_command, join, join_quoted, join_verbatim};

mod config;
pub use config::{Config, DEFAULT_SHELL, ERREXIT_VAR, QUOTE_VAR, SHELL_VAR};

mod exit;
pub use exit::exit_code;

const ALLOW: &str = "direnv allow;";
const EXPORT: &str = r#"eval "$(direnv export bash)";"#;

/// Wrap `command` in the direnv prelude:
///
/// ```text
/// direnv allow;
/// eval "$(direnv export bash)";
/// <command>;
/// ```
///
/// `command` is inserted as is. An empty `command` leaves an empty final statement.
#[must_use]
pub fn compose_script(command: &OsStr) -> OsString {
    let mut script = OsString::from(ALLOW);
    script.push("\n");
    script.push(EXPORT);
    script.push("\n");
    script.push(command);
    script.push(";");
    script
}

#[must_use]
pub fn relay() -> Builder {
    Builder {
        args: Vec::new(),
        config: Config::default(),
    }
}

pub struct Builder {
    args: Vec<OsString>,
    config: Config,
}

impl Builder {
    /// Append `arg` to the relayed command
    #[must_use]
    pub fn arg<S>(mut self, arg: S) -> Builder
    where
        S: AsRef<OsStr>,
    {
        self.args.push(arg.as_ref().to_owned());
        self
    }

    /// Append `args` to the relayed command
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Builder
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|arg| arg.as_ref().to_owned()));
        self
    }

    /// Replace all settings with `config`
    #[must_use]
    pub fn config(mut self, config: Config) -> Builder {
        self.config = config;
        self
    }

    /// Run the script with `shell` instead of `/bin/sh`
    #[must_use]
    pub fn shell<P>(mut self, shell: P) -> Builder
    where
        P: AsRef<Path>,
    {
        self.config.shell = shell.as_ref().to_owned();
        self
    }

    #[must_use]
    pub fn quoting(mut self, quoting: Quoting) -> Builder {
        self.config.quoting = quoting;
        self
    }

    /// Pass `-e` to the shell, so that a failing `direnv allow` stops the script
    #[must_use]
    pub fn errexit(mut self, errexit: bool) -> Builder {
        self.config.errexit = errexit;
        self
    }

    pub fn script(&self) -> Result<OsString> {
        let command = join(self.config.quoting, &self.args)?;
        Ok(compose_script(&command))
    }

    pub fn command(&self) -> Result<Command> {
        let script = self.script()?;
        Ok(build_shell_command(
            &self.config.shell,
            self.config.errexit,
            &script,
        ))
    }

    /// Run the script and wait for it. A non-zero exit is not an error; only failing to start the
    /// shell is.
    pub fn status(self) -> Result<ExitStatus> {
        // The binary has already initialized the logger, so this is a no-op there. It is for
        // library callers that have not.
        env_logger::try_init().unwrap_or_default();
        let mut command = self.command()?;
        debug!("{}: {:?}", self.config.quoting, &command);
        let status = command
            .status()
            .with_context(|| format!("failed to run `{}`", self.config.shell.display()))?;
        trace!("{status:?}");
        Ok(status)
    }
}
