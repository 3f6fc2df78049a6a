use anyhow::{Context, Result, bail};
use std::{
    ffi::{OsStr, OsString},
    fmt::Debug,
    path::Path,
    process::{Command, Stdio},
};

/// How arguments are turned into the command segment of the script
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Quoting {
    /// Join arguments with single spaces, exactly as given. Shell metacharacters in the arguments
    /// are interpreted by the shell.
    #[default]
    Verbatim,
    /// Quote each argument for a POSIX shell before joining, so that every argument reaches the
    /// command as one literal word.
    Posix,
}

impl Quoting {
    fn as_str(self) -> &'static str {
        match self {
            Quoting::Verbatim => "verbatim",
            Quoting::Posix => "posix",
        }
    }
}

impl std::fmt::Display for Quoting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[must_use]
pub fn join_verbatim<T: AsRef<OsStr>>(args: &[T]) -> OsString {
    let mut joined = OsString::new();
    for (i, arg) in args.iter().enumerate() {
        if i != 0 {
            joined.push(" ");
        }
        joined.push(arg);
    }
    joined
}

pub fn join_quoted<T: AsRef<OsStr> + Debug>(args: &[T]) -> Result<OsString> {
    let mut quoted = Vec::with_capacity(args.len());
    for arg in args {
        let Some(arg_str) = arg.as_ref().to_str() else {
            bail!("cannot quote non-UTF-8 argument: {arg:?}");
        };
        let arg_quoted = shlex::try_quote(arg_str)
            .with_context(|| format!("cannot quote argument: {arg_str:?}"))?;
        quoted.push(arg_quoted.into_owned());
    }
    Ok(join_verbatim(&quoted))
}

pub fn join<T: AsRef<OsStr> + Debug>(quoting: Quoting, args: &[T]) -> Result<OsString> {
    match quoting {
        Quoting::Verbatim => Ok(join_verbatim(args)),
        Quoting::Posix => join_quoted(args),
    }
}

/// Build `<shell> [-e] -c <script>`. The environment is left untouched, so the child sees an exact
/// copy of ours.
#[must_use]
pub fn build_shell_command(shell: &Path, errexit: bool, script: &OsStr) -> Command {
    let mut command = Command::new(shell);
    if errexit {
        command.arg("-e");
    }
    command.arg("-c");
    command.arg(script);
    command.stdin(Stdio::inherit());
    command.stdout(Stdio::inherit());
    command.stderr(Stdio::inherit());
    command
}
