use std::process::ExitStatus;

/// The code to exit with after the shell exited with `status`. A shell killed by a signal maps to
/// `128 + signo`, like shells report it.
#[must_use]
pub fn exit_code(status: ExitStatus) -> i32 {
    status
        .code()
        .or_else(|| os_specific::signal_code(status))
        .unwrap_or(1)
}

#[cfg(unix)]
mod os_specific {
    use std::{os::unix::process::ExitStatusExt, process::ExitStatus};

    pub fn signal_code(status: ExitStatus) -> Option<i32> {
        status.signal().map(|signal| 128 + signal)
    }
}

#[cfg(not(unix))]
mod os_specific {
    use std::process::ExitStatus;

    pub fn signal_code(_status: ExitStatus) -> Option<i32> {
        None
    }
}
