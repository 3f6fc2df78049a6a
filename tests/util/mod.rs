use std::{
    env::{join_paths, split_paths, var_os},
    ffi::OsString,
    fs::{Permissions, create_dir_all, rename, set_permissions, write},
    os::unix::fs::PermissionsExt,
    path::{Path, PathBuf},
};

/// Stand-in for `direnv`. `allow` exits with `$STUB_DIRENV_ALLOW_STATUS` (default 0), and `export`
/// prints one variable assignment. If `$STUB_DIRENV_LOG` is set, each invocation's arguments are
/// appended to it.
const DIRENV_STUB: &str = r#"#!/bin/sh
if [ -n "$STUB_DIRENV_LOG" ]; then
    echo "$*" >> "$STUB_DIRENV_LOG"
fi
case "$1" in
    allow)
        exit "${STUB_DIRENV_ALLOW_STATUS:-0}"
        ;;
    export)
        echo 'export DIRENV_STUB_LOADED=1'
        ;;
    *)
        echo "direnv stub: unexpected arguments: $*" >&2
        exit 1
        ;;
esac
"#;

/// Write the stub to `$CARGO_TARGET_TMPDIR/<subdir>/direnv` and return the directory
pub fn install_direnv_stub(subdir: &str) -> PathBuf {
    let dir = Path::new(env!("CARGO_TARGET_TMPDIR")).join(subdir);
    create_dir_all(&dir).unwrap();
    // Write then rename, so a stub left by an earlier run is never open for writing while being
    // executed.
    let tmp = dir.join("direnv.tmp");
    write(&tmp, DIRENV_STUB).unwrap();
    set_permissions(&tmp, Permissions::from_mode(0o755)).unwrap();
    rename(&tmp, dir.join("direnv")).unwrap();
    dir
}

pub fn prepend_to_paths(path: PathBuf) -> OsString {
    let paths = var_os("PATH").unwrap();
    let paths_split = split_paths(&paths);
    let paths_prepended = std::iter::once(path).chain(paths_split);
    join_paths(paths_prepended).unwrap()
}
