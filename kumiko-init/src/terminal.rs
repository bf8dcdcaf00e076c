use std::ffi::OsStr;
use std::path::PathBuf;

/// Terminals probed in preference order.
const TERMINALS: &[&str] = &[
    "kitty",
    "alacritty",
    "wezterm",
    "foot",
    "konsole",
    "gnome-terminal",
    "urxvt",
    "xterm",
];

/// First terminal emulator from the preference list found on PATH.
pub fn detect_terminal() -> Option<String> {
    TERMINALS
        .iter()
        .copied()
        .find(|&name| which::which(name).is_ok())
        .map(str::to_string)
}

/// Resolve `program` against the given PATH value.
pub fn find_in_path(program: &str, path: &OsStr) -> Option<PathBuf> {
    // The cwd is only consulted for names with a path separator, which
    // bound commands never use.
    which::which_in(program, Some(path), "/").ok()
}
