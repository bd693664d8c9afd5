//! Home-directory expansion for `cd`.

use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Result, anyhow};

/// Expand a leading `~` in `target`.
///
/// Only `~` on its own and the `~/` and `~\` prefixes are expanded. Forms
/// such as `~foo` are returned untouched; other users' home directories are
/// never looked up. `home` is only called when an expansion is needed.
pub fn expand_tilde<F>(target: &str, home: F) -> Result<PathBuf>
where
    F: FnOnce() -> Option<PathBuf>,
{
    if target != "~" && !target.starts_with("~/") && !target.starts_with("~\\") {
        return Ok(PathBuf::from(target));
    }
    let home = home().ok_or_else(|| anyhow!("could not resolve home directory"))?;
    let mut expanded = OsString::from(home);
    expanded.push(&target[1..]);
    Ok(PathBuf::from(expanded))
}
