use std::env;
use std::io;
use std::path::{Path, PathBuf};

/// Replaces a leading `~` with the home directory and makes the path absolute.
pub fn expand_path(path: &Path) -> io::Result<PathBuf> {
    let expanded = match path.strip_prefix("~") {
        Ok(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => path.to_path_buf(),
        },
        Err(_) => path.to_path_buf(),
    };

    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        Ok(env::current_dir()?.join(expanded))
    }
}
