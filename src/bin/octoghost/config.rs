use std::env;
use std::path::PathBuf;

use octoghost::config::{read_config, Config};

use crate::CFG_FILE_NAME;

fn get_config_path() -> Option<PathBuf> {
    let exe_dir = env::current_exe().ok()
        .and_then(|exe_path| exe_path.parent().map(|dir| dir.to_path_buf()));
    let cur_dir = env::current_dir().ok();
    let cfg_dir = dirs::config_dir().map(|dir| dir.join("octoghost"));

    [exe_dir, cur_dir, cfg_dir].into_iter()
        .flatten()
        .map(|dir| dir.join(CFG_FILE_NAME))
        .find(|path| path.exists())
}

/// Reads the configuration file, if there is one. Without it every setting has its default.
pub(crate) fn open_config(cfg_path: Option<PathBuf>) -> Result<Config, String> {
    let config_path = match cfg_path.or_else(get_config_path) {
        None => return Ok(Config::default()),
        Some(x) => x,
    };

    let mut config = match read_config(&config_path) {
        Ok(config) => config,
        Err(e) => return Err(e.to_string()),
    };

    if let Some(mut log) = config.log {
        let location = log.location.or_else(|| {
            dirs::cache_dir().map(|dir| dir.join("octoghost").join("log").join("octoghost.log"))
        });
        log.location = location;
        config.log = Some(log);
    }

    Ok(config)
}
