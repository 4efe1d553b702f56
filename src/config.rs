use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::{fs, io};

use serde::Deserialize;

pub const DEFAULT_OUTPUT_FILE: &str = "GhostData.json";
pub const DEFAULT_POST_EXTENSION: &str = "markdown";

#[derive(Deserialize, Default)]
pub struct Paths {
    pub octopress_dir: Option<PathBuf>,
    pub output_file: Option<PathBuf>,
}

#[derive(Deserialize)]
pub struct Export {
    #[serde(default = "default_post_extension")]
    pub post_extension: String,
    #[serde(default)]
    pub pretty: bool,
}

impl Default for Export {
    fn default() -> Self {
        Export {
            post_extension: default_post_extension(),
            pretty: false,
        }
    }
}

fn default_post_extension() -> String {
    DEFAULT_POST_EXTENSION.to_string()
}

#[derive(Deserialize)]
pub struct Log {
    pub level: LogLevel,
    pub log_to_console: bool,
    pub location: Option<PathBuf>,
}

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub paths: Paths,
    #[serde(default)]
    pub export: Export,
    pub log: Option<Log>,
}

pub fn parse_config(cfg_content: &str) -> io::Result<Config> {
    match toml::from_str::<Config>(cfg_content) {
        Ok(cfg) => Ok(cfg),
        Err(e) => Err(io::Error::new(
            ErrorKind::InvalidData, format!("Error parsing configuration file: {}", e))),
    }
}

pub fn read_config(cfg_path: &Path) -> io::Result<Config> {
    let cfg_content = match fs::read_to_string(cfg_path) {
        Ok(content) => content,
        Err(e) => return Err(io::Error::new(e.kind(), format!("Error opening configuration file {}: {}", cfg_path.display(), e))),
    };

    parse_config(&cfg_content)
}
