use std::fs;
use std::path::{Path, PathBuf};

use crate::content::front_matter::parse_front_matter;
use crate::content::RawPost;
use crate::error::{ConvertError, Result};

pub struct ContentFile {
    pub file_path: PathBuf,
    pub file_name: String,
    pub raw_content: String,
}

impl ContentFile {
    pub fn from_file(file_path: &Path) -> Result<ContentFile> {
        let raw_content = fs::read_to_string(file_path).map_err(|source| ConvertError::FileAccess {
            path: file_path.to_path_buf(),
            source,
        })?;

        let file_name = file_path.file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();

        Ok(ContentFile {
            file_path: file_path.to_path_buf(),
            file_name,
            raw_content,
        })
    }

    pub fn parse(&self) -> Result<RawPost> {
        parse_front_matter(&self.file_name, &self.raw_content)
    }
}
