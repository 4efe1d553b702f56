use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{ConvertError, Result};

pub struct PostList {
    pub root_dir: PathBuf,
    pub extension: String,
}

impl PostList {
    /// Octopress keeps its posts in `source/_posts`.
    pub fn from_octopress_dir(octopress_dir: &Path, extension: &str) -> PostList {
        PostList {
            root_dir: octopress_dir.join("source").join("_posts"),
            extension: extension.to_string(),
        }
    }

    /// Every post file below the root directory, in lexical order of the full path text.
    pub fn retrieve_files(&self) -> Result<Vec<PathBuf>> {
        let mut posts = vec![];
        self.collect_files(&self.root_dir, &mut posts)
            .map_err(|source| ConvertError::PostsDir {
                path: self.root_dir.clone(),
                source,
            })?;
        posts.sort_by(|a, b| a.to_string_lossy().cmp(&b.to_string_lossy()));
        Ok(posts)
    }

    fn collect_files(&self, dir: &Path, posts: &mut Vec<PathBuf>) -> io::Result<()> {
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let file_type = entry.file_type()?;
            let path = entry.path();

            if file_type.is_dir() {
                self.collect_files(&path, posts)?;
            } else if file_type.is_file() && self.is_post(&path) {
                posts.push(path);
            }
        }
        Ok(())
    }

    fn is_post(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == self.extension)
    }
}
