use std::path::{Path, PathBuf};

use spdlog::info;

use crate::content::content_file::ContentFile;
use crate::content::RawPost;
use crate::error::Result;
use crate::export::{ExportData, ExportDocument};
use crate::post::{build_post, Post};
use crate::tag_registry::TagRegistry;

/// State of one conversion run. Posts must be added in the order they should be numbered.
#[derive(Debug)]
pub struct Converter {
    next_post_id: u32,
    posts: Vec<Post>,
    tags: TagRegistry,
}

impl Default for Converter {
    fn default() -> Self {
        Converter {
            next_post_id: 1,
            posts: vec![],
            tags: TagRegistry::new(),
        }
    }
}

impl Converter {
    pub fn new() -> Converter {
        Converter::default()
    }

    /// Converts one parsed post and records its tags.
    pub fn add_post(&mut self, raw_post: &RawPost) -> Result<&Post> {
        let post = build_post(self.next_post_id, raw_post)?;
        self.next_post_id += 1;

        self.tags.register_post(&post, &raw_post.front_matter);
        self.posts.push(post);

        Ok(&self.posts[self.posts.len() - 1])
    }

    pub fn add_file(&mut self, file_path: &Path) -> Result<&Post> {
        let raw_post = ContentFile::from_file(file_path)?.parse()?;
        self.add_post(&raw_post)
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn tags(&self) -> &TagRegistry {
        &self.tags
    }

    pub fn into_data(self) -> ExportData {
        let (tags, posts_tags) = self.tags.into_parts();
        ExportData {
            posts: self.posts,
            tags,
            posts_tags,
        }
    }

    pub fn into_document(self) -> ExportDocument {
        ExportDocument::new(self.into_data())
    }
}

/// Converts the files in the given order. The first failing file stops the run.
///
/// `base_dir` is only used to log file names relative to it.
pub fn convert_files(base_dir: &Path, files: &[PathBuf]) -> Result<ExportDocument> {
    let mut converter = Converter::new();

    for file_path in files {
        let display_path = file_path.strip_prefix(base_dir).unwrap_or(file_path);
        info!("Processing file {}", display_path.display());
        converter.add_file(file_path)?;
    }

    Ok(converter.into_document())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use crate::content::front_matter::parse_front_matter;
    use crate::error::ConvertError;
    use crate::test_data::{OCTOPRESS_POST, POST_WITHOUT_DATE, POST_WITH_IMAGE};

    use super::*;

    #[test]
    fn test_two_posts_end_to_end() {
        let mut converter = Converter::new();
        let first = parse_front_matter("2013-05-01-first.markdown", "---\ntitle: First\ncategories: [a, b]\n---\nOne").unwrap();
        let second = parse_front_matter("2013-05-02-second.markdown", "---\ntitle: Second\ntags: c\n---\nTwo").unwrap();
        converter.add_post(&first).unwrap();
        converter.add_post(&second).unwrap();

        let data = converter.into_data();
        assert_eq!(data.posts.len(), 2);

        let slugs: Vec<&str> = data.tags.iter().map(|t| t.slug.as_str()).collect();
        assert_eq!(slugs, ["a", "b", "c"]);

        let rows: Vec<(u32, u32, u32)> = data.posts_tags.iter()
            .map(|r| (r.id, r.post_id, r.tag_id))
            .collect();
        assert_eq!(rows, [(1, 1, 1), (2, 1, 2), (3, 2, 3)]);
    }

    #[test]
    fn test_post_ids_follow_input_order() {
        let mut converter = Converter::new();
        let posts = [
            ("2013-05-01-hello-ghost.markdown", OCTOPRESS_POST),
            ("2013-06-10-cats.markdown", POST_WITH_IMAGE),
            ("2014-02-03-undated.markdown", POST_WITHOUT_DATE),
        ];
        for (file_name, text) in posts {
            let raw = parse_front_matter(file_name, text).unwrap();
            converter.add_post(&raw).unwrap();
        }

        let ids: Vec<u32> = converter.posts().iter().map(|p| p.id).collect();
        assert_eq!(ids, [1, 2, 3]);
        let titles: Vec<&str> = converter.posts().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["Hello, Ghost", "Cats", "Undated"]);

        // Rust, Blogging | Pets, cats, Rust | Rust
        assert_eq!(converter.tags().tags().len(), 4);
        assert_eq!(converter.tags().relations().len(), 6);
        let last = converter.tags().relations().last().unwrap();
        assert_eq!((last.id, last.post_id, last.tag_id), (6, 3, 1));
    }

    #[test]
    fn test_failed_post_does_not_use_an_id() {
        let mut converter = Converter::new();
        let untitled = parse_front_matter("2013-05-01-x.markdown", "---\ntags: a\n---\n").unwrap();
        assert!(converter.add_post(&untitled).is_err());
        assert!(converter.tags().tags().is_empty());

        let titled = parse_front_matter("2013-05-01-y.markdown", "---\ntitle: Y\n---\n").unwrap();
        assert_eq!(converter.add_post(&titled).unwrap().id, 1);
    }

    #[test]
    fn test_convert_files() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("2013-05-01-hello-ghost.markdown");
        let second = dir.path().join("2013-06-10-cats.markdown");
        fs::write(&first, OCTOPRESS_POST).unwrap();
        fs::write(&second, POST_WITH_IMAGE).unwrap();

        let doc = convert_files(dir.path(), &[first, second]).unwrap();
        assert_eq!(doc.meta.vendor, "ghost_octopress_converter");
        assert_eq!(doc.meta.version, "002");
        assert_eq!(doc.data.posts.len(), 2);
        assert_eq!(doc.data.posts[0].slug, "hello-ghost");
        assert_eq!(doc.data.posts[1].slug, "cats-and-more");
        assert_eq!(doc.data.tags.len(), 4);
        assert_eq!(doc.data.posts_tags.len(), 5);
    }

    #[test]
    fn test_convert_files_stops_at_first_error() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("2013-05-01-good.markdown");
        let bad = dir.path().join("2013-05-02-bad.markdown");
        fs::write(&good, OCTOPRESS_POST).unwrap();
        fs::write(&bad, "---\ntitle: Bad\n").unwrap();

        let res = convert_files(dir.path(), &[good, bad, dir.path().join("missing.markdown")]);
        match res {
            Err(ConvertError::FrontMatter { file, .. }) => assert_eq!(file, "2013-05-02-bad.markdown"),
            other => panic!("unexpected result: {:?}", other.map(|d| d.data.posts.len())),
        }
    }
}
