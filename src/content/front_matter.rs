use serde_yaml::{Mapping, Value};

use crate::content::{FrontMatter, RawPost};
use crate::error::{ConvertError, Result};

const DELIMITER: &str = "---";

/// Splits a post into its YAML front matter and the text that follows it.
///
/// The content is returned untouched, including the line break that ends the
/// closing `---`. A post without a leading `---` line has no front matter.
pub fn parse_front_matter(file_name: &str, raw_text: &str) -> Result<RawPost> {
    let (yaml, content) = match split_front_matter(raw_text) {
        Ok(Some((yaml, content))) => (yaml, content),
        Ok(None) => ("", raw_text),
        Err(reason) => return Err(front_matter_error(file_name, reason)),
    };

    let front_matter = parse_yaml(yaml).map_err(|reason| front_matter_error(file_name, reason))?;

    Ok(RawPost {
        file_name: file_name.to_string(),
        front_matter,
        content: content.to_string(),
    })
}

fn split_front_matter(raw_text: &str) -> std::result::Result<Option<(&str, &str)>, String> {
    let Some(rest) = strip_delimiter_line(raw_text) else {
        return Ok(None);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        let trimmed = line.trim_end_matches(['\n', '\r']);
        if trimmed == DELIMITER {
            let yaml = &rest[..offset];
            let content = &rest[offset + DELIMITER.len()..];
            return Ok(Some((yaml, content)));
        }
        offset += line.len();
    }

    Err("the closing '---' line is missing".to_string())
}

fn strip_delimiter_line(text: &str) -> Option<&str> {
    let rest = text.strip_prefix(DELIMITER)?;
    rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n'))
}

fn parse_yaml(yaml: &str) -> std::result::Result<FrontMatter, String> {
    if yaml.trim().is_empty() {
        return Ok(FrontMatter::default());
    }

    match serde_yaml::from_str::<Value>(yaml) {
        Ok(Value::Mapping(mapping)) => Ok(FrontMatter(mapping)),
        Ok(Value::Null) => Ok(FrontMatter(Mapping::new())),
        Ok(_) => Err("front matter is not a key/value mapping".to_string()),
        Err(e) => Err(e.to_string()),
    }
}

fn front_matter_error(file_name: &str, reason: String) -> ConvertError {
    ConvertError::FrontMatter {
        file: file_name.to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use crate::test_data::{OCTOPRESS_POST, POST_WITH_IMAGE};

    use super::*;

    #[test]
    fn test_parse_octopress_post() {
        let post = parse_front_matter("2013-05-01-hello-ghost.markdown", OCTOPRESS_POST).unwrap();
        assert_eq!(post.file_name, "2013-05-01-hello-ghost.markdown");
        assert_eq!(post.front_matter.get_str("title"), Some("Hello, Ghost".to_string()));
        assert_eq!(post.front_matter.get_str("date"), Some("2013-05-01 10:00".to_string()));
        assert_eq!(post.front_matter.get_list("categories"), ["Rust", "Blogging"]);
        assert_eq!(post.content, "\n\nMoving from Octopress to Ghost.\n\n<!-- more -->\n\nThe rest of the post.\n");
    }

    #[test]
    fn test_content_is_untouched() {
        let post = parse_front_matter("a.markdown", POST_WITH_IMAGE).unwrap();
        assert!(post.content.starts_with("\n   \n"));
        assert!(post.content.ends_with("   \n\n"));
    }

    #[test]
    fn test_no_front_matter() {
        let text = "Just some text\n---\nand a rule";
        let post = parse_front_matter("plain.markdown", text).unwrap();
        assert_eq!(post.front_matter, FrontMatter::default());
        assert_eq!(post.content, text);
    }

    #[test]
    fn test_empty_front_matter() {
        let post = parse_front_matter("empty.markdown", "---\n---\nBody").unwrap();
        assert_eq!(post.front_matter, FrontMatter::default());
        assert_eq!(post.content, "\nBody");
    }

    #[test]
    fn test_windows_line_endings() {
        let post = parse_front_matter("crlf.markdown", "---\r\ntitle: CRLF\r\n---\r\nBody\r\n").unwrap();
        assert_eq!(post.front_matter.get_str("title"), Some("CRLF".to_string()));
        assert_eq!(post.content, "\r\nBody\r\n");
    }

    #[test]
    fn test_unterminated_front_matter() {
        let res = parse_front_matter("broken.markdown", "---\ntitle: Broken\n\nBody");
        match res {
            Err(ConvertError::FrontMatter { file, reason }) => {
                assert_eq!(file, "broken.markdown");
                assert!(reason.contains("closing"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_yaml() {
        let res = parse_front_matter("bad.markdown", "---\ntitle: [unclosed\n---\nBody");
        assert!(matches!(res, Err(ConvertError::FrontMatter { .. })));
    }

    #[test]
    fn test_front_matter_not_a_mapping() {
        let res = parse_front_matter("list.markdown", "---\n- one\n- two\n---\nBody");
        assert!(matches!(res, Err(ConvertError::FrontMatter { .. })));
    }
}
