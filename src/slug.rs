use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref DATE_PREFIX_REGEX: Regex = Regex::new(r"^\d{4}-\d{2}-\d{2}-").unwrap();
    static ref EXTENSION_REGEX: Regex = Regex::new(r"\.[^.]*$").unwrap();
}

/// Lower-cases the text and turns it into a url-safe key made of `[a-z0-9_-]`.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut prev_dash = false;

    for c in text.to_lowercase().chars() {
        let c = match c {
            'a'..='z' | '0'..='9' | '_' => c,
            _ => '-',
        };
        if c == '-' && prev_dash {
            continue;
        }
        prev_dash = c == '-';
        slug.push(c);
    }

    slug.trim_matches('-').to_string()
}

/// Octopress names posts `YYYY-MM-DD-some-title.markdown`; this keeps `some-title`.
pub fn slug_from_file_name(file_name: &str) -> String {
    let no_date = DATE_PREFIX_REGEX.replace(file_name, "");
    EXTENSION_REGEX.replace(&no_date, "").to_string()
}

/// The first ten characters of the file name, expected to be `YYYY-MM-DD`.
pub fn date_from_file_name(file_name: &str) -> String {
    file_name.chars().take(10).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("--a--b--"), "a-b");
        assert_eq!(slugify("snake_case stays"), "snake_case-stays");
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_slugify_same_key() {
        assert_eq!(slugify("My Tag"), "my-tag");
        assert_eq!(slugify("my tag"), "my-tag");
        assert_eq!(slugify("My  Tag!"), "my-tag");
    }

    #[test]
    fn test_slugify_non_ascii() {
        assert_eq!(slugify("Café Crème"), "caf-cr-me");
        assert_eq!(slugify("C++ & Rust"), "c-rust");
    }

    #[test]
    fn test_slug_from_file_name() {
        assert_eq!(slug_from_file_name("2013-05-01-my-post.markdown"), "my-post");
        assert_eq!(slug_from_file_name("2013-05-01-v1.2-release.markdown"), "v1.2-release");
        assert_eq!(slug_from_file_name("about.md"), "about");
        assert_eq!(slug_from_file_name("no-extension"), "no-extension");
    }

    #[test]
    fn test_date_from_file_name() {
        assert_eq!(date_from_file_name("2013-05-01-my-post.markdown"), "2013-05-01");
        assert_eq!(date_from_file_name("short"), "short");
    }
}
