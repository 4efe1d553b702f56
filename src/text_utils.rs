use chrono::{DateTime, NaiveDate, NaiveDateTime};
use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    // Subset of the Octopress tag: {% img /path [width] [height] [alt text] %}
    static ref IMG_TAG_REGEX: Regex = Regex::new(
        r"\{% img (?P<src>\S+) (?:(?P<width>\d+) )?(?:(?P<height>\d+) )?(?P<alt>[^%\n]*)%\}"
    ).unwrap();
}

const OFFSET_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f %z",
    "%Y-%m-%d %H:%M %z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
];

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Trims whitespace at both ends of the whole text. `None` becomes an empty string.
pub fn clean_string(text: Option<&str>) -> String {
    match text {
        None => String::new(),
        Some(s) => s.trim().to_string(),
    }
}

/// Cleans the text and rewrites the first `{% img %}` tag into an html `<img>`.
///
/// Only the first image tag of the text is converted, the others are left as they are.
pub fn convert_tags(text: Option<&str>) -> String {
    let cleaned = clean_string(text);

    let converted = IMG_TAG_REGEX.replace(&cleaned, |caps: &Captures| {
        let src = caps.name("src").map_or("", |m| m.as_str());
        let alt = caps.name("alt").map_or("", |m| m.as_str());
        format!(r#"<img src="/content{}" alt="{}" />"#, src, alt)
    });

    converted.to_string()
}

/// Parses a post date into milliseconds since the epoch.
///
/// Dates without an offset are taken as UTC. Anything that can't be parsed gives `None`.
pub fn parse_timestamp(buf: &str) -> Option<i64> {
    let buf = buf.trim();

    if let Ok(date_time) = DateTime::parse_from_rfc3339(buf) {
        return Some(date_time.timestamp_millis());
    }
    if let Ok(date_time) = DateTime::parse_from_rfc2822(buf) {
        return Some(date_time.timestamp_millis());
    }

    for fmt in OFFSET_FORMATS {
        if let Ok(date_time) = DateTime::parse_from_str(buf, fmt) {
            return Some(date_time.timestamp_millis());
        }
    }

    for fmt in NAIVE_FORMATS {
        if let Ok(date_time) = NaiveDateTime::parse_from_str(buf, fmt) {
            return Some(date_time.and_utc().timestamp_millis());
        }
    }

    NaiveDate::parse_from_str(buf, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|date_time| date_time.and_utc().timestamp_millis())
}
