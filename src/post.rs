use serde::Serialize;
use spdlog::info;
use uuid::Uuid;

use crate::content::RawPost;
use crate::error::{ConvertError, Result};
use crate::slug::{date_from_file_name, slug_from_file_name};
use crate::text_utils::{clean_string, convert_tags, parse_timestamp};

/// Every post is attributed to the first Ghost user.
pub const GHOST_USER_ID: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Published,
}

/// A post in the shape Ghost's importer expects.
///
/// Timestamps are milliseconds since the epoch; a date that could not be
/// parsed is kept as `None` and exported as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Post {
    pub id: u32,
    pub uuid: String,
    pub author_id: u32,
    pub created_by: u32,
    pub published_by: u32,
    pub updated_by: u32,
    pub title: String,
    pub created_at: Option<i64>,
    pub published_at: Option<i64>,
    pub updated_at: Option<i64>,
    pub markdown: String,
    pub slug: String,
    pub status: PostStatus,
}

/// Builds the Ghost post for `raw_post`, numbering it with `id`.
pub fn build_post(id: u32, raw_post: &RawPost) -> Result<Post> {
    let front_matter = &raw_post.front_matter;

    let title = match front_matter.get_str("title") {
        Some(title) => clean_string(Some(&title)),
        None => return Err(ConvertError::MissingField {
            file: raw_post.file_name.clone(),
            field: "title",
        }),
    };

    let creation_date = front_matter.get_present("date")
        .or_else(|| front_matter.get_present("created"))
        .unwrap_or_else(|| date_from_file_name(&raw_post.file_name));
    let update_date = front_matter.get_present("changed")
        .unwrap_or_else(|| creation_date.clone());

    let created_at = parse_timestamp(&creation_date);
    let updated_at = parse_timestamp(&update_date);

    let slug = resolve_slug(id, raw_post);
    let markdown = convert_tags(Some(&raw_post.content));

    Ok(Post {
        id,
        uuid: Uuid::new_v4().to_string(),
        author_id: GHOST_USER_ID,
        created_by: GHOST_USER_ID,
        published_by: GHOST_USER_ID,
        updated_by: GHOST_USER_ID,
        title,
        created_at,
        published_at: created_at,
        updated_at,
        markdown,
        slug,
        status: PostStatus::Published,
    })
}

fn resolve_slug(id: u32, raw_post: &RawPost) -> String {
    let slug = clean_string(raw_post.front_matter.get_present("slug").as_deref());
    if !slug.is_empty() {
        return slug;
    }

    let slug = slug_from_file_name(&raw_post.file_name);
    if !slug.is_empty() {
        info!("No slug in {}, using {} from the file name", raw_post.file_name, slug);
        return slug;
    }

    let slug = format!("post-{}", id);
    info!("No slug in {} and none in its file name, using {}", raw_post.file_name, slug);
    slug
}
