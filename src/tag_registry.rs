use std::collections::HashMap;

use serde::Serialize;
use uuid::Uuid;

use crate::content::FrontMatter;
use crate::post::{Post, GHOST_USER_ID};
use crate::slug::slugify;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tag {
    pub id: u32,
    pub uuid: String,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub parent_id: Option<u32>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub created_at: Option<i64>,
    pub created_by: u32,
    pub updated_at: Option<i64>,
    pub updated_by: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PostTagRelation {
    pub id: u32,
    pub post_id: u32,
    pub tag_id: u32,
}

/// Tags seen so far, keyed by slug, and the post to tag links.
///
/// The first post that uses a tag decides its name and timestamps.
#[derive(Debug, Default)]
pub struct TagRegistry {
    tags: Vec<Tag>,
    by_slug: HashMap<String, usize>,
    relations: Vec<PostTagRelation>,
}

impl TagRegistry {
    pub fn new() -> TagRegistry {
        TagRegistry::default()
    }

    /// Links `post` to every category and tag of its front matter.
    ///
    /// Categories come first, then tags. The same name in both lists gives two links.
    pub fn register_post(&mut self, post: &Post, front_matter: &FrontMatter) {
        for name in post_tag_names(front_matter) {
            let tag_id = self.find_or_create(&name, post);
            let relation = PostTagRelation {
                id: self.relations.len() as u32 + 1,
                post_id: post.id,
                tag_id,
            };
            self.relations.push(relation);
        }
    }

    fn find_or_create(&mut self, name: &str, post: &Post) -> u32 {
        let slug = slugify(name);
        if let Some(&idx) = self.by_slug.get(&slug) {
            return self.tags[idx].id;
        }

        let tag = Tag {
            id: self.tags.len() as u32 + 1,
            uuid: Uuid::new_v4().to_string(),
            name: name.to_string(),
            slug: slug.clone(),
            description: None,
            parent_id: None,
            meta_title: None,
            meta_description: None,
            created_at: post.created_at,
            created_by: GHOST_USER_ID,
            updated_at: post.updated_at,
            updated_by: GHOST_USER_ID,
        };
        let id = tag.id;

        self.by_slug.insert(slug, self.tags.len());
        self.tags.push(tag);
        id
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn relations(&self) -> &[PostTagRelation] {
        &self.relations
    }

    pub fn into_parts(self) -> (Vec<Tag>, Vec<PostTagRelation>) {
        (self.tags, self.relations)
    }
}

fn post_tag_names(front_matter: &FrontMatter) -> Vec<String> {
    let mut names = front_matter.get_list("categories");
    names.extend(front_matter.get_list("tags"));
    names
}
