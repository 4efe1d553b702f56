pub mod config;
pub mod logger;
pub mod error;
pub mod util;
pub mod content;
pub mod text_utils;
pub mod slug;
pub mod post;
pub mod tag_registry;
pub mod converter;
pub mod export;
pub mod post_list;
mod test_data;
