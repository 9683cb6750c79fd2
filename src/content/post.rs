//! Post model

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// A blog post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Post title
    pub title: String,

    /// Publication date
    pub date: DateTime<Local>,

    /// Rendered HTML content
    pub content: String,

    /// Body text with all markup removed
    pub text: String,

    /// Hand-written summary from front-matter, or the part before `<!-- more -->`
    pub summary: Option<String>,

    /// Post tags
    pub tags: Vec<String>,

    /// Post categories
    pub categories: Vec<String>,

    /// Source file path (relative to the source dir)
    pub source: String,

    /// Full source file path
    pub full_source: PathBuf,

    /// Slug (URL-friendly name)
    pub slug: String,

    /// URL path of the post page, including the site root
    pub path: String,

    /// Full permalink URL
    pub permalink: String,

    /// Featured image path as written in front-matter
    pub featured_image: Option<String>,

    /// Whether the post is published
    pub published: bool,

    /// Custom front-matter fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Post {
    /// Create a new post with minimal required fields
    pub fn new(title: String, date: DateTime<Local>, source: String) -> Self {
        let slug = slug::slugify(&title);
        Self {
            title,
            date,
            content: String::new(),
            text: String::new(),
            summary: None,
            tags: Vec::new(),
            categories: Vec::new(),
            full_source: PathBuf::from(&source),
            source,
            path: format!("/{}/", slug),
            permalink: String::new(),
            slug,
            featured_image: None,
            published: true,
            extra: HashMap::new(),
        }
    }

    /// Newer neighbour in a newest-first list
    pub fn prev<'a>(&self, posts: &'a [Post]) -> Option<&'a Post> {
        let pos = posts.iter().position(|p| p.source == self.source)?;
        pos.checked_sub(1).map(|i| &posts[i])
    }

    /// Older neighbour in a newest-first list
    pub fn next<'a>(&self, posts: &'a [Post]) -> Option<&'a Post> {
        let pos = posts.iter().position(|p| p.source == self.source)?;
        posts.get(pos + 1)
    }
}
