//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,
    pub language: String,

    // URL
    pub url: String,
    pub root: String,

    // Directory
    pub source_dir: String,
    pub public_dir: String,
    /// Route prefix of the posts listing (the `base` of every page context)
    pub posts_dir: String,

    // Writing
    pub date_format: String,

    // Listing
    pub per_page: usize,
    pub words_per_minute: usize,
    pub excerpt_length: usize,
    pub thumbnail_width: u32,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Postdeck".to_string(),
            description: String::new(),
            author: "John Doe".to_string(),
            language: "en".to_string(),

            url: "http://example.com".to_string(),
            root: "/".to_string(),

            source_dir: "source".to_string(),
            public_dir: "public".to_string(),
            posts_dir: "posts".to_string(),

            date_format: "YYYY-MM-DD".to_string(),

            per_page: 10,
            words_per_minute: 265,
            excerpt_length: 140,
            thumbnail_width: 80,

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Route prefix for the posts listing, e.g. `/posts` or `/blog/posts`
    pub fn posts_base(&self) -> String {
        let root = self.root.trim_end_matches('/');
        let dir = self.posts_dir.trim_matches('/');
        if dir.is_empty() {
            format!("{}/", root)
        } else {
            format!("{}/{}", root, dir)
        }
    }
}
