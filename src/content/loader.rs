//! Content loader - loads posts from the source directory

use anyhow::Result;
use chrono::Local;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::{FrontMatter, MarkdownRenderer, Post};
use crate::helpers::{full_url_for, url_for};
use crate::Site;

/// Loads posts from `<source>/_posts`
pub struct ContentLoader<'a> {
    site: &'a Site,
    renderer: MarkdownRenderer,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(site: &'a Site) -> Self {
        Self {
            site,
            renderer: MarkdownRenderer::new(),
        }
    }

    /// Load all published posts, newest first
    pub fn load_posts(&self) -> Result<Vec<Post>> {
        let posts_dir = self.site.posts_source_dir();
        if !posts_dir.exists() {
            tracing::debug!("No posts directory at {:?}", posts_dir);
            return Ok(Vec::new());
        }

        let mut posts = Vec::new();

        for entry in WalkDir::new(&posts_dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !(path.is_file() && is_markdown_file(path)) {
                continue;
            }
            match self.load_post(path) {
                Ok(post) if post.published => posts.push(post),
                Ok(post) => tracing::debug!("Skipping unpublished post {}", post.source),
                Err(e) => tracing::warn!("Failed to load post {:?}: {}", path, e),
            }
        }

        posts.sort_by(|a, b| b.date.cmp(&a.date));

        Ok(posts)
    }

    /// Load a single post from a file
    pub fn load_post(&self, path: &Path) -> Result<Post> {
        let content = fs::read_to_string(path)?;
        let (fm, body) = FrontMatter::parse(&content);

        let file_modified = fs::metadata(path)?
            .modified()
            .ok()
            .map(chrono::DateTime::<Local>::from);
        let date = fm
            .parse_date()
            .unwrap_or_else(|| file_modified.unwrap_or_else(Local::now));

        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("untitled")
            .to_string();
        let title = fm.title.clone().unwrap_or_else(|| stem.clone());
        let slug = fm
            .slug
            .as_deref()
            .map(slug::slugify)
            .unwrap_or_else(|| slug::slugify(&stem));

        let source = path
            .strip_prefix(&self.site.source_dir)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/");

        let (more_excerpt, _) = MarkdownRenderer::split_excerpt(body);
        let summary = fm
            .excerpt
            .clone()
            .or_else(|| more_excerpt.map(|md| self.renderer.plain_text(md)));

        let post_path = url_for(&self.site.config, &format!("{}/", slug));

        let mut post = Post::new(title, date, source);
        post.content = self.renderer.render(body)?;
        post.text = self.renderer.plain_text(body);
        post.summary = summary;
        post.tags = fm.tags;
        post.categories = fm.categories;
        post.full_source = path.to_path_buf();
        post.permalink = full_url_for(&self.site.config, &post_path);
        post.path = post_path;
        post.slug = slug;
        post.featured_image = fm.featured_image;
        post.published = fm.published;
        post.extra = fm.extra;

        Ok(post)
    }
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}
