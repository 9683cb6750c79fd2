//! Typed posts query
//!
//! A [`PostsQuery`] describes one listing page worth of posts: the sort
//! order plus a `skip`/`limit` window. Resolving it against the loaded posts
//! produces [`PostsData`], with reading time, day count and thumbnail
//! variant already computed so templates only pass data through.

mod node;

pub use node::{
    AllMarkdownRemark, Edge, FeaturedImage, ImageLayout, NodeFields, NodeFrontmatter, PostNode,
    PostsData,
};

use chrono::{DateTime, Local};

use crate::config::SiteConfig;
use crate::content::{count_words, prune, Post};
use crate::helpers::{days_between, encode_segment, url_for};
use crate::pagination::PageContext;

/// Request for one window of posts, ordered by publication date, newest first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostsQuery {
    pub skip: usize,
    pub limit: usize,
}

/// Tunables for the derived node fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryOptions {
    pub words_per_minute: usize,
    pub excerpt_length: usize,
    pub thumbnail_width: u32,
}

impl From<&SiteConfig> for QueryOptions {
    fn from(config: &SiteConfig) -> Self {
        Self {
            words_per_minute: config.words_per_minute,
            excerpt_length: config.excerpt_length,
            thumbnail_width: config.thumbnail_width,
        }
    }
}

impl PostsQuery {
    /// Newest-first window starting at `skip`
    pub fn new(skip: usize, limit: usize) -> Self {
        Self { skip, limit }
    }

    /// Window covering the posts of one listing page
    pub fn for_page(ctx: &PageContext) -> Self {
        Self::new(ctx.skip, ctx.limit)
    }

    /// Run the query over the loaded posts
    pub fn resolve(
        &self,
        posts: &[Post],
        config: &SiteConfig,
        now: DateTime<Local>,
    ) -> PostsData {
        let options = QueryOptions::from(config);

        let mut sorted: Vec<&Post> = posts.iter().collect();
        // Stable sort keeps load order for equal dates
        sorted.sort_by(|a, b| b.date.cmp(&a.date));

        let edges: Vec<Edge> = sorted
            .into_iter()
            .skip(self.skip)
            .take(self.limit)
            .map(|post| Edge {
                node: build_node(post, config, &options, now),
            })
            .collect();

        tracing::debug!(
            "Resolved posts query skip={} limit={} -> {} edges",
            self.skip,
            self.limit,
            edges.len()
        );

        PostsData::from_edges(edges)
    }
}

fn build_node(
    post: &Post,
    config: &SiteConfig,
    options: &QueryOptions,
    now: DateTime<Local>,
) -> PostNode {
    PostNode {
        id: format!("post:{}", post.source),
        excerpt: prune(&post.text, options.excerpt_length),
        time_to_read: time_to_read(&post.text, options.words_per_minute),
        frontmatter: NodeFrontmatter {
            categories: post.categories.clone(),
            tags: post.tags.clone(),
            title: post.title.clone(),
            days_ago: days_between(&post.date, &now),
            excerpt: post.summary.clone(),
            featured_image: post.featured_image.as_deref().map(|image| FeaturedImage {
                layout: ImageLayout::Constrained,
                width: options.thumbnail_width,
                src: image_src(config, &post.source, image),
            }),
        },
        fields: NodeFields {
            slug: post.slug.clone(),
        },
        file_absolute_path: post.full_source.to_string_lossy().to_string(),
    }
}

/// Minutes to read `text`, rounded, never below one
pub fn time_to_read(text: &str, words_per_minute: usize) -> u32 {
    let wpm = words_per_minute.max(1);
    let minutes = (count_words(text) + wpm / 2) / wpm;
    minutes.max(1) as u32
}

/// Site URL of a featured image.
///
/// `./` and `../` paths are relative to the post's own directory; anything
/// else is relative to the source root.
fn image_src(config: &SiteConfig, post_source: &str, image: &str) -> String {
    if image.starts_with("http://") || image.starts_with("https://") {
        return image.to_string();
    }

    let mut parts: Vec<&str> = Vec::new();
    if image.starts_with("./") || image.starts_with("../") {
        let dir = post_source.rsplit_once('/').map(|(dir, _)| dir).unwrap_or("");
        parts.extend(dir.split('/').filter(|p| !p.is_empty()));
    }
    for part in image.split('/') {
        match part {
            "." | "" => {}
            ".." => {
                parts.pop();
            }
            _ => parts.push(part),
        }
    }

    let encoded: Vec<String> = parts.into_iter().map(encode_segment).collect();
    url_for(config, &encoded.join("/"))
}
