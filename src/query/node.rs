//! Result shape of the posts query
//!
//! Field names serialise in camelCase so the data reads the same as the
//! `allMarkdownRemark.edges[].node` shape the templates are written against.

use serde::{Deserialize, Serialize};

/// Query result root
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostsData {
    pub all_markdown_remark: AllMarkdownRemark,
}

impl PostsData {
    /// Wrap a list of edges
    pub fn from_edges(edges: Vec<Edge>) -> Self {
        Self {
            all_markdown_remark: AllMarkdownRemark { edges },
        }
    }

    /// Posts of this page, newest first
    pub fn edges(&self) -> &[Edge] {
        &self.all_markdown_remark.edges
    }
}

/// Ordered post records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AllMarkdownRemark {
    pub edges: Vec<Edge>,
}

/// Wrapper around one post record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub node: PostNode,
}

/// One post as seen by the listing page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostNode {
    /// Unique identifier
    pub id: String,
    /// Plain-text excerpt of the body
    pub excerpt: String,
    /// Estimated reading time in minutes
    pub time_to_read: u32,
    pub frontmatter: NodeFrontmatter,
    pub fields: NodeFields,
    pub file_absolute_path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeFrontmatter {
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    pub title: String,
    /// Whole days since publication
    pub days_ago: i64,
    /// Short summary written by the author
    pub excerpt: Option<String>,
    pub featured_image: Option<FeaturedImage>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeFields {
    /// Routing slug of the post page
    pub slug: String,
}

/// Thumbnail variant requested by the listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeaturedImage {
    pub layout: ImageLayout,
    /// Maximum rendered width in pixels
    pub width: u32,
    pub src: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ImageLayout {
    /// Scales down to fit, never up past `width`
    #[default]
    Constrained,
}
