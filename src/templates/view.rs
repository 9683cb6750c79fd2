//! Posts listing page as a tree of component invocations

use serde::Serialize;

use crate::pagination::PageContext;
use crate::query::{Edge, PostsData};

/// Title shown in the heading and SEO tags of the listing
pub const POSTS_TITLE: &str = "Posts";

/// Class of the page title heading
pub const PAGE_TITLE_CLASS: &str = "page__title";

/// A component invocation with its props
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "component", rename_all = "camelCase")]
pub enum ViewNode {
    Layout {
        children: Vec<ViewNode>,
    },
    #[serde(rename_all = "camelCase")]
    Heading {
        class_name: String,
        text: String,
    },
    Seo {
        title: String,
    },
    PostCardContainer {
        posts: Vec<Edge>,
    },
    #[serde(rename_all = "camelCase")]
    Pagination {
        page_count: usize,
        current_page: usize,
        base: String,
    },
}

/// Bind one page of posts and its page context into the listing layout.
///
/// The layout always holds, in order: the title heading, the SEO directive,
/// the card list fed with the query edges and the pagination control fed
/// with the page context.
pub fn posts_page(data: &PostsData, ctx: &PageContext) -> ViewNode {
    ViewNode::Layout {
        children: vec![
            ViewNode::Heading {
                class_name: PAGE_TITLE_CLASS.to_string(),
                text: POSTS_TITLE.to_string(),
            },
            ViewNode::Seo {
                title: POSTS_TITLE.to_string(),
            },
            ViewNode::PostCardContainer {
                posts: data.all_markdown_remark.edges.clone(),
            },
            ViewNode::Pagination {
                page_count: ctx.page_count,
                current_page: ctx.current_page,
                base: ctx.base.clone(),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{NodeFields, NodeFrontmatter, PostNode};

    fn edge(n: usize) -> Edge {
        Edge {
            node: PostNode {
                id: format!("post:{}", n),
                excerpt: format!("Excerpt {}", n),
                time_to_read: 1,
                frontmatter: NodeFrontmatter {
                    title: format!("Post {}", n),
                    days_ago: n as i64,
                    ..Default::default()
                },
                fields: NodeFields {
                    slug: format!("post-{}", n),
                },
                file_absolute_path: format!("/site/source/_posts/post-{}.md", n),
            },
        }
    }

    fn children(node: &ViewNode) -> &[ViewNode] {
        match node {
            ViewNode::Layout { children } => children,
            other => panic!("expected layout, got {:?}", other),
        }
    }

    #[test]
    fn test_children_in_fixed_order() {
        let data = PostsData::from_edges(vec![edge(1)]);
        let ctx = PageContext::new("/posts", 1, 1, 10).unwrap();
        let tree = posts_page(&data, &ctx);
        let kids = children(&tree);

        assert_eq!(kids.len(), 4);
        assert!(matches!(kids[0], ViewNode::Heading { .. }));
        assert!(matches!(kids[1], ViewNode::Seo { .. }));
        assert!(matches!(kids[2], ViewNode::PostCardContainer { .. }));
        assert!(matches!(kids[3], ViewNode::Pagination { .. }));

        assert_eq!(
            kids[0],
            ViewNode::Heading {
                class_name: "page__title".to_string(),
                text: "Posts".to_string()
            }
        );
        assert_eq!(
            kids[1],
            ViewNode::Seo {
                title: "Posts".to_string()
            }
        );
    }

    #[test]
    fn test_cards_receive_edges_unchanged() {
        let edges: Vec<Edge> = (1..=10).map(edge).collect();
        let data = PostsData::from_edges(edges.clone());
        let ctx = PageContext::new("/posts", 2, 5, 10).unwrap();
        let tree = posts_page(&data, &ctx);

        assert_eq!(
            children(&tree)[2],
            ViewNode::PostCardContainer { posts: edges }
        );
    }

    #[test]
    fn test_pagination_receives_page_context() {
        let data = PostsData::from_edges((1..=10).map(edge).collect());
        let ctx = PageContext::new("/posts", 2, 5, 10).unwrap();
        let tree = posts_page(&data, &ctx);

        assert_eq!(
            children(&tree)[3],
            ViewNode::Pagination {
                page_count: 5,
                current_page: 2,
                base: "/posts".to_string()
            }
        );
    }

    #[test]
    fn test_empty_edges() {
        let ctx = PageContext::new("/posts", 1, 1, 10).unwrap();
        let tree = posts_page(&PostsData::default(), &ctx);
        assert_eq!(
            children(&tree)[2],
            ViewNode::PostCardContainer { posts: Vec::new() }
        );
    }

    #[test]
    fn test_idempotent() {
        let data = PostsData::from_edges((1..=3).map(edge).collect());
        let ctx = PageContext::new("/posts", 1, 2, 3).unwrap();
        assert_eq!(posts_page(&data, &ctx), posts_page(&data, &ctx));
    }

    #[test]
    fn test_serialized_props() {
        let ctx = PageContext::new("/posts", 2, 5, 10).unwrap();
        let tree = posts_page(&PostsData::default(), &ctx);
        let json = serde_json::to_value(&tree).unwrap();

        assert_eq!(json["component"], "layout");
        let pagination = &json["children"][3];
        assert_eq!(pagination["component"], "pagination");
        assert_eq!(pagination["pageCount"], 5);
        assert_eq!(pagination["currentPage"], 2);
        assert_eq!(pagination["base"], "/posts");
        assert_eq!(json["children"][0]["className"], "page__title");
    }
}
