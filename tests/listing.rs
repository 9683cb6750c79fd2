//! End-to-end listing generation over a temporary site

use std::fs;
use std::path::Path;

use postdeck::content::loader::ContentLoader;
use postdeck::pagination::{paginate, PageContext};
use postdeck::query::PostsQuery;
use postdeck::templates::{posts_page, ViewNode};
use postdeck::Site;
use tempfile::TempDir;

fn write_site(dir: &Path, config: &str, posts: usize) {
    fs::write(dir.join("_config.yml"), config).unwrap();
    let posts_dir = dir.join("source/_posts");
    fs::create_dir_all(&posts_dir).unwrap();
    for i in 1..=posts {
        fs::write(
            posts_dir.join(format!("post-{:02}.md", i)),
            format!(
                "---\ntitle: Post {i:02}\ndate: 2024-01-{i:02} 08:00:00\ntags: [rust]\n---\nBody of post {i}.\n"
            ),
        )
        .unwrap();
    }
}

#[test]
fn generates_paginated_listing() {
    let tmp = TempDir::new().unwrap();
    write_site(tmp.path(), "title: Test Blog\nper_page: 5\n", 12);

    let site = Site::new(tmp.path()).unwrap();
    site.generate().unwrap();

    let public = tmp.path().join("public");
    for page in ["posts/index.html", "posts/2/index.html", "posts/3/index.html"] {
        assert!(public.join(page).exists(), "missing {}", page);
    }
    assert!(!public.join("posts/4/index.html").exists());

    let second = fs::read_to_string(public.join("posts/2/index.html")).unwrap();
    assert!(second.contains("<title>Posts | Test Blog</title>"));
    assert!(second.contains("Post 07</a>"));
    assert!(second.contains("Post 03</a>"));
    assert!(!second.contains("Post 08</a>"));
    assert!(!second.contains("Post 02</a>"));

    let third = fs::read_to_string(public.join("posts/3/index.html")).unwrap();
    assert!(third.contains("Post 01</a>"));
    assert!(third.contains("Post 02</a>"));
}

#[test]
fn site_root_prefixes_links() {
    let tmp = TempDir::new().unwrap();
    write_site(tmp.path(), "root: /blog/\nper_page: 2\nposts_dir: archive\n", 3);

    let site = Site::new(tmp.path()).unwrap();
    site.generate().unwrap();

    let first = fs::read_to_string(tmp.path().join("public/archive/index.html")).unwrap();
    assert!(first.contains(r#"href="/blog/post-03/""#));
    assert!(first.contains(r#"href="/blog/archive/2/" rel="next""#));
    assert!(tmp.path().join("public/index.html").exists());
    assert!(tmp.path().join("public/post-01/index.html").exists());
}

#[test]
fn listing_view_binds_query_and_context() {
    let tmp = TempDir::new().unwrap();
    write_site(tmp.path(), "per_page: 10\n", 25);
    let site = Site::new(tmp.path()).unwrap();
    let posts = ContentLoader::new(&site).load_posts().unwrap();

    let contexts = paginate(posts.len(), site.config.per_page, &site.config.posts_base()).unwrap();
    assert_eq!(contexts.len(), 3);

    let ctx = &contexts[1];
    let data = PostsQuery::for_page(ctx).resolve(&posts, &site.config, chrono::Local::now());
    assert_eq!(data.edges().len(), 10);
    assert_eq!(data.edges()[0].node.frontmatter.title, "Post 15");

    let ViewNode::Layout { children } = posts_page(&data, ctx) else {
        panic!("listing must be rooted at a layout");
    };
    assert_eq!(
        children[2],
        ViewNode::PostCardContainer {
            posts: data.all_markdown_remark.edges.clone()
        }
    );
    assert_eq!(
        children[3],
        ViewNode::Pagination {
            page_count: 3,
            current_page: 2,
            base: "/posts".to_string()
        }
    );
}

#[test]
fn page_context_rejects_out_of_range() {
    assert!(PageContext::new("/posts", 6, 5, 10).is_err());
}

fn write_post(dir: &Path, name: &str, title: &str, date: &str) {
    let path = dir.join("source/_posts").join(name);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, format!("---\ntitle: {title}\ndate: {date}\n---\n{title} body.\n")).unwrap();
}

#[test]
fn post_named_like_the_listing_fails_generation() {
    let tmp = TempDir::new().unwrap();
    write_site(tmp.path(), "title: Clash\n", 0);
    write_post(tmp.path(), "a.md", "A", "2024-01-01");
    write_post(tmp.path(), "posts.md", "Posts", "2024-01-02");

    let site = Site::new(tmp.path()).unwrap();
    let err = site.generate().unwrap_err();
    assert!(matches!(
        err.downcast_ref::<postdeck::Error>(),
        Some(postdeck::Error::PathCollision { path, .. }) if path == "/posts/"
    ));
    assert!(!tmp.path().join("public/posts/index.html").exists());
}

#[test]
fn same_file_name_in_two_folders_fails_generation() {
    let tmp = TempDir::new().unwrap();
    write_site(tmp.path(), "title: Clash\n", 0);
    write_post(tmp.path(), "2023/hello.md", "Hello 2023", "2023-06-01");
    write_post(tmp.path(), "2024/hello.md", "Hello 2024", "2024-06-01");

    let site = Site::new(tmp.path()).unwrap();
    let err = site.generate().unwrap_err();
    let message = err.to_string();
    assert!(message.contains("/hello/"), "{}", message);
    assert!(message.contains("_posts/2024/hello.md"), "{}", message);
    assert!(message.contains("_posts/2023/hello.md"), "{}", message);
}
