//! List site content

use anyhow::Result;
use std::collections::BTreeMap;
use std::fmt::Write;

use crate::content::loader::ContentLoader;
use crate::content::Post;
use crate::error::Error;
use crate::pagination::paginate;
use crate::Site;

/// Print site content of the given type
pub fn run(site: &Site, content_type: &str) -> Result<()> {
    let posts = ContentLoader::new(site).load_posts()?;
    print!("{}", format_listing(site, &posts, content_type)?);
    Ok(())
}

/// Format a listing of `content_type` (post, page, tag or category)
pub fn format_listing(site: &Site, posts: &[Post], content_type: &str) -> Result<String> {
    let mut out = String::new();

    match content_type {
        "post" | "posts" => {
            writeln!(out, "Posts ({}):", posts.len())?;
            for post in posts {
                writeln!(
                    out,
                    "  {} - {} [{}]",
                    post.date.format("%Y-%m-%d"),
                    post.title,
                    post.source
                )?;
            }
        }
        "page" | "pages" => {
            let pages = paginate(posts.len(), site.config.per_page, &site.config.posts_base())?;
            writeln!(out, "Listing pages ({}):", pages.len())?;
            for ctx in pages {
                let shown = posts.len().saturating_sub(ctx.skip).min(ctx.limit);
                writeln!(out, "  {} ({} posts)", ctx.path(), shown)?;
            }
        }
        "tag" | "tags" => {
            let tags = count_terms(posts.iter().flat_map(|p| p.tags.iter()));
            write_terms(&mut out, "Tags", tags)?;
        }
        "category" | "categories" => {
            let categories = count_terms(posts.iter().flat_map(|p| p.categories.iter()));
            write_terms(&mut out, "Categories", categories)?;
        }
        other => return Err(Error::UnknownListType(other.to_string()).into()),
    }

    Ok(out)
}

fn count_terms<'a>(terms: impl Iterator<Item = &'a String>) -> BTreeMap<&'a str, usize> {
    let mut counts = BTreeMap::new();
    for term in terms {
        *counts.entry(term.as_str()).or_insert(0) += 1;
    }
    counts
}

fn write_terms(out: &mut String, label: &str, counts: BTreeMap<&str, usize>) -> Result<()> {
    writeln!(out, "{} ({}):", label, counts.len())?;
    let mut sorted: Vec<_> = counts.into_iter().collect();
    // Most used first, alphabetical among equals
    sorted.sort_by(|a, b| b.1.cmp(&a.1));
    for (term, count) in sorted {
        writeln!(out, "  {} ({})", term, count)?;
    }
    Ok(())
}
