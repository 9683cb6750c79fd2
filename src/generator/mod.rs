//! Generator module - writes the listing and post pages to the public dir

use anyhow::Result;
use chrono::{DateTime, Datelike, Local};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use walkdir::WalkDir;

use crate::content::Post;
use crate::error::Error;
use crate::helpers::{date_xml, format_date, url_for};
use crate::pagination::{paginate, PageContext};
use crate::query::{time_to_read, PostsQuery};
use crate::templates::{
    html_escape, posts_page, NavPost, PostPageData, SeoData, SiteData, TemplateRenderer,
};
use crate::Site;

/// Static site generator
pub struct Generator {
    site: Site,
    renderer: TemplateRenderer,
}

impl Generator {
    /// Create a new generator
    pub fn new(site: &Site) -> Result<Self> {
        Ok(Self {
            site: site.clone(),
            renderer: TemplateRenderer::new()?,
        })
    }

    /// Generate the entire site
    pub fn generate(&self, posts: &[Post]) -> Result<()> {
        self.generate_at(posts, Local::now())
    }

    /// Generate the entire site as of `now`
    pub fn generate_at(&self, posts: &[Post], now: DateTime<Local>) -> Result<()> {
        let config = &self.site.config;

        let mut sorted_posts = posts.to_vec();
        sorted_posts.sort_by(|a, b| b.date.cmp(&a.date));

        let contexts = paginate(sorted_posts.len(), config.per_page, &config.posts_base())?;
        self.check_output_paths(&contexts, &sorted_posts)?;

        fs::create_dir_all(&self.site.public_dir)?;
        self.copy_source_assets()?;

        let site_data = SiteData::new(config, now.year());

        self.generate_listing_pages(&contexts, &sorted_posts, &site_data, now)?;
        tracing::info!("Generated {} listing pages", contexts.len());

        self.generate_post_pages(&sorted_posts, &site_data)?;
        tracing::info!("Generated {} post pages", sorted_posts.len());

        Ok(())
    }

    /// Fail before writing anything if two pages would land on the same file
    fn check_output_paths(&self, contexts: &[PageContext], posts: &[Post]) -> Result<(), Error> {
        let mut pages: Vec<(String, String)> = contexts
            .iter()
            .map(|ctx| (ctx.path(), format!("listing page {}", ctx.current_page)))
            .collect();

        // Home only gets its own copy when the listing lives elsewhere
        let home = url_for(&self.site.config, "");
        if !pages.iter().any(|(path, _)| *path == home) {
            pages.push((home, "the home page".to_string()));
        }

        pages.extend(
            posts
                .iter()
                .map(|post| (post.path.clone(), format!("post {}", post.source))),
        );

        let mut owners: HashMap<PathBuf, String> = HashMap::new();
        for (url_path, owner) in pages {
            let dest = self.output_path(&url_path);
            if let Some(first) = owners.get(&dest) {
                return Err(Error::PathCollision {
                    path: url_path,
                    first: first.clone(),
                    second: owner,
                });
            }
            owners.insert(dest, owner);
        }

        Ok(())
    }

    /// Render every page of the posts listing
    fn generate_listing_pages(
        &self,
        contexts: &[PageContext],
        posts: &[Post],
        site_data: &SiteData,
        now: DateTime<Local>,
    ) -> Result<()> {
        let home = url_for(&self.site.config, "");

        for ctx in contexts {
            let html = self.render_listing_page(posts, ctx, site_data, now)?;
            self.write_page(&ctx.path(), &html)?;

            // Site root shows the first listing page unless the listing lives there
            if ctx.current_page == 1 && ctx.path() != home {
                self.write_page(&home, &html)?;
            }
        }

        Ok(())
    }

    /// Query, bind and render one listing page
    pub fn render_listing_page(
        &self,
        posts: &[Post],
        ctx: &PageContext,
        site_data: &SiteData,
        now: DateTime<Local>,
    ) -> Result<String> {
        let data = PostsQuery::for_page(ctx).resolve(posts, &self.site.config, now);
        let view = posts_page(&data, ctx);
        self.renderer
            .render_view(&view, site_data, &self.site.config, &ctx.path())
    }

    /// Render one page per post
    fn generate_post_pages(&self, posts: &[Post], site_data: &SiteData) -> Result<()> {
        let config = &self.site.config;
        let nav = |p: &Post| NavPost {
            title: html_escape(&p.title),
            path: p.path.clone(),
        };

        for post in posts {
            let page = PostPageData {
                title: html_escape(&post.title),
                date: format_date(&post.date, &config.date_format),
                datetime: date_xml(&post.date),
                time_to_read: time_to_read(&post.text, config.words_per_minute),
                content: post.content.clone(),
                tags: post
                    .tags
                    .iter()
                    .map(|t| html_escape(t))
                    .collect(),
            };
            let seo = SeoData {
                title: page.title.clone(),
                description: html_escape(
                    post.summary.as_deref().unwrap_or(&site_data.description),
                ),
                canonical: html_escape(&post.permalink),
            };
            let newer = post.prev(posts).map(nav);
            let older = post.next(posts).map(nav);

            let html =
                self.renderer
                    .render_post(&page, newer.as_ref(), older.as_ref(), site_data, &seo)?;
            self.write_page(&post.path, &html)?;
        }

        Ok(())
    }

    /// Output file for a URL path: `<public>/<path without root>/index.html`
    pub fn output_path(&self, url_path: &str) -> PathBuf {
        let root = format!("{}/", self.site.config.root.trim_end_matches('/'));
        let relative = url_path
            .strip_prefix(root.as_str())
            .unwrap_or(url_path)
            .trim_matches('/');

        let mut path = self.site.public_dir.clone();
        for segment in relative.split('/').filter(|s| !s.is_empty()) {
            path.push(segment);
        }
        path.join("index.html")
    }

    fn write_page(&self, url_path: &str, html: &str) -> Result<()> {
        let dest = self.output_path(url_path);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&dest, html)?;
        tracing::debug!("Wrote {:?}", dest);
        Ok(())
    }

    /// Copy non-markdown files (images and the like) from source to public
    fn copy_source_assets(&self) -> Result<()> {
        let source_dir = &self.site.source_dir;
        if !source_dir.exists() {
            return Ok(());
        }

        for entry in WalkDir::new(source_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let ext = path.extension().and_then(|e| e.to_str());
            if matches!(ext, Some("md") | Some("markdown")) {
                continue;
            }

            let relative = path.strip_prefix(source_dir)?;
            if relative
                .components()
                .any(|c| c.as_os_str().to_string_lossy().starts_with('.'))
            {
                continue;
            }

            let dest = self.site.public_dir.join(relative);
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(path, &dest)?;
        }

        Ok(())
    }
}
