//! Page templates
//!
//! [`posts_page`] builds the listing as a [`ViewNode`] tree. The
//! [`TemplateRenderer`] turns such a tree into HTML with the embedded Tera
//! templates, one template per child component.

mod view;

pub use view::{posts_page, ViewNode, PAGE_TITLE_CLASS, POSTS_TITLE};

use anyhow::{anyhow, Result};
use serde::Serialize;
use tera::{Context, Tera};

use crate::config::SiteConfig;
use crate::helpers::{days_ago_label, url_for};
use crate::pagination::page_path;
use crate::query::Edge;

/// Template renderer with the embedded templates
pub struct TemplateRenderer {
    tera: Tera,
}

/// Site-wide values every page needs
#[derive(Debug, Clone, Serialize)]
pub struct SiteData {
    pub title: String,
    pub description: String,
    pub author: String,
    pub language: String,
    /// Home page URL path
    pub home: String,
    /// Posts listing URL path
    pub posts: String,
    pub year: String,
}

impl SiteData {
    pub fn new(config: &SiteConfig, year: i32) -> Self {
        Self {
            title: html_escape(&config.title),
            description: html_escape(&config.description),
            author: html_escape(&config.author),
            language: config.language.clone(),
            home: url_for(config, ""),
            posts: page_path(&config.posts_base(), 1),
            year: year.to_string(),
        }
    }
}

/// Values collected from the SEO directive
#[derive(Debug, Clone, Serialize)]
pub struct SeoData {
    pub title: String,
    pub description: String,
    pub canonical: String,
}

/// One post card as the card template sees it
#[derive(Debug, Clone, Serialize)]
pub struct CardData {
    pub title: String,
    pub url: String,
    pub days_ago: String,
    pub time_to_read: u32,
    pub excerpt: String,
    pub tags: Vec<String>,
    pub categories: Vec<String>,
    pub image: Option<CardImage>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CardImage {
    pub src: String,
    pub width: u32,
}

/// One numbered link of the pagination control
#[derive(Debug, Clone, Serialize)]
pub struct PageLink {
    pub number: usize,
    pub url: String,
    pub current: bool,
}

/// A single post page
#[derive(Debug, Clone, Serialize)]
pub struct PostPageData {
    pub title: String,
    pub date: String,
    pub datetime: String,
    pub time_to_read: u32,
    pub content: String,
    pub tags: Vec<String>,
}

/// Link to a neighbouring post
#[derive(Debug, Clone, Serialize)]
pub struct NavPost {
    pub title: String,
    pub path: String,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // Output is HTML assembled from pre-escaped pieces; Tera's escaping
        // would also rewrite the slashes in every URL
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("html/layout.html")),
            ("post.html", include_str!("html/post.html")),
            (
                "partials/heading.html",
                include_str!("html/partials/heading.html"),
            ),
            (
                "partials/post_cards.html",
                include_str!("html/partials/post_cards.html"),
            ),
            (
                "partials/pagination.html",
                include_str!("html/partials/pagination.html"),
            ),
        ])?;

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }

    /// Render a view tree rooted at a layout node into a full HTML document.
    ///
    /// `path` is the URL path of the page, used for the canonical link.
    pub fn render_view(
        &self,
        view: &ViewNode,
        site: &SiteData,
        config: &SiteConfig,
        path: &str,
    ) -> Result<String> {
        let ViewNode::Layout { children } = view else {
            return Err(anyhow!("view tree must be rooted at a layout"));
        };

        let mut seo = SeoData {
            title: site.title.clone(),
            description: site.description.clone(),
            canonical: html_escape(&format!("{}{}", config.url.trim_end_matches('/'), path)),
        };

        let mut body = String::new();
        for child in children {
            match child {
                // Head-only directive, contributes nothing to the body
                ViewNode::Seo { title } => seo.title = html_escape(title),
                other => body.push_str(&self.render_component(other, config)?),
            }
        }

        self.render_document(site, &seo, &body)
    }

    /// Render a post page
    pub fn render_post(
        &self,
        post: &PostPageData,
        newer: Option<&NavPost>,
        older: Option<&NavPost>,
        site: &SiteData,
        seo: &SeoData,
    ) -> Result<String> {
        let mut context = Context::new();
        context.insert("post", post);
        context.insert("newer", &newer);
        context.insert("older", &older);
        let body = self.render("post.html", &context)?;
        self.render_document(site, seo, &body)
    }

    /// Wrap a rendered body in the site layout
    fn render_document(&self, site: &SiteData, seo: &SeoData, body: &str) -> Result<String> {
        let mut context = Context::new();
        context.insert("site", site);
        context.insert("seo", seo);
        context.insert("body", body);
        self.render("layout.html", &context)
    }

    /// Render one body component
    fn render_component(&self, node: &ViewNode, config: &SiteConfig) -> Result<String> {
        let mut context = Context::new();
        match node {
            ViewNode::Heading { class_name, text } => {
                context.insert("class_name", &html_escape(class_name));
                context.insert("text", &html_escape(text));
                self.render("partials/heading.html", &context)
            }
            ViewNode::PostCardContainer { posts } => {
                let cards: Vec<CardData> = posts.iter().map(|e| card_data(e, config)).collect();
                context.insert("cards", &cards);
                self.render("partials/post_cards.html", &context)
            }
            ViewNode::Pagination {
                page_count,
                current_page,
                base,
            } => {
                let links: Vec<PageLink> = (1..=*page_count)
                    .map(|number| PageLink {
                        number,
                        url: page_path(base, number),
                        current: number == *current_page,
                    })
                    .collect();
                let prev = (*current_page > 1).then(|| page_path(base, current_page - 1));
                let next = (current_page < page_count).then(|| page_path(base, current_page + 1));

                context.insert("page_count", page_count);
                context.insert("links", &links);
                context.insert("prev", &prev);
                context.insert("next", &next);
                self.render("partials/pagination.html", &context)
            }
            ViewNode::Layout { children } => {
                let mut html = String::new();
                for child in children {
                    html.push_str(&self.render_component(child, config)?);
                }
                Ok(html)
            }
            ViewNode::Seo { .. } => Ok(String::new()),
        }
    }
}

fn card_data(edge: &Edge, config: &SiteConfig) -> CardData {
    let node = &edge.node;
    let fm = &node.frontmatter;
    CardData {
        title: html_escape(&fm.title),
        url: url_for(config, &format!("{}/", node.fields.slug)),
        days_ago: days_ago_label(fm.days_ago),
        time_to_read: node.time_to_read,
        // Author summary wins over the generated excerpt
        excerpt: html_escape(fm.excerpt.as_deref().unwrap_or(&node.excerpt)),
        tags: fm.tags.iter().map(|t| html_escape(t)).collect(),
        categories: fm.categories.iter().map(|c| html_escape(c)).collect(),
        image: fm.featured_image.as_ref().map(|image| CardImage {
            src: html_escape(&image.src),
            width: image.width,
        }),
    }
}

/// Simple HTML escaping
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
