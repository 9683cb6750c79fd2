//! Create a new post

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::Site;

/// Default scaffold when the site has no `scaffolds/post.md`
const DEFAULT_SCAFFOLD: &str = r#"---
title: {{ title }}
date: {{ date }}
tags:
categories:
---
"#;

/// Create a new post source file, returning its path
pub fn create_post(site: &Site, title: &str, slug: Option<&str>) -> Result<PathBuf> {
    let now = chrono::Local::now();
    let target_dir = site.posts_source_dir();
    fs::create_dir_all(&target_dir)?;

    let slug = slug.map(slug::slugify).unwrap_or_else(|| slug::slugify(title));
    let file_path = target_dir.join(format!("{}.md", slug));

    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let scaffold_path = site.base_dir.join("scaffolds").join("post.md");
    let scaffold = if scaffold_path.exists() {
        fs::read_to_string(&scaffold_path)?
    } else {
        DEFAULT_SCAFFOLD.to_string()
    };

    let content = scaffold
        .replace("{{ title }}", title)
        .replace("{{ date }}", &now.format("%Y-%m-%d %H:%M:%S").to_string());

    fs::write(&file_path, content)?;
    tracing::info!("Created: {:?}", file_path);

    Ok(file_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::FrontMatter;
    use tempfile::TempDir;

    #[test]
    fn test_create_post() {
        let tmp = TempDir::new().unwrap();
        let site = Site::new(tmp.path()).unwrap();

        let path = create_post(&site, "Hello World", None).unwrap();
        assert_eq!(path, site.posts_source_dir().join("hello-world.md"));

        let content = fs::read_to_string(&path).unwrap();
        let (fm, _) = FrontMatter::parse(&content);
        assert_eq!(fm.title.as_deref(), Some("Hello World"));
        assert!(fm.parse_date().is_some());
    }

    #[test]
    fn test_create_post_twice_fails() {
        let tmp = TempDir::new().unwrap();
        let site = Site::new(tmp.path()).unwrap();
        create_post(&site, "Dup", None).unwrap();
        assert!(create_post(&site, "Dup", None).is_err());
    }

    #[test]
    fn test_create_post_with_scaffold_and_slug() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("scaffolds")).unwrap();
        fs::write(
            tmp.path().join("scaffolds/post.md"),
            "---\ntitle: {{ title }}\ntags: draft\n---\n",
        )
        .unwrap();
        let site = Site::new(tmp.path()).unwrap();

        let path = create_post(&site, "Scaffolded", Some("Custom Name")).unwrap();
        assert!(path.ends_with("custom-name.md"));
        let (fm, _) = FrontMatter::parse(&fs::read_to_string(&path).unwrap());
        assert_eq!(fm.tags, vec!["draft"]);
    }
}
