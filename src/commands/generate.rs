//! Generate static files

use anyhow::Result;

use crate::content::loader::ContentLoader;
use crate::generator::Generator;
use crate::Site;

/// Load all posts and write the site to the public directory
pub fn run(site: &Site) -> Result<()> {
    let start = std::time::Instant::now();

    let posts = ContentLoader::new(site).load_posts()?;
    tracing::info!("Loaded {} posts", posts.len());

    Generator::new(site)?.generate(&posts)?;

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_run_generates_from_sources() {
        let tmp = TempDir::new().unwrap();
        let posts = tmp.path().join("source/_posts");
        fs::create_dir_all(&posts).unwrap();
        fs::write(
            posts.join("hello.md"),
            "---\ntitle: Hello\ndate: 2024-01-01\n---\nFirst post.",
        )
        .unwrap();

        let site = Site::new(tmp.path()).unwrap();
        run(&site).unwrap();

        let listing = fs::read_to_string(site.public_dir.join("posts/index.html")).unwrap();
        assert!(listing.contains(r#"<a href="/hello/">Hello</a>"#));
        assert!(site.public_dir.join("hello/index.html").exists());
    }
}
