//! Local preview server for the generated site

use anyhow::Result;
use axum::Router;
use std::net::SocketAddr;
use std::path::PathBuf;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::Site;

/// Serve the public directory until interrupted
pub async fn start(site: &Site, ip: &str, port: u16) -> Result<()> {
    let addr = bind_addr(ip, port)?;
    let app = router(site.public_dir.clone());

    let url = format!("http://{}:{}{}", ip, port, site.config.root);
    println!("Server running at {}", url);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Router serving static files, with `index.html` for directory paths
pub fn router(public_dir: PathBuf) -> Router {
    Router::new()
        .fallback_service(ServeDir::new(public_dir).append_index_html_on_directories(true))
        .layer(TraceLayer::new_for_http())
}

/// Parse the listen address; "localhost" maps to the IPv4 loopback
fn bind_addr(ip: &str, port: u16) -> Result<SocketAddr> {
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    Ok(format!("{}:{}", bind_ip, port).parse()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_addr() {
        assert_eq!(
            bind_addr("localhost", 4000).unwrap(),
            "127.0.0.1:4000".parse::<SocketAddr>().unwrap()
        );
        assert_eq!(bind_addr("0.0.0.0", 80).unwrap().port(), 80);
        assert!(bind_addr("not an ip", 80).is_err());
    }
}
