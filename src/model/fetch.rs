use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use reqwest::blocking::Client as HttpClient;
use tracing::info;

const USER_AGENT: &str = concat!("lung-triage/", env!("CARGO_PKG_VERSION"));

/// Downloads a model artifact to `dest`. Implementations make exactly one
/// attempt.
pub trait ArtifactFetcher: Send + Sync {
    fn fetch(&self, url: &str, dest: &Path) -> Result<u64>;
}

pub struct HttpFetcher {
    client: HttpClient,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = HttpClient::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { client })
    }
}

impl ArtifactFetcher for HttpFetcher {
    fn fetch(&self, url: &str, dest: &Path) -> Result<u64> {
        if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        let mut response = self
            .client
            .get(url)
            .send()
            .with_context(|| format!("failed to send request to {url}"))?
            .error_for_status()
            .with_context(|| format!("download of {url} was refused"))?;

        // Written to a sibling first so a broken transfer never looks cached.
        let partial = partial_path(dest);
        let mut file = fs::File::create(&partial)
            .with_context(|| format!("failed to create {}", partial.display()))?;
        let written = match response.copy_to(&mut file) {
            Ok(n) => n,
            Err(err) => {
                drop(file);
                let _ = fs::remove_file(&partial);
                return Err(err).with_context(|| format!("failed to read body from {url}"));
            }
        };
        drop(file);
        fs::rename(&partial, dest)
            .with_context(|| format!("failed to move download into {}", dest.display()))?;

        info!(url, dest = %dest.display(), bytes = written, "model_artifact_downloaded");
        Ok(written)
    }
}

fn partial_path(dest: &Path) -> PathBuf {
    let mut name = dest
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".part");
    dest.with_file_name(name)
}
