use async_trait::async_trait;
use std::path::PathBuf;
use tracing::{error, info};
use url::Url;

use crate::error::LoadError;
use crate::types::{validate_articles, Article};
use crate::{Error, Result};

/// Path of the article document, relative to the site root.
pub const DATA_PATH: &str = "/data/news.json";

#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Human readable location, for logs
    fn describe(&self) -> String;

    /// Fetches the raw JSON document
    async fn fetch(&self) -> Result<Vec<u8>>;
}

pub struct HttpSource {
    client: reqwest::Client,
    url: Url,
}

impl HttpSource {
    /// Points at `DATA_PATH` on the site rooted at `base_url`.
    pub fn new(base_url: &str) -> Result<Self> {
        let base = Url::parse(base_url).map_err(|e| Error::InvalidUrl(format!("{}: {}", base_url, e)))?;
        let url = base
            .join(DATA_PATH)
            .map_err(|e| Error::InvalidUrl(format!("{}: {}", base_url, e)))?;
        Ok(Self {
            client: reqwest::Client::new(),
            url,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl ArticleSource for HttpSource {
    fn describe(&self) -> String {
        self.url.to_string()
    }

    async fn fetch(&self) -> Result<Vec<u8>> {
        let response = self.client.get(self.url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status(status.as_u16()));
        }
        Ok(response.bytes().await?.to_vec())
    }
}

pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ArticleSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<Vec<u8>> {
        Ok(tokio::fs::read(&self.path).await?)
    }
}

/// `http(s)` URLs are treated as a site root, anything else as a file path.
pub fn source_from_location(location: &str) -> Result<Box<dyn ArticleSource>> {
    match Url::parse(location) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(Box::new(HttpSource::new(location)?)),
        _ => Ok(Box::new(FileSource::new(location))),
    }
}

pub fn parse_articles(bytes: &[u8]) -> Result<Vec<Article>> {
    let articles: Vec<Article> = serde_json::from_slice(bytes)?;
    validate_articles(&articles)?;
    Ok(articles)
}

/// Loads and validates the whole article list, or fails with a generic error.
pub async fn load_articles(source: &dyn ArticleSource) -> std::result::Result<Vec<Article>, LoadError> {
    info!("📥 Loading articles from {}", source.describe());
    let result = match source.fetch().await {
        Ok(bytes) => parse_articles(&bytes),
        Err(e) => Err(e),
    };
    match result {
        Ok(articles) => {
            info!("✨ Loaded {} articles", articles.len());
            Ok(articles)
        }
        Err(e) => {
            error!("Error loading articles: {}", e);
            Err(LoadError::new(e))
        }
    }
}
