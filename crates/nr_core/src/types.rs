use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;
use url::Url;

use crate::categories::Category;
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub category: String,
    pub title: String,
    pub summary: String,
    pub source: String,
    pub date: String,
    pub url: String,
}

impl Article {
    /// Parses `date` as a calendar day, if it is one.
    pub fn published_on(&self) -> Option<NaiveDate> {
        parse_day(&self.date)
    }

    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::Validation("article id is empty".to_string()));
        }
        if self.title.trim().is_empty() {
            return Err(Error::Validation(format!("article {} has an empty title", self.id)));
        }
        let url = Url::parse(self.url.trim())
            .map_err(|e| Error::InvalidUrl(format!("article {}: {}", self.id, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::InvalidUrl(format!(
                "article {}: unsupported scheme {}",
                self.id,
                url.scheme()
            )));
        }
        Ok(())
    }
}

/// Parses a `YYYY-MM-DD` display date.
pub fn parse_day(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()
}

/// Checks every article and the uniqueness of ids across the list.
///
/// Articles whose category is not in the table are accepted; they just never
/// land in a category section.
pub fn validate_articles(articles: &[Article]) -> Result<()> {
    let mut seen = HashSet::with_capacity(articles.len());
    for article in articles {
        article.validate()?;
        if !seen.insert(article.id.as_str()) {
            return Err(Error::Validation(format!("duplicate article id {}", article.id)));
        }
        if Category::find(&article.category).is_none() {
            tracing::warn!("🏷️ Article {} has unknown category {:?}", article.id, article.category);
        }
    }
    Ok(())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(serde_json::Number),
}

fn deserialize_id<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::Article;

    pub fn article(id: &str, category: &str) -> Article {
        Article {
            id: id.to_string(),
            category: category.to_string(),
            title: format!("Title {}", id),
            summary: format!("Summary {}", id),
            source: "연합뉴스".to_string(),
            date: "2025-01-15".to_string(),
            url: format!("https://news.example.com/{}", id),
        }
    }
}
