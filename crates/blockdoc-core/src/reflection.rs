//! Daily reflection documents.
//!
//! An administrator submits a reflection with a Markdown body. The draft is
//! validated and its body converted to stored block records, producing the
//! document handed to the storage collaborator.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::parser::markdown_to_blocks;
use crate::portable::{to_portable, PortableBlock};
use crate::serializer::portable_to_markdown;

/// Document type name used by storage.
pub const REFLECTION_TYPE: &str = "dailyReflection";

/// A reflection as submitted, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReflectionDraft {
    #[serde(default)]
    pub title: String,
    /// Calendar date, `YYYY-MM-DD`.
    #[serde(default)]
    pub date: String,
    /// Markdown body.
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: Option<String>,
    /// Scripture reference, e.g. `John 3:16`.
    #[serde(default)]
    pub scripture: Option<String>,
    #[serde(default)]
    pub is_published: Option<bool>,
}

/// A validated reflection ready for storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReflectionDocument {
    #[serde(rename = "_type")]
    pub document_type: String,
    pub title: String,
    pub date: NaiveDate,
    pub content: Vec<PortableBlock>,
    pub is_published: bool,
    /// Creation time, RFC 3339 with millisecond precision.
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scripture: Option<String>,
}

impl ReflectionDraft {
    pub fn new(
        title: impl Into<String>,
        date: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            date: date.into(),
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_scripture(mut self, scripture: impl Into<String>) -> Self {
        self.scripture = Some(scripture.into());
        self
    }

    pub fn published(mut self, published: bool) -> Self {
        self.is_published = Some(published);
        self
    }

    /// Validate the draft and convert its body.
    ///
    /// Title, date and content are required, checked in that order. Blank
    /// author and scripture values are dropped.
    pub fn into_document(self, created_at: DateTime<Utc>) -> Result<ReflectionDocument> {
        let title = required("title", self.title)?;
        let date = required("date", self.date)?;
        let content = required("content", self.content)?;

        let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
            .map_err(|_| Error::InvalidDate(date.clone()))?;

        let blocks = markdown_to_blocks(&content);
        log::debug!("reflection '{}' for {} has {} blocks", title, date, blocks.len());

        Ok(ReflectionDocument {
            document_type: REFLECTION_TYPE.to_string(),
            title,
            date,
            content: to_portable(&blocks),
            is_published: self.is_published.unwrap_or(false),
            created_at: created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            author: optional(self.author),
            scripture: optional(self.scripture),
        })
    }
}

impl ReflectionDocument {
    /// Render the stored body back to Markdown for display.
    pub fn to_markdown(&self) -> String {
        portable_to_markdown(&self.content)
    }
}

fn required(field: &'static str, value: String) -> Result<String> {
    if value.trim().is_empty() {
        return Err(Error::MissingField(field));
    }
    Ok(value)
}

fn optional(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
