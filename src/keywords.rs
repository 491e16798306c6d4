//! Keyword sequences and the language extension table
//!
//! A keyword sequence reads `<language> [category...] <name>`. The first
//! keyword picks the file extension, the last one names the template and
//! everything in between becomes a folder below `templates/`.

use crate::error::{Error, Result};

/// Non-empty, ordered list of keywords identifying one template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keywords(Vec<String>);

impl Keywords {
    /// Validate a raw keyword list. Fails with [`Error::EmptyKeywords`] on an
    /// empty list.
    pub fn new<I, S>(keywords: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keywords: Vec<String> = keywords.into_iter().map(Into::into).collect();
        if keywords.is_empty() {
            return Err(Error::EmptyKeywords);
        }
        Ok(Self(keywords))
    }

    /// Language tag (first keyword)
    pub fn language(&self) -> &str {
        &self.0[0]
    }

    /// Template name (last keyword)
    pub fn name(&self) -> &str {
        &self.0[self.0.len() - 1]
    }

    /// Category folders: the keywords between the language tag and the name
    pub fn folders(&self) -> &[String] {
        match self.0.len() {
            0 | 1 => &[],
            n => &self.0[1..n - 1],
        }
    }

    /// File name of the template: name plus the language extension
    pub fn file_name(&self) -> String {
        format!("{}{}", self.name(), extension_for(self.language()))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

/// Map a language tag to a file extension (with leading dot).
///
/// The table is closed: unknown tags map to an empty extension.
pub fn extension_for(language: &str) -> &'static str {
    match language {
        "java" => ".java",
        "python" => ".py",
        "go" => ".go",
        _ => "",
    }
}
