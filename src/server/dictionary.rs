//! Online financial dictionary (Financial Modeling Prep).

use std::collections::HashSet;
use std::sync::LazyLock;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::DictionaryError;

/// NLTK's English stop-word list.
const STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
    "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't",
];

static STOP_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOP_WORDS.iter().copied().collect());

/// Pull the likely financial term out of a question: the alphabetic words
/// that aren't stop words, joined by spaces.
pub fn extract_term(text: &str) -> String {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty() && w.chars().all(char::is_alphabetic))
        .filter(|w| !STOP_SET.contains(*w))
        .collect::<Vec<_>>()
        .join(" ")
}

/// A source of definitions for financial terms.
#[async_trait]
pub trait DefinitionSource: Send + Sync {
    /// Look up one query. `Ok(None)` means "no entry".
    async fn query(&self, term: &str) -> Result<Option<String>, DictionaryError>;
}

#[derive(Debug, Deserialize)]
struct DictionaryEntry {
    #[serde(default)]
    definition: Option<String>,
}

/// Client for the `financial-dictionary` endpoint.
pub struct FmpDictionary {
    client: reqwest::Client,
    base_url: String,
    api_key: SecretString,
}

impl FmpDictionary {
    pub fn new(base_url: &str, api_key: SecretString) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }
}

#[async_trait]
impl DefinitionSource for FmpDictionary {
    async fn query(&self, term: &str) -> Result<Option<String>, DictionaryError> {
        let resp = self
            .client
            .get(format!("{}/financial-dictionary", self.base_url))
            .query(&[("query", term), ("apikey", self.api_key.expose_secret())])
            .send()
            .await
            .map_err(|e| DictionaryError::Request(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(DictionaryError::BadStatus {
                status: status.as_u16(),
            });
        }

        let body = resp
            .text()
            .await
            .map_err(|e| DictionaryError::Request(e.to_string()))?;
        let entries: Vec<DictionaryEntry> = serde_json::from_str(&body)?;
        Ok(entries.into_iter().next().and_then(|e| e.definition))
    }
}

/// Try the whole message first, then the extracted term.
///
/// Lookup failures are logged and treated as "no definition".
pub async fn find_definition(source: &dyn DefinitionSource, message: &str) -> Option<String> {
    if message.trim().is_empty() {
        return None;
    }

    match source.query(message).await {
        Ok(Some(definition)) => return Some(definition),
        Ok(None) => {}
        Err(e) => warn!(error = %e, "Dictionary lookup failed"),
    }

    let term = extract_term(message);
    if term.is_empty() {
        return None;
    }
    debug!(%term, "Retrying dictionary lookup with extracted term");

    match source.query(&term).await {
        Ok(definition) => definition,
        Err(e) => {
            warn!(error = %e, %term, "Dictionary lookup failed");
            None
        }
    }
}
