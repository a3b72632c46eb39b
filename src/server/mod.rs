//! Chat API server: the stateless `POST /api/chat` backend the widget
//! talks to.

pub mod calc;
pub mod dictionary;
pub mod glossary;
pub mod responder;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use tracing::info;

use crate::config::ServerConfig;
use dictionary::{DefinitionSource, FmpDictionary};

pub use responder::Responder;
pub use routes::{ChatApiState, chat_routes};

/// Build the full chat API router from configuration.
///
/// Without an API key the online dictionary is skipped.
pub fn app(config: &ServerConfig) -> Router {
    let dictionary: Option<Arc<dyn DefinitionSource>> =
        config.dictionary_api_key.clone().map(|key| {
            info!(url = %config.dictionary_url, "Online dictionary enabled");
            Arc::new(FmpDictionary::new(&config.dictionary_url, key)) as Arc<dyn DefinitionSource>
        });
    if dictionary.is_none() {
        info!("No dictionary API key, online definitions disabled");
    }

    chat_routes(ChatApiState {
        responder: Arc::new(Responder::new(dictionary)),
    })
}
