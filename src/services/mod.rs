pub mod acquisition;
pub mod llm;
pub mod supadata;
pub mod transcript;

use reqwest::Client;
use std::sync::Arc;

use crate::config::settings::ProviderKind;
use supadata::SupadataProvider;
use transcript::{ProviderError, TimedTextProvider, TranscriptProvider};

pub fn transcript_provider(
    kind: ProviderKind,
    client: Client,
) -> Result<Arc<dyn TranscriptProvider>, ProviderError> {
    Ok(match kind {
        ProviderKind::YouTube => Arc::new(TimedTextProvider::new(client)),
        ProviderKind::Supadata => Arc::new(SupadataProvider::new(client)?),
    })
}
