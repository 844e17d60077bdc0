//! Run with: cargo run --bin fetch_transcript -- <video-url-or-id> [language]

use std::time::Instant;

use vidscript::config::{http, settings::ServiceSettings};
use vidscript::services::{
    self,
    acquisition::{Acquisition, AcquisitionError},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let mut args = std::env::args().skip(1);
    let Some(reference) = args.next() else {
        eprintln!("Usage: fetch_transcript <video-url-or-id> [language]");
        std::process::exit(1);
    };
    let language = args.next().unwrap_or_else(|| "en".to_string());

    let settings = ServiceSettings::from_env()?;
    let client = http::client(settings.timeout)?;
    let provider = services::transcript_provider(settings.provider, client)?;
    let acquisition = Acquisition::new(provider);

    println!("\n🎬 Fetching transcript via {}", acquisition.provider_name());
    println!("Video: {}  Language: {}\n", reference, language);

    let start = Instant::now();
    let result = acquisition.fetch(&reference, &language).await;
    let elapsed = start.elapsed().as_millis();

    match result {
        Ok(transcript) => {
            println!(
                "✓ {} ({} captions) in {}ms, {} chars\n",
                transcript.language_used,
                transcript.mode,
                elapsed,
                transcript.text.chars().count()
            );
            println!("{}", transcript.text);
        }
        Err(AcquisitionError::NotFound { attempts }) => {
            println!("❌ No transcript after {}ms. Attempts:", elapsed);
            for attempt in attempts {
                println!("  - {} / {}: {}", attempt.language, attempt.mode, attempt.error);
            }
        }
        Err(e) => println!("❌ {}", e),
    }

    Ok(())
}
