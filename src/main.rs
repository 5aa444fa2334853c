use std::env;

use deck_quiz::question::{save_question, QuestionMaker};
use deck_quiz::utilities::config::CONFIG;
use log::{error, info, warn};
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    info!("Starting");

    let deck_code = env::args()
        .nth(1)
        .or_else(|| env::var("DECK_CODE").ok())
        .filter(|code| !code.trim().is_empty())
        .ok_or("Usage: deck_quiz <DECK_CODE> (or set DECK_CODE)")?;

    let cancel = CancellationToken::new();
    let ctrl_c_token = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Interrupted, cancelling");
            ctrl_c_token.cancel();
        }
    });

    let maker = QuestionMaker::from_config(&CONFIG)?;
    match maker.make_question(deck_code.trim(), &cancel).await {
        Ok(question) => {
            let (image_path, answer_path) = save_question(&question, &CONFIG.output_dir)?;
            info!(
                "Deck {} done. Question: {}, answer: {}",
                question.deck.code, image_path, answer_path
            );
            Ok(())
        }
        Err(e) => {
            if e.is_client_error() {
                warn!(
                    "Deck {} rejected (status {}): {}",
                    deck_code,
                    e.status_code(),
                    e
                );
            } else {
                error!(
                    "Failed to make question for {} (status {}): {}",
                    deck_code,
                    e.status_code(),
                    e
                );
            }
            Err(e.into())
        }
    }
}
