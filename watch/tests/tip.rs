use llm::{LLMError, ResponseFormat};
use std::sync::Arc;
use watch::{SafetyTips, TipBoard, FALLBACK_TIP};

mod common;
use common::{GatedClient, ScriptedClient};

#[tokio::test]
async fn tip_is_trimmed_reply() {
    let client = Arc::new(ScriptedClient::replying(
        "  Introduce yourself to your neighbors this week!\n",
    ));
    let tips = SafetyTips::new(client.clone(), "gemini-2.5-flash");
    assert_eq!(
        tips.generate().await,
        "Introduce yourself to your neighbors this week!"
    );

    let req = &client.requests()[0];
    assert_eq!(req.format, ResponseFormat::Text);
    assert_eq!(req.max_output_tokens, Some(100));
    assert_eq!(req.thinking_budget, Some(50));
    assert!(req.prompt.contains("Do not include a title or preamble."));
}

#[tokio::test]
async fn failure_yields_literal_fallback() {
    let client = Arc::new(ScriptedClient::failing(LLMError::Network("offline".into())));
    let tips = SafetyTips::new(client, "m");
    let tip = tips.generate().await;
    assert_eq!(
        tip,
        "Always double-check that your doors and windows are locked before leaving the house or going to bed."
    );
    assert_eq!(tip, FALLBACK_TIP);
}

#[tokio::test]
async fn blank_reply_yields_fallback() {
    let client = Arc::new(ScriptedClient::replying("   "));
    let tips = SafetyTips::new(client, "m");
    assert_eq!(tips.generate().await, FALLBACK_TIP);
}

#[tokio::test]
async fn board_starts_empty_and_keeps_latest_tip() {
    let client = Arc::new(ScriptedClient::replying("First tip."));
    client.push(Ok("Second tip.".into()));
    let board = TipBoard::new(SafetyTips::new(client, "m"));
    assert_eq!(board.current(), "");

    assert_eq!(board.refresh().await.as_deref(), Some("First tip."));
    assert_eq!(board.current(), "First tip.");
    assert_eq!(board.refresh().await.as_deref(), Some("Second tip."));
    assert_eq!(board.current(), "Second tip.");
    assert!(!board.is_loading());
}

#[tokio::test]
async fn failed_refresh_shows_fallback() {
    let client = Arc::new(ScriptedClient::failing(LLMError::InvalidResponse));
    let board = TipBoard::new(SafetyTips::new(client, "m"));
    board.refresh().await;
    assert_eq!(board.current(), FALLBACK_TIP);
}

#[tokio::test]
async fn overlapping_refresh_is_skipped() {
    let client = Arc::new(GatedClient::new("Walk with a friend after dark."));
    let board = Arc::new(TipBoard::new(SafetyTips::new(client.clone(), "m")));

    let first = {
        let board = board.clone();
        tokio::spawn(async move { board.refresh().await })
    };
    client.started().await;
    assert!(board.is_loading());
    assert_eq!(board.refresh().await, None);
    assert_eq!(client.calls(), 1);

    client.release();
    assert_eq!(
        first.await.unwrap().as_deref(),
        Some("Walk with a friend after dark.")
    );
    assert!(!board.is_loading());
    assert_eq!(board.current(), "Walk with a friend after dark.");
}
