//! Common test utilities for integration tests.
//!
//! Provides post fixtures, a screen pump that applies background
//! messages until a condition holds, and a buffer-to-text helper for
//! render assertions.

#![allow(dead_code)]

use std::time::Duration;

use newsdeck::app::ArticleScreen;
use newsdeck::models::Post;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

/// A post fixture with predictable fields derived from `id`.
pub fn sample_post(id: &str) -> Post {
    Post {
        id: id.to_string(),
        title: format!("Title {id}"),
        url: format!("https://example.com/{id}"),
        publication: Some("The Daily Crab".to_string()),
        author: Some("Mara Ilves".to_string()),
        paragraphs: vec![
            "First paragraph of the article body.".to_string(),
            "Second paragraph of the article body.".to_string(),
        ],
    }
}

/// Apply queued background messages until `condition` holds, failing the
/// test if it doesn't within one second.
pub async fn pump_until(screen: &mut ArticleScreen, condition: impl Fn(&ArticleScreen) -> bool) {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(1);
    while !condition(screen) {
        let message = tokio::time::timeout_at(deadline, screen.recv())
            .await
            .expect("screen did not reach expected state in time")
            .expect("screen message channel closed");
        screen.apply(message);
    }
}

/// Wait until the bound post has loaded.
pub async fn wait_for_post(screen: &mut ArticleScreen) {
    pump_until(screen, |s| s.post_state().is_success()).await;
}

/// Flatten the test terminal's buffer into newline-joined text.
pub fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer.cell((x, y)).map(|c| c.symbol()).unwrap_or(" "));
        }
        out.push('\n');
    }
    out
}
