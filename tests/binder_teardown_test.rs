//! Teardown and cancellation tests.
//!
//! All background work is scoped to the screen's lifetime: tearing the
//! screen down while a fetch or toggle is pending must abort it, and no
//! state mutation may land afterwards.

mod common;

use std::sync::Arc;
use std::time::Duration;

use newsdeck::adapters::mock::{MockRepository, MockShare};
use newsdeck::app::ArticleScreen;
use newsdeck::state::UiState;

use common::{sample_post, wait_for_post};

#[tokio::test]
async fn teardown_while_fetch_pending_leaves_state_untouched() {
    let repo = Arc::new(
        MockRepository::new()
            .with_post(sample_post("p1"))
            .with_fetch_delay(Duration::from_millis(30)),
    );
    let mut screen = ArticleScreen::new(repo, Arc::new(MockShare::new()));
    screen.open(Some("p1".to_string()));

    screen.teardown();

    // Give the aborted fetch plenty of time to have completed if it were
    // still alive, then settle whatever is queued.
    tokio::time::sleep(Duration::from_millis(80)).await;
    screen.drain_messages();
    assert!(matches!(screen.post_state(), UiState::Loading));
    assert!(screen.view_state(100, 30).is_none());
}

#[tokio::test]
async fn teardown_while_toggle_pending_cancels_the_mutation() {
    let repo = Arc::new(
        MockRepository::new()
            .with_post(sample_post("p1"))
            .with_toggle_delay(Duration::from_millis(30)),
    );
    let mut screen = ArticleScreen::new(repo.clone(), Arc::new(MockShare::new()));
    screen.open(Some("p1".to_string()));
    wait_for_post(&mut screen).await;

    screen.on_toggle_favorite();
    screen.teardown();

    tokio::time::sleep(Duration::from_millis(80)).await;
    assert!(repo.toggle_calls().is_empty());
    assert!(repo.favorites().is_empty());
}

#[tokio::test]
async fn rebinding_discards_the_superseded_fetch() {
    let repo = Arc::new(
        MockRepository::new()
            .with_post(sample_post("p1"))
            .with_post(sample_post("p2"))
            .with_fetch_delay(Duration::from_millis(10)),
    );
    let mut screen = ArticleScreen::new(repo, Arc::new(MockShare::new()));

    screen.open(Some("p1".to_string()));
    screen.open(Some("p2".to_string()));
    wait_for_post(&mut screen).await;

    // Only the newer key's result may occupy the state cell
    let view = screen.view_state(100, 30).unwrap();
    assert_eq!(view.post.id, "p2");

    // Any stale p1 completion that still arrives is discarded
    tokio::time::sleep(Duration::from_millis(40)).await;
    screen.drain_messages();
    assert_eq!(screen.view_state(100, 30).unwrap().post.id, "p2");
}

#[tokio::test]
async fn dropping_the_screen_aborts_background_tasks() {
    let repo = Arc::new(
        MockRepository::new()
            .with_post(sample_post("p1"))
            .with_toggle_delay(Duration::from_millis(30)),
    );
    {
        let mut screen = ArticleScreen::new(repo.clone(), Arc::new(MockShare::new()));
        screen.open(Some("p1".to_string()));
        wait_for_post(&mut screen).await;
        screen.on_toggle_favorite();
        // drop without explicit teardown
    }

    tokio::time::sleep(Duration::from_millis(80)).await;
    assert!(repo.toggle_calls().is_empty());
}
