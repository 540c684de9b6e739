//! End-to-end poll lifecycle over a file-backed store.
//!
//! Walks the full flow a host application drives: draft a poll, publish it,
//! reload it from disk in a fresh engine (a new "browser session"), vote once,
//! watch the countdown and expiry flip on the session clock, and attach
//! comments that outlive the poll.

use pollbox::time::{format_remaining, HOUR_MS};
use pollbox::{JsonFileStore, PollDraft, PollDuration, PollEngine, ViewSession};

#[test]
fn poll_lifecycle_over_file_store() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("store.json");
    let created_at = 1_700_000_000_000;

    // Compose and publish.
    let mut draft = PollDraft::new()
        .with_question("  Where should we get lunch?  ")
        .with_duration(PollDuration::TwelveHours)
        .with_hidden_results(true);
    let first = draft.options[0].id.clone();
    let second = draft.options[1].id.clone();
    draft.set_option(&first, "Tacos");
    draft.set_option(&second, "Ramen");
    draft.add_option(); // left as placeholder "Option 3"

    let engine = PollEngine::new(JsonFileStore::open(&path));
    let published = engine.publish(&draft, created_at).unwrap();
    assert_eq!(published.question, "Where should we get lunch?");
    assert_eq!(published.options.len(), 3);
    assert_eq!(published.expires_at, created_at + 12 * HOUR_MS);
    drop(engine);

    // A fresh engine over the same file sees the poll: this is the shared
    // link being opened elsewhere.
    let engine = PollEngine::new(JsonFileStore::open(&path));
    let mut poll = engine.current_poll().expect("poll persisted to disk");
    assert_eq!(poll, published);

    // Results are configured hidden and the poll is live, so they stay
    // hidden; the countdown is running.
    let mut session = ViewSession::new(created_at);
    assert!(!poll.show_results(session.now()));
    assert_eq!(
        format_remaining(poll.expires_at, session.now()),
        "12h 0m 0s"
    );

    // Vote once; a second attempt in the same session is a no-op.
    session.select(first.clone());
    assert!(engine.submit_vote(&mut poll, &mut session));
    assert!(!engine.submit_vote(&mut poll, &mut session));
    assert_eq!(poll.total_votes(), 1);
    assert_eq!(poll.percentage(&first), 100);
    assert_eq!(poll.percentage(&second), 0);

    // Tick the session clock past expiry: voting closes, results reveal.
    session.tick(poll.expires_at + 1);
    assert!(poll.is_expired(session.now()));
    assert!(poll.show_results(session.now()));
    assert_eq!(format_remaining(poll.expires_at, session.now()), "0s");

    let mut late = ViewSession::new(session.now());
    late.select(second.clone());
    assert!(!engine.submit_vote(&mut poll, &mut late));

    // Comments attach by id, even after expiry.
    assert!(engine.post_comment(&poll.id, "great choices", session.now()).is_some());
    assert!(engine.post_comment(&poll.id, "   ", session.now()).is_none());

    // Replacing the poll orphans but keeps the old comment list.
    let replacement = PollDraft::new()
        .with_question("Dinner instead?")
        .with_options(["Yes", "No"]);
    let new_poll = engine.publish(&replacement, session.now()).unwrap();
    assert_ne!(new_poll.id, poll.id);

    let engine = PollEngine::new(JsonFileStore::open(&path));
    assert_eq!(engine.current_poll().unwrap().id, new_poll.id);
    let comments = engine.comments(&poll.id);
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].text, "great choices");
}
