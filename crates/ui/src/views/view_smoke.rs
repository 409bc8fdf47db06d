use std::sync::Arc;

use reels_core::feed::{Feed, SessionRequest};
use reels_core::model::{LearningMode, Reel, ReelDraft, ReelId, Topic};
use reels_core::time::fixed_now;

use super::test_harness::{HarnessOptions, PlanOnlyBackend, ViewKind, setup_view_harness};

fn topic() -> Topic {
    Topic::parse("Renaissance Art").unwrap()
}

fn reel(id: u64, subtopic: &str) -> Reel {
    ReelDraft {
        subtopic: subtopic.into(),
        short_note: format!("{subtopic} note"),
        narration_script: "script".into(),
        visual_prompt: "visual".into(),
    }
    .validate()
    .unwrap()
    .assign(ReelId::new(id), topic())
}

fn streaming_feed(count: u64) -> Feed {
    let mut feed = Feed::new();
    let session = feed.start(SessionRequest::learn(topic()), fixed_now());
    for id in 1..=count {
        assert!(feed.push_reel(session, reel(id, &format!("Part {id}"))));
    }
    feed
}

fn plan_line(subtopic: &str) -> String {
    format!(
        r#"{{"subtopic":"{subtopic}","shortNote":"n","narrationScript":"s","visualPrompt":"v"}}"#
    )
}

#[tokio::test(flavor = "current_thread")]
async fn start_view_smoke_renders_suggestions() {
    let mut harness = setup_view_harness(ViewKind::Start, HarnessOptions::default());
    harness.rebuild();
    let html = harness.render();

    for suggestion in super::SUGGESTIONS {
        assert!(html.contains(suggestion), "missing {suggestion} in {html}");
    }
    assert!(html.contains("Generate Reels"), "missing submit label in {html}");
    assert!(html.contains("REELS_API_KEY"), "missing disabled hint in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn start_view_smoke_shows_planning_state() {
    let mut feed = Feed::new();
    feed.start(SessionRequest::learn(topic()), fixed_now());
    let mut harness = setup_view_harness(
        ViewKind::Reels,
        HarnessOptions {
            feed,
            ..HarnessOptions::default()
        },
    );
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Curating Content..."), "missing loading label in {html}");
    assert!(!html.contains("reel-counter"), "feed rendered too early: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn start_view_smoke_shows_failure_notice_once() {
    let mut feed = Feed::new();
    let session = feed.start(SessionRequest::learn(topic()), fixed_now());
    feed.fail(session);
    let mut harness = setup_view_harness(
        ViewKind::Reels,
        HarnessOptions {
            feed,
            ..HarnessOptions::default()
        },
    );
    harness.rebuild();
    let html = harness.render();

    let message = "Failed to generate content. Please try again.";
    assert_eq!(html.matches(message).count(), 1, "expected one notice in {html}");
    assert!(html.contains("Generate Reels"), "start form missing in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn feed_view_smoke_renders_streaming_cards() {
    let mut harness = setup_view_harness(
        ViewKind::Reels,
        HarnessOptions {
            feed: streaming_feed(2),
            ..HarnessOptions::default()
        },
    );
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Part 1"), "missing first card in {html}");
    assert!(html.contains("Part 2 note"), "missing second note in {html}");
    assert!(html.contains("1 / 3"), "streaming counter should imply more: {html}");
    assert!(html.contains("Creating Visuals"), "missing placeholder in {html}");
    assert!(!html.contains("Nice Work!"), "end card shown while streaming: {html}");
    assert!(!html.contains("<audio"), "audio rendered before it resolved: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn feed_view_smoke_renders_end_of_feed_after_completion() {
    let mut feed = streaming_feed(2);
    let session = feed.session_id();
    feed.complete(session, fixed_now());
    let mut harness = setup_view_harness(
        ViewKind::Feed,
        HarnessOptions {
            feed,
            ..HarnessOptions::default()
        },
    );
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("2 / 2"), "completed counter should be exact: {html}");
    for label in ["Nice Work!", "Explore More", "Take Test", "Explore Other Topics"] {
        assert!(html.contains(label), "missing {label} in {html}");
    }
    assert!(html.contains("Deep dive into Renaissance Art"), "missing hint in {html}");
    assert!(html.contains("2 reels in 0s"), "missing summary in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn launch_request_streams_into_the_feed() {
    let body = format!("{}\nnot json\n{}\n", plan_line("Perspective"), plan_line("Fresco"));
    let backend = Arc::new(PlanOnlyBackend {
        chunks: vec![body[..30].to_owned(), body[30..].to_owned()],
    });
    let mut harness = setup_view_harness(
        ViewKind::Reels,
        HarnessOptions {
            backend,
            initial_request: Some(SessionRequest::new(topic(), LearningMode::Quiz)),
            ..HarnessOptions::default()
        },
    );
    harness.rebuild();
    for _ in 0..10 {
        harness.drive_async().await;
    }
    let html = harness.render();

    assert!(html.contains("Perspective"), "missing first reel in {html}");
    assert!(html.contains("Fresco"), "missing second reel in {html}");
    assert!(html.contains("Nice Work!"), "stream should have completed: {html}");
    assert!(html.contains("Creating Visuals"), "failed media keeps placeholder: {html}");
}
