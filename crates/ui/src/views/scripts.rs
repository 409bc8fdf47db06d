use dioxus::document::eval;
use serde::Deserialize;

use reels_core::model::ReelId;

pub const FEED_SCROLL_ID: &str = "feed-scroll";

#[must_use]
pub fn audio_element_id(reel: ReelId) -> String {
    format!("reel-audio-{reel}")
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub client_height: f64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlayResult {
    Started,
    Refused(String),
}

const PAUSE_SCRIPT_TEMPLATE: &str = r#"
    const el = document.getElementById("{element_id}");
    if (el) {
        el.pause();
        el.currentTime = 0;
    }
    return true;
"#;

const PLAY_SCRIPT_TEMPLATE: &str = r#"
    const el = document.getElementById("{element_id}");
    if (!el) { return "audio element missing"; }
    try {
        await el.play();
        return "ok";
    } catch (err) {
        return String((err && err.name) || err);
    }
"#;

const PROGRESS_SCRIPT_TEMPLATE: &str = r#"
    const el = document.getElementById("{element_id}");
    if (!el || !(el.duration > 0)) { return -1; }
    return Math.round((el.currentTime / el.duration) * 100);
"#;

const SCROLL_SCRIPT_TEMPLATE: &str = r#"
    const el = document.getElementById("{element_id}");
    if (!el) { return { scrollTop: 0, clientHeight: 0 }; }
    return { scrollTop: el.scrollTop, clientHeight: el.clientHeight };
"#;

fn for_element(template: &str, element_id: &str) -> String {
    template.replace("{element_id}", element_id)
}

pub async fn pause_and_rewind(reel: ReelId) {
    let script = for_element(PAUSE_SCRIPT_TEMPLATE, &audio_element_id(reel));
    let _ = eval(&script).await;
}

pub async fn play(reel: ReelId) -> PlayResult {
    let script = for_element(PLAY_SCRIPT_TEMPLATE, &audio_element_id(reel));
    match eval(&script).join::<String>().await {
        Ok(result) if result == "ok" => PlayResult::Started,
        Ok(reason) => PlayResult::Refused(reason),
        Err(err) => PlayResult::Refused(format!("{err:?}")),
    }
}

/// Playback position as a whole percentage, once the duration is known.
pub async fn read_progress(reel: ReelId) -> Option<u8> {
    let script = for_element(PROGRESS_SCRIPT_TEMPLATE, &audio_element_id(reel));
    let value = eval(&script).join::<f64>().await.ok()?;
    (value >= 0.0).then(|| value.clamp(0.0, 100.0) as u8)
}

pub async fn read_scroll_metrics() -> Option<ScrollMetrics> {
    let script = for_element(SCROLL_SCRIPT_TEMPLATE, FEED_SCROLL_ID);
    eval(&script).join::<ScrollMetrics>().await.ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripts_target_the_reel_audio_element() {
        let script = for_element(PLAY_SCRIPT_TEMPLATE, &audio_element_id(ReelId::new(4)));
        assert!(script.contains(r#"getElementById("reel-audio-4")"#));
        assert!(!script.contains("{element_id}"));
    }

    #[test]
    fn pause_rewinds_to_start() {
        let script = for_element(PAUSE_SCRIPT_TEMPLATE, "x");
        assert!(script.contains("el.pause()"));
        assert!(script.contains("el.currentTime = 0"));
    }
}
