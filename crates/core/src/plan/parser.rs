use crate::model::{Reel, ReelId, Topic};

use super::decode::{DecodeError, JsonLineDecoder, LineDecoder};
use super::sanitize::{LineSanitizer, SanitizerChain};

/// Counters for one parsed stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    pub emitted: u32,
    pub skipped: u32,
}

/// A line that was dropped because it did not decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub line: String,
    pub error: DecodeError,
}

/// Buffers stream fragments and emits one `Reel` per complete, decodable line.
///
/// Fragments may split or join lines arbitrarily. The last segment after a newline
/// stays buffered until more text arrives or `finish` is called. Lines that fail to
/// decode are dropped and never retried; ids count up from 1 in emission order.
#[derive(Debug)]
pub struct LineParser<S = SanitizerChain, D = JsonLineDecoder> {
    topic: Topic,
    sanitizer: S,
    decoder: D,
    buffer: String,
    next_id: u64,
    stats: ParseStats,
    rejections: Vec<Rejection>,
}

impl LineParser {
    /// Parser with the plan sanitizer chain and the JSON decoder.
    #[must_use]
    pub fn for_topic(topic: Topic) -> Self {
        Self::new(topic, SanitizerChain::plan_default(), JsonLineDecoder)
    }
}

impl<S: LineSanitizer, D: LineDecoder> LineParser<S, D> {
    #[must_use]
    pub fn new(topic: Topic, sanitizer: S, decoder: D) -> Self {
        Self {
            topic,
            sanitizer,
            decoder,
            buffer: String::new(),
            next_id: 1,
            stats: ParseStats::default(),
            rejections: Vec::new(),
        }
    }

    /// Append a fragment and return the records completed by it, in line order.
    pub fn push(&mut self, fragment: &str) -> Vec<Reel> {
        self.buffer.push_str(fragment);
        let Some(last_newline) = self.buffer.rfind('\n') else {
            return Vec::new();
        };
        let complete: String = self.buffer.drain(..=last_newline).collect();
        complete
            .split('\n')
            .filter_map(|line| self.decode_line(line))
            .collect()
    }

    /// Decode whatever is still buffered. Call once the stream has ended.
    pub fn finish(&mut self) -> Vec<Reel> {
        let rest = std::mem::take(&mut self.buffer);
        self.decode_line(&rest).into_iter().collect()
    }

    #[must_use]
    pub fn stats(&self) -> ParseStats {
        self.stats
    }

    #[must_use]
    pub fn topic(&self) -> &Topic {
        &self.topic
    }

    /// Text held back waiting for its newline.
    #[must_use]
    pub fn pending(&self) -> &str {
        &self.buffer
    }

    /// Take the lines dropped since the last call.
    pub fn drain_rejections(&mut self) -> Vec<Rejection> {
        std::mem::take(&mut self.rejections)
    }

    fn decode_line(&mut self, raw: &str) -> Option<Reel> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        let cleaned = self.sanitizer.sanitize(trimmed);
        let cleaned = cleaned.trim();
        if cleaned.is_empty() {
            return None;
        }

        match self.decoder.decode(cleaned) {
            Ok(validated) => {
                let id = ReelId::new(self.next_id);
                self.next_id = self.next_id.saturating_add(1);
                self.stats.emitted = self.stats.emitted.saturating_add(1);
                Some(validated.assign(id, self.topic.clone()))
            }
            Err(error) => {
                self.stats.skipped = self.stats.skipped.saturating_add(1);
                self.rejections.push(Rejection {
                    line: cleaned.to_owned(),
                    error,
                });
                None
            }
        }
    }
}
