use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{ReelId, Topic};

//
// ─── DRAFT (wire shape of one plan line) ───────────────────────────────────────
//

/// One record of the content plan as it arrives from the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReelDraft {
    pub subtopic: String,
    pub short_note: String,
    pub narration_script: String,
    pub visual_prompt: String,
}

impl ReelDraft {
    /// Check that every field carries text.
    ///
    /// # Errors
    ///
    /// Returns `ReelValidationError` naming the first blank field.
    pub fn validate(self) -> Result<ValidatedReel, ReelValidationError> {
        let fields = [
            ("subtopic", &self.subtopic),
            ("shortNote", &self.short_note),
            ("narrationScript", &self.narration_script),
            ("visualPrompt", &self.visual_prompt),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ReelValidationError::EmptyField(*name));
        }

        Ok(ValidatedReel {
            subtopic: self.subtopic.trim().to_owned(),
            short_note: self.short_note.trim().to_owned(),
            narration_script: self.narration_script.trim().to_owned(),
            visual_prompt: self.visual_prompt.trim().to_owned(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedReel {
    subtopic: String,
    short_note: String,
    narration_script: String,
    visual_prompt: String,
}

impl ValidatedReel {
    #[must_use]
    pub fn assign(self, id: ReelId, topic: Topic) -> Reel {
        Reel {
            id,
            topic,
            subtopic: self.subtopic,
            short_note: self.short_note,
            narration_script: self.narration_script,
            visual_prompt: self.visual_prompt,
        }
    }
}

//
// ─── REEL ──────────────────────────────────────────────────────────────────────
//

/// A single learning card. Immutable once emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reel {
    id: ReelId,
    topic: Topic,
    subtopic: String,
    short_note: String,
    narration_script: String,
    visual_prompt: String,
}

impl Reel {
    #[must_use]
    pub fn id(&self) -> ReelId {
        self.id
    }

    #[must_use]
    pub fn topic(&self) -> &Topic {
        &self.topic
    }

    #[must_use]
    pub fn subtopic(&self) -> &str {
        &self.subtopic
    }

    #[must_use]
    pub fn short_note(&self) -> &str {
        &self.short_note
    }

    #[must_use]
    pub fn narration_script(&self) -> &str {
        &self.narration_script
    }

    #[must_use]
    pub fn visual_prompt(&self) -> &str {
        &self.visual_prompt
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ReelValidationError {
    #[error("reel field `{0}` is empty")]
    EmptyField(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(subtopic: &str) -> ReelDraft {
        ReelDraft {
            subtopic: subtopic.into(),
            short_note: "note".into(),
            narration_script: "script".into(),
            visual_prompt: "prompt".into(),
        }
    }

    #[test]
    fn draft_decodes_camel_case_and_ignores_extra_fields() {
        let line = r#"{"subtopic":"A","shortNote":"n","narrationScript":"s","visualPrompt":"v","extra":1}"#;
        let draft: ReelDraft = serde_json::from_str(line).unwrap();
        assert_eq!(draft.subtopic, "A");
        assert_eq!(draft.visual_prompt, "v");
    }

    #[test]
    fn blank_field_fails_validation() {
        let err = draft("  ").validate().unwrap_err();
        assert_eq!(err, ReelValidationError::EmptyField("subtopic"));
    }

    #[test]
    fn validated_draft_assigns_id_and_topic() {
        let topic = Topic::parse("Rust").unwrap();
        let reel = draft(" Ownership ")
            .validate()
            .unwrap()
            .assign(ReelId::new(3), topic.clone());
        assert_eq!(reel.id(), ReelId::new(3));
        assert_eq!(reel.topic(), &topic);
        assert_eq!(reel.subtopic(), "Ownership");
    }
}
