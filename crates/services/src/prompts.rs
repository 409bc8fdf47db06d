//! Prompt templates sent to the generative backend.

use reels_core::model::{LearningMode, Topic};

const IMAGE_STYLE: &str = "Cinematic, award-winning editorial illustration, 8k resolution, \
minimalist composition, soft dramatic lighting, highly detailed, photorealistic or high-end \
3D render style";

fn mode_context(mode: LearningMode) -> &'static str {
    match mode {
        LearningMode::Learn => {
            "Break this topic down into a logical sequence of subtopics for a beginner."
        }
        LearningMode::Quiz => {
            "Create a series of multiple-choice quiz questions or thought-provoking challenges \
             to test the user's knowledge on this topic. The 'shortNote' should be the question, \
             and the 'narrationScript' should provide a hint or context."
        }
        LearningMode::DeepDive => {
            "Create an advanced, in-depth deep dive into specific complex nuances of this topic. \
             Assume the user knows the basics."
        }
    }
}

/// Prompt asking for a newline-delimited JSON plan of 5 to 10 reels.
#[must_use]
pub fn plan_prompt(topic: &Topic, mode: LearningMode) -> String {
    format!(
        r#"Role: Expert Educational Content Creator.
Task: Create a series of "Reels" (short vertical learning cards) for the topic: "{topic}".
Context: {context}

Requirements:
1. Determine the optimal number of reels (between 5 and 10) to effectively cover the topic.
2. Output strictly in JSON Lines (NDJSON) format.
3. Each line must be a valid, standalone JSON object.
4. DO NOT wrap the whole result in an array [].
5. DO NOT use Markdown code blocks. Just raw text.

Schema for each line:
{{
  "subtopic": "Brief Title",
  "shortNote": "Clean, insightful explanation (max 35 words).",
  "narrationScript": "Conversational script for audio (max 2 sentences).",
  "visualPrompt": "Abstract, cinematic, minimalist, award-winning visual description."
}}"#,
        topic = topic.as_str(),
        context = mode_context(mode),
    )
}

#[must_use]
pub fn image_prompt(visual_prompt: &str) -> String {
    format!("{IMAGE_STYLE}: {}. No text, no artifacts.", visual_prompt.trim())
}
