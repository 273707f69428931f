//! Prompt templates for outline and illustration requests.

use serde_json::{Value, json};

/// Literal separator between slides in the delimited protocol.
pub const SLIDE_SEPARATOR: &str = "---SLIDE---";

/// Response schema of the structured JSON protocol.
///
/// An array of objects with required `title`, `content`, and `imagePrompt`.
pub fn presentation_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "title": {
                    "type": "STRING",
                    "description": "The main title for this presentation slide. Should be concise and engaging."
                },
                "content": {
                    "type": "ARRAY",
                    "items": {
                        "type": "STRING",
                        "description": "A single bullet point or a short sentence for the slide content."
                    },
                    "description": "An array of 2 to 4 bullet points expanding on the slide's title. Each bullet point should be a complete sentence."
                },
                "imagePrompt": {
                    "type": "STRING",
                    "description": "A detailed, descriptive prompt for an AI image generator to create a visually appealing and relevant image for this slide. Describe the scene, style (e.g., photorealistic, cinematic, minimalist), and mood."
                }
            },
            "required": ["title", "content", "imagePrompt"]
        }
    })
}

/// Prompt that segments a pre-written script into slides verbatim.
pub fn script_prompt(script: &str, language: Option<&str>) -> String {
    let language_note = match language {
        Some(language) => format!(
            "The user's script is in {}, so you will need to understand it to create appropriate image prompts.",
            language
        ),
        None => "The script may not be in English, so you will need to understand it to create appropriate image prompts.".to_string(),
    };

    format!(
        "You are an expert presentation script formatter. The user has provided a detailed script for a presentation. \
Your task is to parse this script and format it into a structured JSON array based on the provided schema.
- Do NOT summarize, alter, or add new content. Preserve the original text for titles and content points exactly as it is given.
- For EACH slide in the script, you MUST generate a relevant, descriptive image prompt in ENGLISH. \
The image prompt should be based on the content of that specific slide. {}
- Ensure the final output is a valid JSON array matching the schema.

Here is the script:
---SCRIPT START---
{}
---SCRIPT END---",
        language_note, script
    )
}

/// Prompt for the retrieval-grounded delimited protocol.
pub fn search_prompt(topic: &str, slide_count: u32) -> String {
    format!(
        "Create a presentation about \"{topic}\". The presentation should have exactly {slide_count} slides.
For EACH slide, you MUST provide a title, 2-4 content bullet points, and a detailed image prompt.
You MUST format the ENTIRE output as a single plain text string. Each slide MUST be separated by the exact string \"{SLIDE_SEPARATOR}\".
Within each slide block, you MUST use the following format exactly:
TITLE: [Your Title Here]
CONTENT:
- [Bullet point 1]
- [Bullet point 2]
IMAGE_PROMPT: [Your detailed English image prompt here]"
    )
}

/// Prompt for the default topic mode.
pub fn topic_prompt(topic: &str, slide_count: u32) -> String {
    format!(
        "Create a presentation about \"{topic}\". The presentation should have exactly {slide_count} slides, \
including an engaging title slide and a strong concluding slide. For each slide, provide a title, \
2-4 content bullet points, and a detailed descriptive prompt for an image generator, following the provided JSON schema."
    )
}

/// Illustration prompt for one slide.
pub fn slide_image_prompt(
    image_prompt: &str,
    title: &str,
    content_summary: &str,
    theme: Option<&str>,
) -> String {
    let mut prompt = format!(
        "A visually compelling, professional image for a presentation slide.
- Style: Cinematic, photorealistic, high-detail.
- Slide Title: \"{title}\"
- Slide Content Summary: {content_summary}
- Core Image Subject: {image_prompt}."
    );
    if let Some(theme) = theme {
        prompt.push_str("\n- Theme: ");
        prompt.push_str(theme);
    }
    prompt.push_str(
        "\n- Composition: Follow the rule of thirds, with a clear focal point. Avoid text in the image.",
    );
    prompt
}
