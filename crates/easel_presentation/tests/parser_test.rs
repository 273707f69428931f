// Tests for outline response parsing.

mod test_utils;

use easel_error::{EaselErrorKind, FailureKind, OutlineMode, ParseErrorKind};
use easel_presentation::{parse_block, parse_delimited, parse_structured};
use test_utils::{delimited_block, delimited_outline};

fn parse_kind(err: &easel_error::EaselError) -> &ParseErrorKind {
    match err.kind() {
        EaselErrorKind::Parse(e) => &e.kind,
        other => panic!("expected parse error, got {:?}", other),
    }
}

//
// ─── DELIMITED PROTOCOL ─────────────────────────────────────────────────────────
//

#[test]
fn test_single_block_round_trip() {
    let slide = parse_block("TITLE: X\nCONTENT:\n- A\n- B\nIMAGE_PROMPT: Y").unwrap();
    assert_eq!(slide.title, "X");
    assert_eq!(slide.content, vec!["A", "B"]);
    assert_eq!(slide.image_prompt, "Y");
    assert!(slide.sources.is_none());
}

#[test]
fn test_well_formed_blocks_survive_in_source_order() -> anyhow::Result<()> {
    let malformed = [
        "TITLE: Missing content\nIMAGE_PROMPT: nothing\n",
        "CONTENT:\n- No title\nIMAGE_PROMPT: nothing\n",
        "TITLE: No prompt\nCONTENT:\n- point\n",
        "TITLE:   \nCONTENT:\n- blank title\nIMAGE_PROMPT: x\n",
    ];
    let text = format!(
        "---SLIDE---\n{}---SLIDE---\n{}---SLIDE---\n{}---SLIDE---\n{}---SLIDE---\n{}---SLIDE---\n{}---SLIDE---\n{}",
        delimited_block("Zebra"),
        malformed[0],
        delimited_block("Apple"),
        malformed[1],
        malformed[2],
        delimited_block("Zebra"),
        malformed[3],
    );

    let slides = parse_delimited(&text)?;
    let titles: Vec<_> = slides.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Zebra", "Apple", "Zebra"]);
    Ok(())
}

#[test]
fn test_many_blocks_count() -> anyhow::Result<()> {
    let slides = parse_delimited(&delimited_outline(12))?;
    assert_eq!(slides.len(), 12);
    assert_eq!(slides[11].title, "Slide 11");
    assert_eq!(slides[0].content, vec!["Slide 0 point one", "Slide 0 point two"]);
    Ok(())
}

#[test]
fn test_preamble_before_first_separator_is_ignored() -> anyhow::Result<()> {
    let text = format!("Here is your presentation!\n{}", delimited_outline(2));
    let slides = parse_delimited(&text)?;
    assert_eq!(slides.len(), 2);
    Ok(())
}

#[test]
fn test_missing_separator_variant() {
    let err = parse_delimited(&delimited_block("Only")).unwrap_err();
    assert_eq!(parse_kind(&err), &ParseErrorKind::SeparatorNotFound);
    assert_eq!(err.failure_kind(), FailureKind::NoSlidesFound);
    assert!(err.user_message().contains("---SLIDE---"));
}

#[test]
fn test_no_valid_blocks_variant() {
    let text = "---SLIDE---\nTITLE: Half\n---SLIDE---\nnonsense\n---SLIDE---";
    let err = parse_delimited(text).unwrap_err();
    assert_eq!(parse_kind(&err), &ParseErrorKind::NoValidBlocks);
    assert_eq!(err.failure_kind(), FailureKind::NoSlidesFound);
    assert!(err.user_message().contains("couldn't be formatted into slides"));
}

#[test]
fn test_variants_have_distinct_messages() {
    let missing = parse_delimited("just some prose").unwrap_err();
    let invalid = parse_delimited("---SLIDE---\nprose").unwrap_err();
    assert_ne!(missing.user_message(), invalid.user_message());
}

#[test]
fn test_empty_input_has_no_valid_blocks() {
    let err = parse_delimited("   \n").unwrap_err();
    assert_eq!(parse_kind(&err), &ParseErrorKind::NoValidBlocks);
}

#[test]
fn test_content_spanning_inline_label_text() -> anyhow::Result<()> {
    let text = "---SLIDE---\nTITLE: Labels\nCONTENT: - First\n- Second\n\n- Third\nIMAGE_PROMPT: labels on a wall";
    let slides = parse_delimited(text)?;
    assert_eq!(slides[0].content, vec!["First", "Second", "Third"]);
    Ok(())
}

//
// ─── STRUCTURED PROTOCOL ────────────────────────────────────────────────────────
//

#[test]
fn test_structured_valid_array() -> anyhow::Result<()> {
    let text = r#"[
        {"title": "One", "content": ["a", "b"], "imagePrompt": "first"},
        {"title": "Two", "content": [], "imagePrompt": "second"}
    ]"#;
    let slides = parse_structured(text, OutlineMode::Topic)?;
    assert_eq!(slides.len(), 2);
    assert_eq!(slides[0].content, vec!["a", "b"]);
    assert_eq!(slides[1].image_prompt, "second");
    Ok(())
}

#[test]
fn test_structured_code_fence_is_tolerated() -> anyhow::Result<()> {
    let text = "```json\n[{\"title\": \"T\", \"content\": [\"c\"], \"imagePrompt\": \"p\"}]\n```";
    let slides = parse_structured(text, OutlineMode::Topic)?;
    assert_eq!(slides[0].title, "T");
    Ok(())
}

#[test]
fn test_structured_missing_field_discards_everything() {
    let text = r#"[
        {"title": "One", "content": ["a"], "imagePrompt": "first"},
        {"title": "Two", "content": ["b"]}
    ]"#;
    let err = parse_structured(text, OutlineMode::Topic).unwrap_err();
    assert_eq!(err.failure_kind(), FailureKind::MalformedStructure);
    assert_eq!(
        err.user_message(),
        "The AI returned an invalid presentation structure. Please try again."
    );
}

#[test]
fn test_structured_rejects_non_array_and_non_json() {
    for text in [r#"{"title": "One"}"#, "not json at all", r#"[{"title": 1, "content": [], "imagePrompt": "x"}]"#, r#"[{"title": "t", "content": [1], "imagePrompt": "x"}]"#] {
        let err = parse_structured(text, OutlineMode::Topic).unwrap_err();
        assert_eq!(err.failure_kind(), FailureKind::MalformedStructure, "input: {}", text);
    }
}

#[test]
fn test_script_mode_message() {
    let err = parse_structured("[1, 2]", OutlineMode::Script).unwrap_err();
    assert_eq!(
        err.user_message(),
        "The AI failed to format the provided script. Please check the script format and try again."
    );
}

#[test]
fn test_title_value_must_share_the_label_line() {
    let block = "TITLE:\nFoo\nCONTENT:\n- A\nIMAGE_PROMPT: Y";
    assert!(parse_block(block).is_none());

    let err = parse_delimited(&format!("---SLIDE---\n{}", block)).unwrap_err();
    assert_eq!(parse_kind(&err), &ParseErrorKind::NoValidBlocks);
}
