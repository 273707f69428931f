use easel_core::{Slide, SlideStructure, Source};

#[test]
fn structure_deserializes_from_wire_names() -> anyhow::Result<()> {
    let json = r#"{"title":"Intro","content":["A","B"],"imagePrompt":"a lighthouse"}"#;
    let structure: SlideStructure = serde_json::from_str(json)?;

    assert_eq!(structure.title, "Intro");
    assert_eq!(structure.content, vec!["A", "B"]);
    assert_eq!(structure.image_prompt, "a lighthouse");
    assert!(structure.sources.is_none());
    Ok(())
}

#[test]
fn slide_without_sources_omits_field() -> anyhow::Result<()> {
    let slide = Slide::from_structure(
        SlideStructure::new("Intro", vec!["A".to_string()], "p"),
        "https://img.example/1.jpg",
    );
    let value = serde_json::to_value(&slide)?;

    assert_eq!(value["imageUrl"], "https://img.example/1.jpg");
    assert!(value.get("sources").is_none());
    Ok(())
}

#[test]
fn from_structure_carries_sources() {
    let mut structure = SlideStructure::new("Intro", vec![], "p");
    structure.sources = Some(vec![Source::new("https://a.example", "A")]);

    let slide = Slide::from_structure(structure, "data:image/jpeg;base64,AA==");
    assert_eq!(
        slide.sources,
        Some(vec![Source::new("https://a.example", "A")])
    );
}

#[test]
fn with_image_changes_only_the_image() {
    let slide = Slide::from_structure(
        SlideStructure::new("Intro", vec!["A".to_string(), "B".to_string()], "p"),
        "data:image/jpeg;base64,AA==",
    );
    let edited = slide.with_image("data:image/png;base64,BB==");

    assert_eq!(edited.title, slide.title);
    assert_eq!(edited.content, slide.content);
    assert_eq!(edited.sources, slide.sources);
    assert_eq!(edited.image_url, "data:image/png;base64,BB==");
}
