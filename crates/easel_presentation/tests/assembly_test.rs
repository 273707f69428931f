// Tests for slide assembly and the end-to-end generation run.

mod test_utils;

use easel_core::{CitationRef, ContentResponse, GenerationParams, GroundingChunk, SlideStructure};
use easel_error::{EaselErrorKind, FailureKind, JobErrorKind};
use easel_presentation::{
    AssemblyEvent, AssemblyOutcome, AssemblyState, EaselConfig, PresentationStudio,
    SlideAssembler,
};
use test_utils::{
    MockStudio, delimited_outline, invalid_key_error, json_outline, mock_image, overloaded_error,
};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

fn structures(count: usize) -> Vec<SlideStructure> {
    (0..count)
        .map(|i| {
            SlideStructure::new(
                format!("Slide {}", i),
                vec![format!("{}a", i), format!("{}b", i)],
                format!("prompt {}", i),
            )
        })
        .collect()
}

fn params(prompt: &str, slide_count: u32, search: bool) -> GenerationParams {
    GenerationParams::builder()
        .prompt(prompt)
        .slide_count(slide_count)
        .use_search(search)
        .build()
        .expect("valid params")
}

//
// ─── ASSEMBLER ──────────────────────────────────────────────────────────────────
//

#[tokio::test]
async fn test_all_slides_illustrated_in_order() -> anyhow::Result<()> {
    let mock = MockStudio::new();
    let config = EaselConfig::default();
    let assembler = SlideAssembler::new(&mock, "imagen", &config.images);

    let outcome = assembler
        .assemble(structures(3), &CancellationToken::new())
        .await;

    assert!(outcome.is_complete());
    assert_eq!(outcome.state(), AssemblyState::Complete);
    let slides = outcome.into_result()?;
    assert_eq!(slides.len(), 3);
    for (i, slide) in slides.iter().enumerate() {
        assert_eq!(slide.title, format!("Slide {}", i));
        assert_eq!(slide.image_url, mock_image(i).to_data_url());
        assert!(!slide.image_url.is_empty());
    }
    Ok(())
}

#[tokio::test]
async fn test_image_request_carries_slide_context() -> anyhow::Result<()> {
    let mock = MockStudio::new();
    let mut config = EaselConfig::default();
    config.images.theme = Some("Watercolor landscapes".to_string());
    let assembler = SlideAssembler::new(&mock, "imagen-test", &config.images);

    assembler
        .assemble(structures(1), &CancellationToken::new())
        .await
        .into_result()?;

    let calls = mock.calls();
    let calls = calls.lock().unwrap();
    let request = &calls.image_requests[0];
    assert_eq!(request.model, "imagen-test");
    assert_eq!(request.number_of_images, 1);
    assert_eq!(request.output_mime_type, "image/jpeg");
    assert_eq!(request.aspect_ratio.to_string(), "16:9");
    assert!(request.prompt.contains("Slide Title: \"Slide 0\""));
    assert!(request.prompt.contains("Slide Content Summary: 0a; 0b"));
    assert!(request.prompt.contains("Core Image Subject: prompt 0."));
    assert!(request.prompt.contains("Theme: Watercolor landscapes"));
    Ok(())
}

#[tokio::test]
async fn test_failure_at_j_keeps_exact_prefix() {
    let config = EaselConfig::default();

    let full_mock = MockStudio::new();
    let full = SlideAssembler::new(&full_mock, "imagen", &config.images)
        .assemble(structures(5), &CancellationToken::new())
        .await;

    for j in 0..5 {
        let mock = MockStudio::new().with_image_failure_at(j, overloaded_error());
        let outcome = SlideAssembler::new(&mock, "imagen", &config.images)
            .assemble(structures(5), &CancellationToken::new())
            .await;

        match &outcome {
            AssemblyOutcome::Errored {
                completed,
                failed_index,
                error,
            } => {
                assert_eq!(*failed_index, j);
                assert_eq!(completed.len(), j);
                assert_eq!(completed.as_slice(), &full.slides()[..j]);
                assert_eq!(error.failure_kind(), FailureKind::Remote);
            }
            AssemblyOutcome::Complete(_) => panic!("run should stop at slide {}", j),
        }
        // No further slides are attempted after the failure.
        assert_eq!(mock.image_call_count(), j + 1);
        assert_eq!(outcome.state(), AssemblyState::Errored);
    }
}

#[tokio::test]
async fn test_credential_failure_is_distinguished() {
    let mock = MockStudio::new().with_image_failure_at(1, invalid_key_error());
    let config = EaselConfig::default();

    let outcome = SlideAssembler::new(&mock, "imagen", &config.images)
        .assemble(structures(3), &CancellationToken::new())
        .await;

    let error = outcome.error().expect("run should fail");
    assert!(error.is_credential_failure());
    assert!(error.user_message().contains("select a valid key"));
}

#[tokio::test]
async fn test_progress_snapshots_grow_by_one() {
    let mock = MockStudio::new();
    let config = EaselConfig::default();
    let (tx, mut rx) = mpsc::unbounded_channel();

    SlideAssembler::new(&mock, "imagen", &config.images)
        .with_progress(&tx)
        .assemble(structures(3), &CancellationToken::new())
        .await;
    drop(tx);

    let mut events = Vec::new();
    while let Some(event) = rx.recv().await {
        events.push(event);
    }

    let snapshots: Vec<_> = events
        .iter()
        .filter_map(|event| match event {
            AssemblyEvent::SlideCompleted { index, slides } => Some((*index, slides.len())),
            AssemblyEvent::StateChanged(_) => None,
        })
        .collect();
    assert_eq!(snapshots, vec![(0, 1), (1, 2), (2, 3)]);

    assert_eq!(
        events.first(),
        Some(&AssemblyEvent::StateChanged(AssemblyState::GeneratingSlide(0)))
    );
    assert_eq!(
        events.last(),
        Some(&AssemblyEvent::StateChanged(AssemblyState::Complete))
    );
}

#[tokio::test]
async fn test_cancelled_run_stops_before_next_slide() {
    let mock = MockStudio::new();
    let config = EaselConfig::default();
    let cancel = CancellationToken::new();
    cancel.cancel();

    let outcome = SlideAssembler::new(&mock, "imagen", &config.images)
        .assemble(structures(3), &cancel)
        .await;

    let error = outcome.error().expect("cancelled run should fail");
    assert_eq!(error.failure_kind(), FailureKind::Cancelled);
    assert!(outcome.slides().is_empty());
    assert_eq!(mock.image_call_count(), 0);
}

//
// ─── END-TO-END ─────────────────────────────────────────────────────────────────
//

#[tokio::test]
async fn test_out_of_range_counts_rejected_before_remote_call() {
    for count in [0u32, 31] {
        let studio = PresentationStudio::new(MockStudio::new(), EaselConfig::default());
        let err = studio
            .generate(&params("Tides", count, false), &CancellationToken::new())
            .await
            .expect_err("count should be rejected");

        assert_eq!(err.failure_kind(), FailureKind::InvalidInput);
        assert_eq!(studio.driver().content_call_count(), 0);
        assert_eq!(studio.driver().image_call_count(), 0);
    }
}

#[tokio::test]
async fn test_blank_prompt_rejected_before_remote_call() {
    let studio = PresentationStudio::new(MockStudio::new(), EaselConfig::default());
    let err = studio
        .generate(&params("   ", 3, false), &CancellationToken::new())
        .await
        .expect_err("blank prompt should be rejected");

    assert_eq!(err.user_message(), "Please enter a topic for your presentation.");
    assert_eq!(studio.driver().content_call_count(), 0);
}

#[tokio::test]
async fn test_default_mode_end_to_end() -> anyhow::Result<()> {
    let mock = MockStudio::new().with_text(json_outline(4));
    let studio = PresentationStudio::new(mock, EaselConfig::default());

    let outcome = studio
        .generate(&params("Tides", 4, false), &CancellationToken::new())
        .await?;

    let slides = outcome.into_result()?;
    assert_eq!(slides.len(), 4);
    assert!(slides.iter().all(|slide| slide.sources.is_none()));
    assert_eq!(studio.driver().image_call_count(), 4);
    Ok(())
}

#[tokio::test]
async fn test_count_mismatch_is_not_an_error() -> anyhow::Result<()> {
    let mock = MockStudio::new().with_text(json_outline(2));
    let studio = PresentationStudio::new(mock, EaselConfig::default());

    let slides = studio
        .generate(&params("Tides", 6, false), &CancellationToken::new())
        .await?
        .into_result()?;
    assert_eq!(slides.len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_search_mode_end_to_end_broadcasts_sources() -> anyhow::Result<()> {
    let response = ContentResponse {
        text: delimited_outline(3),
        images: Vec::new(),
        grounding_chunks: Some(vec![
            GroundingChunk {
                web: Some(CitationRef {
                    uri: Some("https://tides.example".to_string()),
                    title: Some("Tides".to_string()),
                }),
                maps: None,
            },
            GroundingChunk::default(),
        ]),
    };
    let studio = PresentationStudio::new(
        MockStudio::new().with_content(response),
        EaselConfig::default(),
    );
    let (tx, mut rx) = mpsc::unbounded_channel();

    let outcome = studio
        .generate_with_progress(&params("Tides", 3, true), &tx, &CancellationToken::new())
        .await?;
    drop(tx);

    let slides = outcome.into_result()?;
    assert_eq!(slides.len(), 3);
    for slide in &slides {
        let sources = slide.sources.as_ref().expect("sources attached");
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].uri, "https://tides.example");
    }

    assert_eq!(
        rx.recv().await,
        Some(AssemblyEvent::StateChanged(AssemblyState::Outlining))
    );
    Ok(())
}

#[tokio::test]
async fn test_outline_parse_failure_is_returned_without_images() {
    let studio = PresentationStudio::new(
        MockStudio::new().with_text("I cannot help with that."),
        EaselConfig::default(),
    );

    let err = studio
        .generate(&params("Tides", 3, true), &CancellationToken::new())
        .await
        .expect_err("outline without separator should fail");

    assert_eq!(err.failure_kind(), FailureKind::NoSlidesFound);
    assert_eq!(studio.driver().image_call_count(), 0);
}

#[tokio::test]
async fn test_outline_credential_failure() {
    let studio = PresentationStudio::new(
        MockStudio::new().with_content_error(invalid_key_error()),
        EaselConfig::default(),
    );

    let err = studio
        .generate(&params("Tides", 3, false), &CancellationToken::new())
        .await
        .expect_err("invalid key should fail");
    assert!(err.is_credential_failure());
}

#[tokio::test]
async fn test_cancel_while_outlining() {
    let studio = PresentationStudio::new(
        MockStudio::new().with_text(json_outline(2)),
        EaselConfig::default(),
    );
    let cancel = CancellationToken::new();
    cancel.cancel();

    let err = studio
        .generate(&params("Tides", 2, false), &cancel)
        .await
        .expect_err("cancelled run should fail");

    assert!(matches!(
        err.kind(),
        EaselErrorKind::Job(e) if e.kind == JobErrorKind::Cancelled
    ));
}
