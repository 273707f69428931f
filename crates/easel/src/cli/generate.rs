//! Presentation generation command.

use easel::{
    AssemblyEvent, AssemblyOutcome, AssemblyState, EaselConfig, EaselError, GeminiClient,
    GenerationParams, ManifestExporter, PresentationExporter, PresentationStudio,
};
use std::path::PathBuf;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Options collected from the `generate` subcommand.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Inline topic or script
    pub prompt: Option<String>,
    /// File holding the prompt
    pub script: Option<PathBuf>,
    /// Requested slide count
    pub slides: u32,
    /// Extended reasoning
    pub thinking: bool,
    /// Search grounding
    pub search: bool,
    /// Output directory
    pub out: PathBuf,
}

/// Generate a presentation and export it to the output directory.
///
/// Slides finished before a failure are still exported.
pub async fn run_generate(
    options: GenerateOptions,
    config: EaselConfig,
    cancel: CancellationToken,
) -> Result<(), Box<dyn std::error::Error>> {
    let prompt = match (&options.prompt, &options.script) {
        (_, Some(path)) => std::fs::read_to_string(path)?,
        (Some(prompt), None) => prompt.clone(),
        (None, None) => return Err("Provide a prompt or --script".into()),
    };

    let params = GenerationParams::builder()
        .prompt(prompt)
        .slide_count(options.slides)
        .use_thinking(options.thinking)
        .use_search(options.search)
        .build()
        .map_err(EaselError::from)?;

    let studio = PresentationStudio::new(GeminiClient::new()?, config);
    let mode = easel::select_mode(&params);
    tracing::info!(?mode, slides = options.slides, "Starting presentation");

    let (tx, mut rx) = mpsc::unbounded_channel();
    let printer = tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            print_event(&event);
        }
    });

    let outcome = studio.generate_with_progress(&params, &tx, &cancel).await;
    drop(tx);
    let _ = printer.await;
    let outcome = outcome?;

    export(&outcome, &options.out)?;
    match outcome {
        AssemblyOutcome::Complete(_) => Ok(()),
        AssemblyOutcome::Errored { error, .. } => Err(error.into()),
    }
}

fn print_event(event: &AssemblyEvent) {
    match event {
        AssemblyEvent::StateChanged(AssemblyState::Outlining) => println!("Writing outline..."),
        AssemblyEvent::StateChanged(AssemblyState::GeneratingSlide(index)) => {
            println!("Illustrating slide {}...", index + 1)
        }
        AssemblyEvent::StateChanged(AssemblyState::Complete) => println!("✓ All slides ready"),
        AssemblyEvent::StateChanged(_) => {}
        AssemblyEvent::SlideCompleted { index, slides } => {
            if let Some(slide) = slides.get(*index) {
                println!("  ✓ {}: {}", index + 1, slide.title);
            }
        }
    }
}

fn export(outcome: &AssemblyOutcome, out: &std::path::Path) -> Result<(), Box<dyn std::error::Error>> {
    if outcome.slides().is_empty() {
        return Ok(());
    }

    let artifact = ManifestExporter::new(out).export(outcome.slides())?;
    if outcome.is_complete() {
        println!("✓ Wrote {} slides to {}", artifact.slide_count, artifact.path.display());
    } else {
        println!(
            "Wrote {} finished slides to {}",
            artifact.slide_count,
            artifact.path.display()
        );
    }
    Ok(())
}
