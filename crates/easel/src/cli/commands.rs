//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Easel - illustrated presentations from a topic or a script
#[derive(Parser, Debug)]
#[command(name = "easel")]
#[command(about = "Turn a topic or a script into an illustrated slide presentation", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Load configuration from this file instead of the default locations
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a presentation
    Generate {
        /// Topic of the presentation
        #[arg(required_unless_present = "script")]
        prompt: Option<String>,

        /// Read the prompt from a file (long multi-line scripts are segmented verbatim)
        #[arg(long, conflicts_with = "prompt")]
        script: Option<PathBuf>,

        /// Number of slides to request
        #[arg(short = 'n', long, default_value = "5")]
        slides: u32,

        /// Use extended reasoning
        #[arg(long, conflicts_with = "search")]
        thinking: bool,

        /// Ground the outline in web search results and attach citations
        #[arg(long)]
        search: bool,

        /// Output directory
        #[arg(short, long, default_value = "presentation")]
        out: PathBuf,
    },

    /// Generate a standalone image
    Image {
        /// Image prompt
        prompt: String,

        /// Aspect ratio: 1:1, 16:9, 9:16, 4:3 or 3:4
        #[arg(long, default_value = "16:9")]
        aspect_ratio: String,

        /// Output file (extension follows the image type when omitted)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Edit an image file or one slide of an exported presentation
    Edit {
        /// Edit instruction
        instruction: String,

        /// Image file to edit
        #[arg(long, required_unless_present = "manifest", conflicts_with = "manifest")]
        input: Option<PathBuf>,

        /// Exported presentation directory
        #[arg(long, requires = "slide")]
        manifest: Option<PathBuf>,

        /// Slide number to edit (starting at 1)
        #[arg(long, requires = "manifest")]
        slide: Option<usize>,

        /// Output file for standalone edits
        #[arg(short, long, conflicts_with = "manifest")]
        out: Option<PathBuf>,
    },

    /// Generate a short video
    Video {
        /// Video prompt
        prompt: String,

        /// Aspect ratio: 16:9 or 9:16
        #[arg(long, default_value = "16:9")]
        aspect_ratio: String,

        /// Seed image file
        #[arg(long)]
        image: Option<PathBuf>,

        /// Output file
        #[arg(short, long, default_value = "video.mp4")]
        out: PathBuf,
    },

    /// Check that an API key is available
    Key,
}
