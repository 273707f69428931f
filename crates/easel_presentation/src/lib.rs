//! Presentation pipeline for Easel.
//!
//! Turns a topic or a pre-written script into an ordered, illustrated slide
//! collection:
//!
//! 1. **Mode selection** ([`select_mode`], [`plan_outline`]) picks the
//!    script-parse, search-grounded, or default strategy and builds the
//!    outline request.
//! 2. **Parsing** ([`parse_structured`], [`parse_delimited`]) turns the
//!    response into [`SlideStructure`](easel_core::SlideStructure) records.
//! 3. **Citation merging** ([`merge_sources`]) attaches retrieval sources to
//!    every slide.
//! 4. **Assembly** ([`SlideAssembler`]) illustrates slides one at a time and
//!    publishes each finished slide as it lands.
//! 5. **Editing** ([`edit_slide`]) replaces one slide's image.
//!
//! [`PresentationStudio`] wires the steps together against any backend that
//! implements the `easel_interface` traits. The standalone image and video
//! tools live alongside in [`generate_standalone_image`] and [`VideoJob`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod assembly;
mod config;
mod creative;
mod edit;
mod mode;
mod parser;
pub mod prompts;
mod sources;
mod studio;

pub use assembly::{AssemblyEvent, AssemblyOutcome, AssemblyState, SlideAssembler};
pub use config::{EaselConfig, ImagesConfig, ModelsConfig, OutlineConfig, VideoConfig};
pub use creative::{VIDEO_MIME_TYPE, VideoJob, generate_standalone_image};
pub use edit::{edit_image, edit_slide};
pub use mode::{
    GenerationMode, OutlinePlan, OutlineProtocol, SCRIPT_THRESHOLD_CHARS, is_detailed_script,
    plan_outline, select_mode,
};
pub use parser::{parse_block, parse_delimited, parse_structured};
pub use sources::{merge_sources, normalize_sources};
pub use studio::PresentationStudio;
