//! Trait definitions for the Easel presentation generator.
//!
//! These traits are the seams between the presentation pipeline and its
//! collaborators: the remote generation service, credential selection, and
//! presentation export.

mod traits;

pub use traits::{
    CredentialSelector, EaselDriver, ExportArtifact, ImageEditing, ImageGeneration,
    PresentationExporter, VideoGeneration,
};
