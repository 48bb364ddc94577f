//! AI flows
//!
//! Provides:
//! - Art-idea generation (prompt in, named concept out)
//! - Artwork visualization (artwork image + room style in, room mockup out)
//!
//! Each flow composes an instruction, invokes the injected generative model
//! once, and shapes the outcome for its caller. No retries, no shared state.

mod art_idea;
mod visualize;

pub use art_idea::{generate_art_idea, ArtIdea, ArtIdeaRequest, FlowError};
pub use visualize::{visualize_artwork, ErrorKind, Visualization, VisualizationRequest};
