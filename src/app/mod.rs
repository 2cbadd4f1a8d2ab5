// Application layer - Use case interactors

pub mod container;
pub mod highlight_interactor;

// Re-export interactors
pub use container::{AppContainer, DefaultAppContainer};
pub use highlight_interactor::{HighlightInteractor, PipelineResult, RunRequest};
