// Application layer - Use case interactors

pub mod trim_interactor;

// Re-export interactors
pub use trim_interactor::{TrimInteractor, TrimSettings};
