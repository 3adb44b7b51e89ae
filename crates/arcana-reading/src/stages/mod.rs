//! The reading stages, one per file.
//!
//! Each stage implements [`crate::flow::Stage`] over
//! [`crate::context::ReadingContext`] and owns any collaborator it needs
//! (RNG, narrator, store), so the context stays plain data.

pub mod classify;
pub mod draw;
pub mod interpret;
pub mod meaning;
pub mod persist;
pub mod setup;
pub mod synthesize;

pub use classify::ClassifyStage;
pub use draw::DrawStage;
pub use interpret::InterpretStage;
pub use meaning::MeaningStage;
pub use persist::PersistStage;
pub use setup::SetupStage;
pub use synthesize::SynthesizeStage;
