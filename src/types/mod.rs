pub mod analysis;
pub mod errors;

pub use analysis::{AnalysisResult, AttachmentType, CommandGroup};
