pub mod analysis;
pub mod mode;
pub mod process_result;

pub use analysis::{AnalysisResult, AnalysisSignals};
pub use mode::{Mode, SamplingParams};
pub use process_result::ProcessResult;
