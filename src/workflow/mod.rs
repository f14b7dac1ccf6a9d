pub mod text_flow;

pub use text_flow::{SharedFlow, TextFlow};
