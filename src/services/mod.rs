pub mod llm_service;
pub mod prompt_builder;
pub mod response_parser;

pub use llm_service::{GenerationRequest, LlmService, TextGenerator};
pub use prompt_builder::{build_prompt, SYSTEM_INSTRUCTION};
pub use response_parser::{parse_response, HUMANIZED_DELIMITER};
