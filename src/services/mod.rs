//! 服务层模块

pub mod prompt_service;
pub mod solution_service;
pub mod text_extractor;

pub use solution_service::{SolutionError, SolutionService};
pub use text_extractor::{extract_pdf_text, ExtractionError};
