pub mod extractor_config;
pub mod response;

pub use response::ApiResponse;
