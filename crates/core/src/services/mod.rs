pub mod adapter;
pub mod prompts;

// One adapter per use case
pub mod analysis_service;
pub mod calendar_service;
pub mod company_service;
pub mod macro_service;
pub mod news_service;
