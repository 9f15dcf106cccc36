pub mod request;
pub mod traits;

// Gateway implementations
pub mod gemini;
