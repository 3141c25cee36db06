pub mod traits;

// API provider implementations
pub mod covid19api;
