//! Application Layer
//!
//! Use cases and application services.

pub mod get_data;
pub mod save_result;

// Re-exports
pub use get_data::{GetDataInput, GetDataUseCase};
pub use save_result::{SaveResultInput, SaveResultUseCase};
