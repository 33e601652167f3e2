// verdash shared type definitions
// Each submodule defines types used across the application.

pub mod client_data;
pub mod dashboard;
pub mod errors;
pub mod preferences;
