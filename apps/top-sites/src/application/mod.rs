//! Application Layer
//!
//! The application layer orchestrates storage and telemetry through use
//! cases. It defines:
//!
//! - **Ports**: Interfaces for the storage engine and telemetry sink
//! - **Use Cases**: Add, remove and update operations plus their facade
//! - **Services**: Background task scope for fire-and-forget work

pub mod ports;
pub mod services;
pub mod use_cases;

pub use ports::*;
pub use services::*;
pub use use_cases::*;
