//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain rules and ports to accomplish
//! high-level use cases like "find component folders" or "clean a component".

pub mod clean_service;
pub mod housekeeping_service;

pub use clean_service::{CleanOptions, CleanReport, CleanService};
pub use housekeeping_service::HousekeepingService;
