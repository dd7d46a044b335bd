// Library interface for fitstat modules
// This allows integration tests to access the core functionality

pub mod config;
pub mod error;
pub mod factory;
pub mod logging;
pub mod models;
pub mod report;
pub mod running;
pub mod swimming;
pub mod walking;
pub mod workout;

// Re-export commonly used types for convenience
pub use error::{FitstatError, Result};
pub use factory::WorkoutFactory;
pub use logging::{init_logging, LogFormat};
pub use models::{SensorPacket, WorkoutKind, WorkoutSummary};
pub use workout::Workout;
