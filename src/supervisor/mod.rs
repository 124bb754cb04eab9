// Backend process supervision
pub mod process;
pub mod status;

// Re-export commonly used types
pub use process::{BackendSupervisor, LaunchPlan, SpawnError};
pub use status::ProcessStatus;
