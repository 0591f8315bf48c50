//! Scheduler de pasos con orden por dependencias.

mod core;
mod events;
mod status;

pub use core::{RunReport, Scheduler, StepFailure};
pub use events::{RunEvent, RunEventKind, RunLog};
pub use status::StepStatus;
