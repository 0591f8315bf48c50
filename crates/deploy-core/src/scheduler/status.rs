//! Estado de un paso en tiempo de ejecución.
//!
//! Las transiciones válidas son:
//! - `Pending` -> `Running`
//! - `Pending` -> `Done` (skip idempotente: los artifacts ya existían)
//! - `Running` -> `Done`
//! - `Running` -> `Failed`
//! - `Pending` -> `Blocked` (una dependencia transitiva falló)
//!
//! `Failed` y `Blocked` son terminales; no hay reversión ni reintento
//! dentro de la corrida.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StepStatus {
    Pending,
    Running,
    Done,
    Failed,
    Blocked,
}

impl StepStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, StepStatus::Done | StepStatus::Failed | StepStatus::Blocked)
    }
}
