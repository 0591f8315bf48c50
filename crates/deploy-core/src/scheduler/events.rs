//! Eventos de corrida, append-only.
//!
//! El scheduler emite una observación por transición relevante; el log es
//! el contrato observable de la corrida (incluida la observación "reusing
//! existing artifact" del skip idempotente, que no tiene efecto en cadena).

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
pub enum RunEventKind {
    RunStarted { step_count: usize },
    StepStarted { tag: String },
    /// Skip idempotente: todos los artifacts declarados ya existían.
    StepSkipped { tag: String, reusing: Vec<String> },
    StepFinished { tag: String, created: Vec<String> },
    StepFailed { tag: String, error: String },
    /// El paso nunca arrancó: una dependencia (transitiva) falló.
    StepBlocked { tag: String, failed_dependency: String },
    RunCompleted { created_total: usize },
}

#[derive(Debug, Clone, Serialize)]
pub struct RunEvent {
    pub seq: u64,
    pub run_id: Uuid,
    pub kind: RunEventKind,
    pub ts: DateTime<Utc>, // metadato, no afecta la semántica
}

/// Log en memoria de una corrida.
#[derive(Debug)]
pub struct RunLog {
    run_id: Uuid,
    events: Vec<RunEvent>,
}

impl RunLog {
    pub fn new() -> Self {
        Self { run_id: Uuid::new_v4(), events: Vec::new() }
    }

    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    pub fn append(&mut self, kind: RunEventKind) {
        let seq = self.events.len() as u64;
        self.events.push(RunEvent { seq, run_id: self.run_id, kind, ts: Utc::now() });
    }

    pub fn events(&self) -> &[RunEvent] {
        &self.events
    }
}

impl Default for RunLog {
    fn default() -> Self {
        Self::new()
    }
}
