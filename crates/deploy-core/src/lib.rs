//! deploy-core: núcleo de orquestación y resolución.
//!
//! El core decide *qué* desplegar, *en qué orden*, *una sola vez* y con qué
//! artefactos previos; no sabe nada de contratos concretos. Las piezas:
//!
//! - `registry`: mapeo nombre → artifact, create-once, sin update ni delete.
//! - `chain`: frontera con la red (deploy/execute/read) más un doble
//!   simulado determinista.
//! - `step` + `scheduler`: grafo de pasos con orden topológico, skip
//!   idempotente genérico y fase final.
//! - `context`: objeto de contexto explícito que recibe cada paso.

pub mod chain;
pub mod context;
pub mod errors;
pub mod model;
pub mod registry;
pub mod scheduler;
pub mod step;

pub use chain::{ChainClient, ChainError, DeployOutcome, SimulatedChain};
pub use context::StepContext;
pub use errors::CoreError;
pub use model::DeployedArtifact;
pub use registry::{ArtifactRegistry, InMemoryRegistry};
pub use scheduler::{RunEvent, RunEventKind, RunLog, RunReport, Scheduler, StepFailure, StepStatus};
pub use step::{DeployStep, Phase};
