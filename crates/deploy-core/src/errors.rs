//! Errores del core.
//!
//! Todos son fatales para la corrida: no hay retry interno;
//! el mecanismo de reintento es re-ejecutar el pipeline completo y dejar que
//! los pasos completados se auto-salten vía el registro.

use thiserror::Error;

use crate::chain::ChainError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Un paso o el resolver buscó un nombre que aún no está en el registro:
    /// indica una declaración de dependencias mal ordenada.
    #[error("missing dependency artifact \"{0}\"")]
    MissingDependencyArtifact(String),

    /// Un save colisionó con un nombre existente: bug en el skip-check.
    #[error("duplicate artifact name \"{0}\"")]
    DuplicateArtifactName(String),

    #[error(transparent)]
    Chain(#[from] ChainError),

    /// Un descriptor resolvió a un emparejamiento ruta/router inconsistente.
    #[error("malformed descriptor for strategy \"{strategy}\": {detail}")]
    MalformedDescriptor { strategy: String, detail: String },

    #[error("duplicate step tag \"{0}\"")]
    DuplicateStepTag(String),

    #[error("step \"{step}\" depends on unknown tag \"{dependency}\"")]
    UnknownDependency { step: String, dependency: String },

    /// Un paso de fase normal no puede depender de uno de fase final.
    #[error("step \"{step}\" depends on final-phase step \"{dependency}\"")]
    FinalPhaseDependency { step: String, dependency: String },

    #[error("dependency cycle involving step \"{0}\"")]
    DependencyCycle(String),

    #[error("unknown step tag \"{0}\" in selection")]
    UnknownSelection(String),

    /// Falla del backend de persistencia del registro.
    #[error("registry storage: {0}")]
    Storage(String),
}
