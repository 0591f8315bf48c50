//! Artifact desplegado o derivado.
//!
//! Un `DeployedArtifact` es la unidad que guarda el registro: nombre único,
//! dirección y un descriptor de interfaz tipo ABI. El descriptor es JSON
//! opaco para el core (igual que el payload neutral de un artifact en un
//! motor de flujos); sólo los pasos le dan semántica. Inmutable una vez
//! creado: el registro nunca sobreescribe un nombre existente.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use deploy_domain::ChainAddress;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeployedArtifact {
    pub name: String,
    pub address: ChainAddress,
    /// Descriptor de interfaz tipo ABI; JSON opaco para el core.
    pub interface: Value,
    /// Tag del paso que lo creó (trazabilidad, no entra en la identidad).
    pub created_at_step: String,
}

impl DeployedArtifact {
    pub fn new(name: impl Into<String>,
               address: ChainAddress,
               interface: Value,
               created_at_step: impl Into<String>)
               -> Self {
        Self { name: name.into(),
               address,
               interface,
               created_at_step: created_at_step.into() }
    }
}
