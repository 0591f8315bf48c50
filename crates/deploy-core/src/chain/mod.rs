//! Frontera con la cadena: deploy, llamada mutadora y lectura.
//!
//! El cliente real (firmas, nonce, RPC) vive fuera del core; aquí sólo se
//! fija el contrato de la frontera y un doble simulado determinista para
//! tests y corridas en seco. Todas las llamadas son bloqueantes y
//! estrictamente secuenciales: no hay concurrencia que coordinar.

mod sim;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use deploy_domain::ChainAddress;

pub use sim::SimulatedChain;

#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
pub enum ChainError {
    #[error("transaction reverted: {0}")]
    Reverted(String),
    #[error("network unreachable: {0}")]
    Unreachable(String),
    #[error("unknown contract kind \"{0}\"")]
    UnknownContractKind(String),
    #[error("unsupported read \"{method}\" on {target}")]
    UnsupportedRead { target: ChainAddress, method: String },
}

/// Resultado de un deploy. `is_newly_created` distingue la primera creación
/// de una reutilización que el cliente pudiera resolver por su cuenta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeployOutcome {
    pub address: ChainAddress,
    pub is_newly_created: bool,
}

pub trait ChainClient {
    /// Despliega un contrato del tipo dado con los args de constructor.
    fn deploy(&mut self, contract_kind: &str, constructor_args: &Value)
              -> Result<DeployOutcome, ChainError>;

    /// Llamada mutadora de estado; bloquea hasta confirmación o rechazo.
    fn execute(&mut self, target: ChainAddress, method: &str, args: &Value)
               -> Result<(), ChainError>;

    /// Llamada de sólo lectura.
    fn read(&self, target: ChainAddress, method: &str, args: &Value) -> Result<Value, ChainError>;
}
