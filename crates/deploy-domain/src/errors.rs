//! Errores del dominio (simples por ahora).

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum DomainError {
    #[error("invalid chain address: {0}")]
    InvalidAddress(String),
    #[error("unknown network: {0}")]
    UnknownNetwork(String),
}
