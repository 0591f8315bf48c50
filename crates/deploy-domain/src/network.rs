//! Selector de red destino.
//!
//! El pipeline corre igual contra cualquier red; la única decisión que
//! depende de la red es si los pasos auxiliares (tokens de prueba, AMMs
//! sintéticos) se ejecutan o no: sólo fuera de mainnet.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    Testnet,
    Local,
}

impl Network {
    pub fn chain_id(&self) -> &'static str {
        match self {
            Network::Mainnet => "56",
            Network::Testnet => "97",
            Network::Local => "31337",
        }
    }

    pub fn from_chain_id(id: &str) -> Result<Self, DomainError> {
        match id {
            "56" => Ok(Network::Mainnet),
            "97" => Ok(Network::Testnet),
            "31337" => Ok(Network::Local),
            other => Err(DomainError::UnknownNetwork(other.to_string())),
        }
    }

    /// Predicado de producción: distingue mainnet de todo lo demás.
    pub fn is_mainnet(&self) -> bool {
        matches!(self, Network::Mainnet)
    }

    /// Nombre estable usado para scoping del registro en disco.
    pub fn name(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
            Network::Local => "local",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Network {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            "local" | "hardhat" => Ok(Network::Local),
            other => Err(DomainError::UnknownNetwork(other.to_string())),
        }
    }
}
