//! deploy-domain: tipos de valor del dominio de despliegue.
//!
//! Este crate no conoce el motor ni la red: sólo define direcciones,
//! roles, el selector de red y los descriptores declarativos de
//! estrategias. Todo es determinista y serializable.

pub mod address;
pub mod errors;
pub mod network;
pub mod role;
pub mod strategy;

pub use address::ChainAddress;
pub use errors::DomainError;
pub use network::Network;
pub use role::{RoleId, GOVERNOR_ROLE, MASTER_ROLE};
pub use strategy::{FeeOverrides, LegSpec, StrategyDescriptor, StrategyKind, StrategyMode};
