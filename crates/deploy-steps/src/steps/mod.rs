//! Pasos concretos del pipeline.
//!
//! Cada paso es un `DeployStep` pequeño: decide argumentos a partir del
//! registro, invoca la cadena a través del contexto y registra lo creado.
//! Los pasos con tablas internas (tokens, pares, pools, estrategias) hacen
//! el skip por elemento; el resto declara `creates()` y deja el skip al
//! scheduler.

pub mod amm;
pub mod core;
pub mod farms;
pub mod report;
pub mod rewards;
pub mod staking;
pub mod strategies;
pub mod tokens;

use deploy_domain::{ChainAddress, Network};

/// Cuenta operadora del despliegue. El cliente real la reemplaza por el
/// signer configurado; el simulado sólo necesita una dirección estable.
pub fn operator() -> ChainAddress {
    ChainAddress::derive("account:operator")
}

/// Gate de red: los pasos de infraestructura de prueba (tokens, AMMs,
/// chefs externos) no corren contra mainnet, donde esos contratos ya
/// existen como despliegues externos pre-registrados.
pub(crate) fn skip_on_mainnet(network: Network, tag: &str) -> bool {
    if network.is_mainnet() {
        log::info!("step \"{}\" skipped on mainnet", tag);
        return true;
    }
    false
}
