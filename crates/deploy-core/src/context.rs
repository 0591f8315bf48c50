//! Contexto explícito entregado a cada paso.
//!
//! Reemplaza el "registro como store global" por un objeto que viaja por
//! parámetro: registro detrás de la interfaz create-once, cliente de cadena
//! y selector de red. Los patrones repetidos (deploy idempotente, artifact
//! derivado, attachment con marcador) viven aquí una sola vez.

use serde_json::{json, Value};

use deploy_domain::{ChainAddress, Network};

use crate::chain::{ChainClient, ChainError, DeployOutcome};
use crate::errors::CoreError;
use crate::model::DeployedArtifact;
use crate::registry::ArtifactRegistry;

pub struct StepContext<'a> {
    pub registry: &'a mut dyn ArtifactRegistry,
    pub chain: &'a mut dyn ChainClient,
    pub network: Network,
}

impl<'a> StepContext<'a> {
    pub fn new(registry: &'a mut dyn ArtifactRegistry,
               chain: &'a mut dyn ChainClient,
               network: Network)
               -> Self {
        Self { registry, chain, network }
    }

    pub fn address_of(&self, name: &str) -> Result<ChainAddress, CoreError> {
        self.registry.address_of(name)
    }

    /// Despliegue idempotente: si el nombre ya existe en el registro, lo
    /// reutiliza sin tocar la cadena; si no, despliega y lo registra.
    /// `is_newly_created == false` en la reutilización, para que el paso
    /// sólo ejecute sus acciones de primera vez (handoffs, mints) una vez.
    pub fn deploy_once(&mut self,
                       name: &str,
                       contract_kind: &str,
                       constructor_args: Value,
                       step_tag: &str)
                       -> Result<DeployOutcome, CoreError> {
        if let Some(existing) = self.registry.get_or_null(name) {
            log::info!("reusing existing artifact \"{}\" at {}", name, existing.address);
            return Ok(DeployOutcome { address: existing.address, is_newly_created: false });
        }
        let outcome = self.chain.deploy(contract_kind, &constructor_args)?;
        self.registry.save(DeployedArtifact::new(name,
                                                 outcome.address,
                                                 json!({ "contract": contract_kind }),
                                                 step_tag))?;
        log::info!("deployed \"{}\" ({}) at {}", name, contract_kind, outcome.address);
        Ok(outcome)
    }

    /// Registra un artifact derivado (no desplegado por este pipeline),
    /// p. ej. un par creado por la factory del AMM.
    pub fn save_derived(&mut self,
                        name: &str,
                        address: ChainAddress,
                        interface: Value,
                        step_tag: &str)
                        -> Result<(), CoreError> {
        self.registry.save(DeployedArtifact::new(name, address, interface, step_tag))?;
        log::info!("saved derived artifact \"{}\" at {}", name, address);
        Ok(())
    }

    /// Attachment idempotente en dos fases: el registro del nombre compuesto
    /// es el marcador de commit. Si el nombre existe, no hay llamada a la
    /// cadena. La escritura del marcador NO es atómica con la llamada: un
    /// crash entre ambas deja el efecto on-chain sin marcador y el retry
    /// repetirá la llamada (semántica at-least-once, limitación conocida).
    pub fn attach_once<F>(&mut self,
                          record_name: &str,
                          parent: &str,
                          step_tag: &str,
                          call: F)
                          -> Result<bool, CoreError>
        where F: FnOnce(&mut dyn ChainClient, ChainAddress) -> Result<(), ChainError>
    {
        if self.registry.exists(record_name) {
            log::info!("reusing existing artifact \"{}\"", record_name);
            return Ok(false);
        }
        let parent_art = self.registry.get(parent)?;
        call(self.chain, parent_art.address)?;
        self.registry.save(DeployedArtifact::new(record_name,
                                                 parent_art.address,
                                                 parent_art.interface.clone(),
                                                 step_tag))?;
        log::info!("attached \"{}\" on {}", record_name, parent);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::SimulatedChain;
    use crate::registry::InMemoryRegistry;

    #[test]
    fn deploy_once_skips_on_replay() {
        let mut reg = InMemoryRegistry::new();
        let mut chain = SimulatedChain::new();
        let mut ctx = StepContext::new(&mut reg, &mut chain, Network::Local);

        let first = ctx.deploy_once("Core", "Core", json!([]), "core").unwrap();
        assert!(first.is_newly_created);
        let second = ctx.deploy_once("Core", "Core", json!([]), "core").unwrap();
        assert!(!second.is_newly_created);
        assert_eq!(first.address, second.address);
        assert_eq!(chain.deploy_count(), 1);
    }

    #[test]
    fn attach_once_uses_record_as_commit_marker() {
        let mut reg = InMemoryRegistry::new();
        let mut chain = SimulatedChain::new();
        let mut ctx = StepContext::new(&mut reg, &mut chain, Network::Local);
        ctx.deploy_once("UpFarm", "UpFarm", json!([]), "up-farm").unwrap();

        let did = ctx.attach_once("UpFarm-poolX", "UpFarm", "pools", |chain, farm| {
                         chain.execute(farm, "add", &json!([0, "0x", false]))
                     })
                     .unwrap();
        assert!(did);
        let again = ctx.attach_once("UpFarm-poolX", "UpFarm", "pools", |chain, farm| {
                           chain.execute(farm, "add", &json!([0, "0x", false]))
                       })
                       .unwrap();
        assert!(!again, "replay no debe llamar a la cadena");
        assert_eq!(chain.executions_of("add"), 1);
    }

    #[test]
    fn attach_once_requires_parent() {
        let mut reg = InMemoryRegistry::new();
        let mut chain = SimulatedChain::new();
        let mut ctx = StepContext::new(&mut reg, &mut chain, Network::Local);
        let err = ctx.attach_once("X-pool", "X", "pools", |_, _| Ok(())).unwrap_err();
        assert_eq!(err, CoreError::MissingDependencyArtifact("X".into()));
    }
}
