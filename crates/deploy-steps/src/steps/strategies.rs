//! Despliegue de la tabla de estrategias y su alta como pools del farm.

use serde_json::json;

use deploy_core::{CoreError, DeployStep, StepContext};

use crate::names;
use crate::strategy::{deduped_strategies, resolve_strategy, ChainPairInspector, WellKnown};

/// Resuelve y despliega cada estrategia de la tabla. Skip por elemento:
/// una estrategia ya registrada no se vuelve a resolver ni a desplegar.
/// Cada contrato nuevo cede su ownership al farm inmediatamente.
pub struct StrategiesStep;

impl DeployStep for StrategiesStep {
    fn tag(&self) -> &str {
        "Strategies"
    }

    fn depends_on(&self) -> Vec<&str> {
        vec![names::CORE,
             names::WBNB,
             names::UP_FARM,
             names::UP,
             "Tokens",
             names::CAKE,
             names::BSW,
             names::MASTER_CHEF,
             names::MASTER_CHEF_BSW,
             names::PRIMARY_ROUTER,
             names::SECONDARY_ROUTER,
             names::BISWAP_ROUTER,
             names::MINING_MASTER_ETH,
             names::MINING_MASTER_BNB,
             names::MINING_MASTER_CAKE,
             names::STAKING_CAKE,
             names::REWARDS_DISTRIBUTOR,
             "LPs"]
    }

    fn run(&self, ctx: &mut StepContext) -> Result<(), CoreError> {
        let wk = WellKnown::from_registry(ctx.registry)?;
        for descriptor in deduped_strategies() {
            let name = descriptor.artifact_name();
            if ctx.registry.exists(&name) {
                log::info!("reusing existing artifact \"{}\"", name);
                continue;
            }
            // la resolución sólo lee; el préstamo del inspector termina acá
            let resolved = {
                let inspector = ChainPairInspector { chain: &*ctx.chain };
                resolve_strategy(descriptor, &*ctx.registry, &inspector, &wk)?
            };
            let outcome = ctx.deploy_once(&name,
                                          descriptor.kind.contract_name(),
                                          resolved.constructor_args(),
                                          self.tag())?;
            if outcome.is_newly_created {
                ctx.chain
                   .execute(outcome.address, "transferOwnership", &json!([wk.up_farm]))?;
            }
        }
        Ok(())
    }
}

/// Alta de cada estrategia como pool del farm. Pool con alloc 0, sin
/// vesting propio, con update masivo.
pub struct UpFarmPoolsStep;

impl DeployStep for UpFarmPoolsStep {
    fn tag(&self) -> &str {
        "UpFarmAddPool"
    }

    fn depends_on(&self) -> Vec<&str> {
        vec![names::UP_FARM, "Strategies"]
    }

    fn run(&self, ctx: &mut StepContext) -> Result<(), CoreError> {
        let up_farm = ctx.address_of(names::UP_FARM)?;
        for descriptor in deduped_strategies() {
            let name = descriptor.artifact_name();
            let record = format!("UpFarm-{}", name);
            let want = ctx.address_of(descriptor.want)?;
            ctx.attach_once(&record, &name, self.tag(), move |chain, strategy| {
                   chain.execute(up_farm, "add", &json!([0, want, false, strategy, true]))
               })?;
        }
        Ok(())
    }
}
