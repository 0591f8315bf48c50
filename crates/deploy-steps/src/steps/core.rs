//! Núcleo de gobernanza: Core, token UP, VestingMaster y timelock.

use serde_json::json;

use deploy_core::{CoreError, DeployStep, StepContext};
use deploy_domain::role::GOVERNOR_ROLE;

use crate::names;

use super::operator;

/// Contrato de control de acceso del protocolo. Raíz de todo el grafo.
pub struct CoreStep;

impl DeployStep for CoreStep {
    fn tag(&self) -> &str {
        names::CORE
    }

    fn creates(&self) -> Vec<String> {
        vec![names::CORE.to_string()]
    }

    fn run(&self, ctx: &mut StepContext) -> Result<(), CoreError> {
        ctx.deploy_once(names::CORE, "Core", json!([]), self.tag())?;
        Ok(())
    }
}

/// Token de gobernanza UP.
pub struct UpTokenStep;

impl DeployStep for UpTokenStep {
    fn tag(&self) -> &str {
        names::UP
    }

    fn depends_on(&self) -> Vec<&str> {
        vec![names::CORE]
    }

    fn creates(&self) -> Vec<String> {
        vec![names::UP.to_string()]
    }

    fn run(&self, ctx: &mut StepContext) -> Result<(), CoreError> {
        let core = ctx.address_of(names::CORE)?;
        ctx.deploy_once(names::UP, "UpToken", json!([operator(), core]), self.tag())?;
        Ok(())
    }
}

/// Vesting lineal de recompensas: 19 períodos de 3 días.
pub struct VestingMasterStep;

impl DeployStep for VestingMasterStep {
    fn tag(&self) -> &str {
        names::VESTING_MASTER
    }

    fn depends_on(&self) -> Vec<&str> {
        vec![names::CORE, names::UP]
    }

    fn creates(&self) -> Vec<String> {
        vec![names::VESTING_MASTER.to_string()]
    }

    fn run(&self, ctx: &mut StepContext) -> Result<(), CoreError> {
        let core = ctx.address_of(names::CORE)?;
        let up = ctx.address_of(names::UP)?;
        ctx.deploy_once(names::VESTING_MASTER,
                        "VestingMaster",
                        json!([core, 259200, 19, up]),
                        self.tag())?;
        Ok(())
    }
}

/// Timelock de gobernanza. En la primera creación recibe el rol governor
/// sobre Core; en reutilizaciones no se vuelve a otorgar.
pub struct TimelockStep;

impl DeployStep for TimelockStep {
    fn tag(&self) -> &str {
        names::TIMELOCK
    }

    fn depends_on(&self) -> Vec<&str> {
        vec![names::CORE]
    }

    fn creates(&self) -> Vec<String> {
        vec![names::TIMELOCK.to_string()]
    }

    fn run(&self, ctx: &mut StepContext) -> Result<(), CoreError> {
        let core = ctx.address_of(names::CORE)?;
        let proposers = json!([operator()]);
        let executors = json!([operator()]);
        let outcome = ctx.deploy_once(names::TIMELOCK,
                                      "TimelockController",
                                      json!([60, 30, proposers, executors]),
                                      self.tag())?;
        if outcome.is_newly_created {
            log::info!("granting {} on Core to {}", GOVERNOR_ROLE.to_hex(), names::TIMELOCK);
            ctx.chain
               .execute(core, "grantGovernor", &json!([outcome.address]))?;
        }
        Ok(())
    }
}
