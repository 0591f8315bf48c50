//! Distribuidor de recompensas compartido por todas las estrategias.

use serde_json::json;

use deploy_core::{CoreError, DeployStep, StepContext};

use crate::names;

pub struct RewardsDistributorStep;

impl DeployStep for RewardsDistributorStep {
    fn tag(&self) -> &str {
        names::REWARDS_DISTRIBUTOR
    }

    fn depends_on(&self) -> Vec<&str> {
        vec![names::CORE, names::WBNB]
    }

    fn creates(&self) -> Vec<String> {
        vec![names::REWARDS_DISTRIBUTOR.to_string()]
    }

    fn run(&self, ctx: &mut StepContext) -> Result<(), CoreError> {
        let core = ctx.address_of(names::CORE)?;
        let wbnb = ctx.address_of(names::WBNB)?;
        ctx.deploy_once(names::REWARDS_DISTRIBUTOR,
                        "RewardsDistributor",
                        json!([core, wbnb]),
                        self.tag())?;
        Ok(())
    }
}
