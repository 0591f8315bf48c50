//! Staking de UP y el farm principal del protocolo, con sus pools y los
//! grants de MASTER_ROLE sobre Core.

use serde_json::json;

use deploy_core::{CoreError, DeployStep, StepContext};
use deploy_domain::role::MASTER_ROLE;
use deploy_domain::ChainAddress;

use crate::names;

/// Contrato StakingRewards parametrizado: los tres del pipeline difieren
/// sólo en token de recompensa, vesting y emisión por bloque.
pub struct StakingRewardsStep {
    name: &'static str,
    contract: &'static str,
    reward_token: &'static str,
    vesting: Option<&'static str>,
    reward_per_block: &'static str,
    deps: &'static [&'static str],
}

impl StakingRewardsStep {
    pub fn up() -> Self {
        Self { name: names::STAKING_UP,
               contract: "StakingRewards",
               reward_token: names::UP,
               vesting: Some(names::VESTING_MASTER),
               reward_per_block: "500000000000000000",
               deps: &[names::CORE, names::VESTING_MASTER, names::UP] }
    }

    pub fn cake() -> Self {
        Self { name: names::STAKING_CAKE,
               contract: "StakingRewards",
               reward_token: names::CAKE,
               vesting: None,
               reward_per_block: "500000000000000000",
               deps: &[names::CORE, names::UP, names::CAKE] }
    }

    pub fn bnb() -> Self {
        Self { name: names::STAKING_BNB,
               contract: "StakingRewardsBNB",
               reward_token: names::WBNB,
               vesting: None,
               reward_per_block: "500000000000000",
               deps: &[names::CORE, names::UP, names::WBNB] }
    }
}

impl DeployStep for StakingRewardsStep {
    fn tag(&self) -> &str {
        self.name
    }

    fn depends_on(&self) -> Vec<&str> {
        self.deps.to_vec()
    }

    fn creates(&self) -> Vec<String> {
        vec![self.name.to_string()]
    }

    fn run(&self, ctx: &mut StepContext) -> Result<(), CoreError> {
        let core = ctx.address_of(names::CORE)?;
        let up = ctx.address_of(names::UP)?;
        let reward = ctx.address_of(self.reward_token)?;
        let vesting = match self.vesting {
            Some(name) => ctx.address_of(name)?,
            None => ChainAddress::ZERO,
        };
        ctx.deploy_once(self.name,
                        self.contract,
                        json!([core, up, reward, vesting, self.reward_per_block, 0,
                               "1000000000000000000"]),
                        self.tag())?;
        Ok(())
    }
}

/// Pool UP de un contrato de staking. Los pools arrancan con alloc 0 y se
/// activan después por gobernanza.
pub struct StakingPoolStep {
    staking: &'static str,
    tag: &'static str,
    /// El addPool de la variante UP lleva el flag de update masivo.
    with_update: bool,
}

impl StakingPoolStep {
    pub fn up() -> Self {
        Self { staking: names::STAKING_UP, tag: "StakingRewardsUPAddPool", with_update: true }
    }

    pub fn cake() -> Self {
        Self { staking: names::STAKING_CAKE, tag: "StakingRewardsCAKEAddPool", with_update: false }
    }

    pub fn bnb() -> Self {
        Self { staking: names::STAKING_BNB, tag: "StakingRewardsBNBAddPool", with_update: false }
    }
}

impl DeployStep for StakingPoolStep {
    fn tag(&self) -> &str {
        self.tag
    }

    fn depends_on(&self) -> Vec<&str> {
        vec![self.staking]
    }

    fn run(&self, ctx: &mut StepContext) -> Result<(), CoreError> {
        let record = format!("{}-{}", self.staking, names::UP);
        let lp = ctx.address_of(names::UP)?;
        let with_update = self.with_update;
        ctx.attach_once(&record, self.staking, self.tag, move |chain, staking| {
               let args = if with_update {
                   json!([0, lp, true])
               } else {
                   json!([0, lp, false])
               };
               chain.execute(staking, "addPool", &args)
           })?;
        Ok(())
    }
}

/// Otorga MASTER_ROLE sobre Core a un contrato que debe poder mintear o
/// mover fondos del protocolo. El registro del nombre del grant es el
/// marcador de idempotencia.
pub struct GrantMasterRoleStep {
    tag: &'static str,
    record: &'static str,
    grantee: &'static str,
}

impl GrantMasterRoleStep {
    pub fn staking_up() -> Self {
        Self { tag: "StakingRewardsUPGrant",
               record: "StakingRewardsUPGrant",
               grantee: names::STAKING_UP }
    }

    pub fn up_farm() -> Self {
        Self { tag: "UpFarmGrant", record: "UpFarmGrant", grantee: names::UP_FARM }
    }
}

impl DeployStep for GrantMasterRoleStep {
    fn tag(&self) -> &str {
        self.tag
    }

    fn depends_on(&self) -> Vec<&str> {
        vec![names::CORE, self.grantee]
    }

    fn run(&self, ctx: &mut StepContext) -> Result<(), CoreError> {
        let core = ctx.address_of(names::CORE)?;
        ctx.attach_once(self.record, self.grantee, self.tag, move |chain, grantee| {
               chain.execute(core, "grantRole", &json!([MASTER_ROLE.to_hex(), grantee]))
           })?;
        Ok(())
    }
}

/// Farm principal del protocolo: agrega las estrategias como pools.
pub struct UpFarmStep;

impl DeployStep for UpFarmStep {
    fn tag(&self) -> &str {
        names::UP_FARM
    }

    fn depends_on(&self) -> Vec<&str> {
        vec![names::CORE, names::VESTING_MASTER, names::UP]
    }

    fn creates(&self) -> Vec<String> {
        vec![names::UP_FARM.to_string()]
    }

    fn run(&self, ctx: &mut StepContext) -> Result<(), CoreError> {
        let core = ctx.address_of(names::CORE)?;
        let up = ctx.address_of(names::UP)?;
        let vesting = ctx.address_of(names::VESTING_MASTER)?;
        ctx.deploy_once(names::UP_FARM,
                        "UpFarm",
                        json!([core, up, vesting, "200000000000000000", 0]),
                        self.tag())?;
        Ok(())
    }
}
