//! Fuentes de yield: chefs externos de prueba y los mining masters del
//! protocolo, con sus tablas de pools.

use serde_json::{json, Value};

use deploy_core::{CoreError, DeployStep, StepContext};
use deploy_domain::ChainAddress;

use crate::names;

use super::{operator, skip_on_mainnet};

/// Chef externo principal con su token intermedio de recompensas. El bar
/// cede su ownership al chef en la primera creación.
pub struct MasterChefStep;

impl DeployStep for MasterChefStep {
    fn tag(&self) -> &str {
        names::MASTER_CHEF
    }

    fn depends_on(&self) -> Vec<&str> {
        vec![names::CAKE]
    }

    fn creates(&self) -> Vec<String> {
        vec![names::SYRUP_BAR.to_string(), names::MASTER_CHEF.to_string()]
    }

    fn run(&self, ctx: &mut StepContext) -> Result<(), CoreError> {
        if skip_on_mainnet(ctx.network, self.tag()) {
            return Ok(());
        }
        let cake = ctx.address_of(names::CAKE)?;
        let syrup = ctx.deploy_once(names::SYRUP_BAR, "SyrupBar", json!([cake]), self.tag())?;
        let chef = ctx.deploy_once(names::MASTER_CHEF,
                                   "MasterChef",
                                   json!([cake, syrup.address, operator(),
                                          "1000000000000000000", 0]),
                                   self.tag())?;
        if chef.is_newly_created {
            ctx.chain
               .execute(syrup.address, "transferOwnership", &json!([chef.address]))?;
        }
        Ok(())
    }
}

/// Chef de Biswap; queda autorizado como minter de su token de recompensa.
pub struct MasterChefBswStep;

impl DeployStep for MasterChefBswStep {
    fn tag(&self) -> &str {
        names::MASTER_CHEF_BSW
    }

    fn depends_on(&self) -> Vec<&str> {
        vec![names::BSW]
    }

    fn creates(&self) -> Vec<String> {
        vec![names::MASTER_CHEF_BSW.to_string()]
    }

    fn run(&self, ctx: &mut StepContext) -> Result<(), CoreError> {
        if skip_on_mainnet(ctx.network, self.tag()) {
            return Ok(());
        }
        let bsw = ctx.address_of(names::BSW)?;
        let chef = ctx.deploy_once(names::MASTER_CHEF_BSW,
                                   "MasterChefBSW",
                                   json!([bsw, operator(), operator(), operator(),
                                          "1000000000000000000", 0, 857000, 90000, 43000,
                                          10000]),
                                   self.tag())?;
        if chef.is_newly_created {
            ctx.chain.execute(bsw, "addMinter", &json!([chef.address]))?;
        }
        Ok(())
    }
}

/// Mining master del protocolo: emite XMS contra depósitos del token dado.
pub struct MiningMasterStep {
    name: &'static str,
    contract: &'static str,
    reward_token: &'static str,
    reward_per_block: &'static str,
    deps: &'static [&'static str],
}

impl MiningMasterStep {
    pub fn bnb() -> Self {
        Self { name: names::MINING_MASTER_BNB,
               contract: "LiquidityMiningMasterBNB",
               reward_token: names::WBNB,
               reward_per_block: "500000000000000000",
               deps: &[names::CORE, names::WBNB, "Tokens"] }
    }

    pub fn cake() -> Self {
        Self { name: names::MINING_MASTER_CAKE,
               contract: "LiquidityMiningMaster",
               reward_token: names::CAKE,
               reward_per_block: "5000000000000000",
               deps: &[names::CORE, "Tokens", names::CAKE] }
    }

    pub fn eth() -> Self {
        Self { name: names::MINING_MASTER_ETH,
               contract: "LiquidityMiningMaster",
               reward_token: names::ETH,
               reward_per_block: "5000000000000000",
               deps: &[names::CORE, "Tokens"] }
    }
}

impl DeployStep for MiningMasterStep {
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
        if skip_on_mainnet(ctx.network, self.tag()) {
            return Ok(());
        }
        let core = ctx.address_of(names::CORE)?;
        let xms = ctx.address_of(names::XMS)?;
        let reward = ctx.address_of(self.reward_token)?;
        ctx.deploy_once(self.name,
                        self.contract,
                        json!([core, xms, ChainAddress::ZERO, reward, self.reward_per_block,
                               0, "1000000000000000000"]),
                        self.tag())?;
        Ok(())
    }
}

/// Forma de la llamada add-pool de cada familia de contratos.
enum PoolCall {
    /// `add(allocPoint, lp, withUpdate)` de los chefs externos.
    ChefAdd,
    /// `addPool(allocPoint, lp, withVesting, withUpdate)` de los masters.
    MasterAddPool,
}

/// Registra la tabla de pools de una fuente de yield, un marcador por pool.
pub struct FarmPoolsStep {
    tag: &'static str,
    parent: &'static str,
    record_prefix: &'static str,
    pools: &'static [(&'static str, u64)],
    call: PoolCall,
    deps: &'static [&'static str],
}

impl FarmPoolsStep {
    pub fn master_chef() -> Self {
        Self { tag: "MasterChefAddPool",
               parent: names::MASTER_CHEF,
               record_prefix: "MasterChefPool",
               pools: &[(names::PAIR_BUSD_BNB, 1000),
                        (names::PAIR_ETH_BUSD, 1000),
                        (names::PAIR_CAKE_BNB, 1000),
                        (names::PAIR_CAKE_BUSD, 1000)],
               call: PoolCall::ChefAdd,
               deps: &[names::MASTER_CHEF, "LPs"] }
    }

    pub fn master_chef_bsw() -> Self {
        Self { tag: "MasterChefBSWAddPool",
               parent: names::MASTER_CHEF_BSW,
               record_prefix: "MasterChefBSWPool",
               pools: &[(names::PAIR_BSW_BNB, 1000), (names::PAIR_BTCB_USDT, 1000)],
               call: PoolCall::ChefAdd,
               deps: &[names::MASTER_CHEF_BSW, "LPs"] }
    }

    pub fn mining_master_bnb() -> Self {
        Self { tag: "LiquidityMiningMasterBNBAddPool",
               parent: names::MINING_MASTER_BNB,
               record_prefix: names::MINING_MASTER_BNB,
               pools: &[(names::XMS, 1000), (names::PAIR_XMS_BNB, 1000), (names::USDM, 1000)],
               call: PoolCall::MasterAddPool,
               deps: &[names::MINING_MASTER_BNB, "LPs"] }
    }

    pub fn mining_master_cake() -> Self {
        Self { tag: "LiquidityMiningMasterCAKEAddPool",
               parent: names::MINING_MASTER_CAKE,
               record_prefix: names::MINING_MASTER_CAKE,
               pools: &[(names::XMS, 1000),
                        (names::USDM, 1000),
                        (names::PAIR_XMS_USDM, 1000),
                        (names::PAIR_XMS_BNB, 1000)],
               call: PoolCall::MasterAddPool,
               deps: &[names::MINING_MASTER_CAKE, "LPs"] }
    }

    pub fn mining_master_eth() -> Self {
        Self { tag: "LiquidityMiningMasterETHAddPool",
               parent: names::MINING_MASTER_ETH,
               record_prefix: names::MINING_MASTER_ETH,
               pools: &[(names::XMS, 1000), (names::PAIR_XMS_BNB, 1000)],
               call: PoolCall::MasterAddPool,
               deps: &[names::MINING_MASTER_ETH, "LPs"] }
    }

    fn call_args(&self, alloc_point: u64, lp: ChainAddress) -> Value {
        match self.call {
            PoolCall::ChefAdd => json!([alloc_point, lp, true]),
            PoolCall::MasterAddPool => json!([alloc_point, lp, false, true]),
        }
    }
}

impl DeployStep for FarmPoolsStep {
    fn tag(&self) -> &str {
        self.tag
    }

    fn depends_on(&self) -> Vec<&str> {
        self.deps.to_vec()
    }

    fn run(&self, ctx: &mut StepContext) -> Result<(), CoreError> {
        if skip_on_mainnet(ctx.network, self.tag()) {
            return Ok(());
        }
        let method = match self.call {
            PoolCall::ChefAdd => "add",
            PoolCall::MasterAddPool => "addPool",
        };
        for (pool, alloc_point) in self.pools {
            let record = format!("{}-{}", self.record_prefix, pool);
            let lp = ctx.address_of(pool)?;
            let args = self.call_args(*alloc_point, lp);
            ctx.attach_once(&record, self.parent, self.tag, move |chain, parent| {
                   chain.execute(parent, method, &args)
               })?;
        }
        Ok(())
    }
}
