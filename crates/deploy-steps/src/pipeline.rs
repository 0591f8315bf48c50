//! Pipeline completo en orden de declaración.
//!
//! El orden de declaración es el desempate del scheduler, así que esta
//! lista fija el orden observable de una corrida completa.

use deploy_core::DeployStep;

use crate::steps::amm::{AmmRouterStep, LiquidityPairsStep, PairTemplateStep};
use crate::steps::core::{CoreStep, TimelockStep, UpTokenStep, VestingMasterStep};
use crate::steps::farms::{FarmPoolsStep, MasterChefBswStep, MasterChefStep, MiningMasterStep};
use crate::steps::report::PrintAddressesStep;
use crate::steps::rewards::RewardsDistributorStep;
use crate::steps::staking::{GrantMasterRoleStep, StakingPoolStep, StakingRewardsStep,
                            UpFarmStep};
use crate::steps::strategies::{StrategiesStep, UpFarmPoolsStep};
use crate::steps::tokens::{BswStep, CakeStep, TokensStep, WbnbStep};

pub fn build_pipeline() -> Vec<Box<dyn DeployStep>> {
    vec![Box::new(CoreStep),
         Box::new(UpTokenStep),
         Box::new(VestingMasterStep),
         Box::new(TimelockStep),
         Box::new(TokensStep),
         Box::new(WbnbStep),
         Box::new(CakeStep),
         Box::new(BswStep),
         Box::new(StakingRewardsStep::up()),
         Box::new(StakingPoolStep::up()),
         Box::new(GrantMasterRoleStep::staking_up()),
         Box::new(StakingRewardsStep::cake()),
         Box::new(StakingPoolStep::cake()),
         Box::new(StakingRewardsStep::bnb()),
         Box::new(StakingPoolStep::bnb()),
         Box::new(UpFarmStep),
         Box::new(GrantMasterRoleStep::up_farm()),
         Box::new(MasterChefStep),
         Box::new(MasterChefBswStep),
         Box::new(AmmRouterStep::primary()),
         Box::new(AmmRouterStep::secondary()),
         Box::new(AmmRouterStep::biswap()),
         Box::new(PairTemplateStep),
         Box::new(RewardsDistributorStep),
         Box::new(LiquidityPairsStep),
         Box::new(FarmPoolsStep::master_chef()),
         Box::new(FarmPoolsStep::master_chef_bsw()),
         Box::new(MiningMasterStep::bnb()),
         Box::new(FarmPoolsStep::mining_master_bnb()),
         Box::new(MiningMasterStep::eth()),
         Box::new(FarmPoolsStep::mining_master_eth()),
         Box::new(MiningMasterStep::cake()),
         Box::new(FarmPoolsStep::mining_master_cake()),
         Box::new(StrategiesStep),
         Box::new(UpFarmPoolsStep),
         Box::new(PrintAddressesStep)]
}
