//! Nombres de artifact conocidos por el pipeline.
//!
//! Cada constante es la clave del registro; los pasos y el resolver hablan
//! siempre en estos nombres y sólo al final se traducen a direcciones.

pub const CORE: &str = "Core";
pub const UP: &str = "UP";
pub const VESTING_MASTER: &str = "VestingMaster";
pub const TIMELOCK: &str = "TimelockController";

// tokens base y de prueba
pub const WBNB: &str = "WBNB";
pub const CAKE: &str = "CAKE";
pub const BSW: &str = "BSW";
pub const XMS: &str = "XMS";
pub const USDM: &str = "USDm";
pub const BUSD: &str = "BUSD";
pub const ETH: &str = "ETH";
pub const BTCB: &str = "BTCB";
pub const USDT: &str = "USDT";

// AMMs: el primario es el exchange externo, el secundario el propio
pub const PRIMARY_ROUTER: &str = "PancakeSwapRouter";
pub const PRIMARY_FACTORY: &str = "PancakeSwapFactory";
pub const SECONDARY_ROUTER: &str = "MarsSwapRouter";
pub const SECONDARY_FACTORY: &str = "MarsSwapFactory";
pub const BISWAP_ROUTER: &str = "BiswapRouter";
pub const BISWAP_FACTORY: &str = "BiswapFactory";
pub const PAIR_TEMPLATE: &str = "MarsSwapPair";

// farms y staking
pub const UP_FARM: &str = "UpFarm";
pub const STAKING_UP: &str = "StakingRewardsUP";
pub const STAKING_CAKE: &str = "StakingRewardsCAKE";
pub const STAKING_BNB: &str = "StakingRewardsBNB";
pub const MASTER_CHEF: &str = "MasterChef";
pub const MASTER_CHEF_BSW: &str = "MasterChefBSW";
pub const SYRUP_BAR: &str = "SyrupBar";
pub const SYRUP_BAR_BSW: &str = "SyrupBarBSW";
pub const MINING_MASTER_BNB: &str = "LiquidityMiningMasterBNB";
pub const MINING_MASTER_CAKE: &str = "LiquidityMiningMasterCAKE";
pub const MINING_MASTER_ETH: &str = "LiquidityMiningMasterETH";
pub const REWARDS_DISTRIBUTOR: &str = "RewardsDistributor";

// pares de liquidez derivados
pub const PAIR_XMS_USDM: &str = "mars_XMS-USDm";
pub const PAIR_XMS_BNB: &str = "mars_XMS-BNB";
pub const PAIR_BUSD_BNB: &str = "pcs_BUSD-BNB";
pub const PAIR_ETH_BUSD: &str = "pcs_ETH-BUSD";
pub const PAIR_CAKE_BNB: &str = "pcs_CAKE-BNB";
pub const PAIR_CAKE_BUSD: &str = "pcs_CAKE-BUSD";
pub const PAIR_BSW_BNB: &str = "bsw_BSW-BNB";
pub const PAIR_BTCB_USDT: &str = "bsw_BTCB-USDT";
