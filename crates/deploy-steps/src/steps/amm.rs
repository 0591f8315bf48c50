//! AMMs de entorno de prueba: factories, routers, plantilla de par y la
//! tabla de pares de liquidez sembrados.

use serde_json::json;

use deploy_core::{CoreError, DeployStep, StepContext};
use deploy_domain::ChainAddress;

use crate::names;

use super::{operator, skip_on_mainnet};

enum FactoryArgs {
    Core,
    Operator,
}

/// Despliega una factory y su router (sobre WBNB). Las tres instancias del
/// pipeline comparten el mismo paso parametrizado.
pub struct AmmRouterStep {
    router: &'static str,
    router_contract: &'static str,
    factory: &'static str,
    factory_contract: &'static str,
    factory_args: FactoryArgs,
    deps: &'static [&'static str],
}

impl AmmRouterStep {
    /// AMM externo principal; en el entorno de prueba se instancia con los
    /// contratos del AMM propio.
    pub fn primary() -> Self {
        Self { router: names::PRIMARY_ROUTER,
               router_contract: "MarsSwapRouter",
               factory: names::PRIMARY_FACTORY,
               factory_contract: "MarsSwapFactory",
               factory_args: FactoryArgs::Core,
               deps: &[names::CORE, names::WBNB] }
    }

    /// AMM propio del protocolo.
    pub fn secondary() -> Self {
        Self { router: names::SECONDARY_ROUTER,
               router_contract: "MarsSwapRouter",
               factory: names::SECONDARY_FACTORY,
               factory_contract: "MarsSwapFactory",
               factory_args: FactoryArgs::Core,
               deps: &[names::CORE, names::WBNB] }
    }

    pub fn biswap() -> Self {
        Self { router: names::BISWAP_ROUTER,
               router_contract: "BiswapRouter02",
               factory: names::BISWAP_FACTORY,
               factory_contract: "BiswapFactory",
               factory_args: FactoryArgs::Operator,
               deps: &[names::WBNB] }
    }
}

impl DeployStep for AmmRouterStep {
    fn tag(&self) -> &str {
        self.router
    }

    fn depends_on(&self) -> Vec<&str> {
        self.deps.to_vec()
    }

    fn creates(&self) -> Vec<String> {
        vec![self.factory.to_string(), self.router.to_string()]
    }

    fn run(&self, ctx: &mut StepContext) -> Result<(), CoreError> {
        if skip_on_mainnet(ctx.network, self.tag()) {
            return Ok(());
        }
        let factory_args = match self.factory_args {
            FactoryArgs::Core => json!([ctx.address_of(names::CORE)?]),
            FactoryArgs::Operator => json!([operator()]),
        };
        let factory =
            ctx.deploy_once(self.factory, self.factory_contract, factory_args, self.tag())?;
        let wbnb = ctx.address_of(names::WBNB)?;
        ctx.deploy_once(self.router,
                        self.router_contract,
                        json!([factory.address, wbnb]),
                        self.tag())?;
        Ok(())
    }
}

/// Plantilla del contrato de par: los pares derivados registran su interfaz.
pub struct PairTemplateStep;

impl DeployStep for PairTemplateStep {
    fn tag(&self) -> &str {
        names::PAIR_TEMPLATE
    }

    fn creates(&self) -> Vec<String> {
        vec![names::PAIR_TEMPLATE.to_string()]
    }

    fn run(&self, ctx: &mut StepContext) -> Result<(), CoreError> {
        if skip_on_mainnet(ctx.network, self.tag()) {
            return Ok(());
        }
        ctx.deploy_once(names::PAIR_TEMPLATE, "MarsSwapPair", json!([]), self.tag())?;
        Ok(())
    }
}

struct PairSeed {
    name: &'static str,
    tokens: [&'static str; 2],
    router: &'static str,
    factory: &'static str,
    amounts: [&'static str; 2],
}

const PAIRS: [PairSeed; 8] = [PairSeed { name: names::PAIR_XMS_USDM,
                                         tokens: [names::XMS, names::USDM],
                                         router: names::SECONDARY_ROUTER,
                                         factory: names::SECONDARY_FACTORY,
                                         amounts: ["200000000000000000000",
                                                   "100000000000000000000"] },
                              PairSeed { name: names::PAIR_XMS_BNB,
                                         tokens: [names::XMS, names::WBNB],
                                         router: names::SECONDARY_ROUTER,
                                         factory: names::SECONDARY_FACTORY,
                                         amounts: ["12000000000000000000000",
                                                   "10000000000000000000"] },
                              PairSeed { name: names::PAIR_BUSD_BNB,
                                         tokens: [names::BUSD, names::WBNB],
                                         router: names::PRIMARY_ROUTER,
                                         factory: names::PRIMARY_FACTORY,
                                         amounts: ["4000000000000000000000",
                                                   "10000000000000000000"] },
                              PairSeed { name: names::PAIR_ETH_BUSD,
                                         tokens: [names::ETH, names::BUSD],
                                         router: names::PRIMARY_ROUTER,
                                         factory: names::PRIMARY_FACTORY,
                                         amounts: ["100000000000000000000",
                                                   "400000000000000000000000"] },
                              PairSeed { name: names::PAIR_CAKE_BNB,
                                         tokens: [names::CAKE, names::WBNB],
                                         router: names::PRIMARY_ROUTER,
                                         factory: names::PRIMARY_FACTORY,
                                         amounts: ["300000000000000000000",
                                                   "10000000000000000000"] },
                              PairSeed { name: names::PAIR_CAKE_BUSD,
                                         tokens: [names::CAKE, names::BUSD],
                                         router: names::PRIMARY_ROUTER,
                                         factory: names::PRIMARY_FACTORY,
                                         amounts: ["10000000000000000000000",
                                                   "200000000000000000000000"] },
                              PairSeed { name: names::PAIR_BSW_BNB,
                                         tokens: [names::BSW, names::WBNB],
                                         router: names::BISWAP_ROUTER,
                                         factory: names::BISWAP_FACTORY,
                                         amounts: ["300000000000000000000",
                                                   "100000000000000000"] },
                              PairSeed { name: names::PAIR_BTCB_USDT,
                                         tokens: [names::BTCB, names::USDT],
                                         router: names::BISWAP_ROUTER,
                                         factory: names::BISWAP_FACTORY,
                                         amounts: ["1000000000000000000",
                                                   "40000000000000000000000"] }];

/// Siembra los pares de liquidez: approve de ambos tokens, addLiquidity y
/// registro del par leído de la factory como artifact derivado. El par
/// queda registrado con la interfaz de la plantilla.
pub struct LiquidityPairsStep;

impl DeployStep for LiquidityPairsStep {
    fn tag(&self) -> &str {
        "LPs"
    }

    fn depends_on(&self) -> Vec<&str> {
        vec!["Tokens",
             names::WBNB,
             names::CAKE,
             names::BSW,
             names::PRIMARY_ROUTER,
             names::SECONDARY_ROUTER,
             names::BISWAP_ROUTER,
             names::PAIR_TEMPLATE]
    }

    fn run(&self, ctx: &mut StepContext) -> Result<(), CoreError> {
        if skip_on_mainnet(ctx.network, self.tag()) {
            return Ok(());
        }
        let template = ctx.registry.get(names::PAIR_TEMPLATE)?;
        for seed in PAIRS.iter() {
            if ctx.registry.exists(seed.name) {
                log::info!("reusing existing artifact \"{}\"", seed.name);
                continue;
            }
            let router = ctx.address_of(seed.router)?;
            let factory = ctx.address_of(seed.factory)?;
            let token0 = ctx.address_of(seed.tokens[0])?;
            let token1 = ctx.address_of(seed.tokens[1])?;

            for (token, amount) in [(token0, seed.amounts[0]), (token1, seed.amounts[1])] {
                ctx.chain.execute(token, "approve", &json!([router, amount]))?;
            }
            ctx.chain.execute(router,
                              "addLiquidity",
                              &json!([token0,
                                      token1,
                                      seed.amounts[0],
                                      seed.amounts[1],
                                      0,
                                      0,
                                      operator(),
                                      "1000000000000000000"]))?;

            let pair = read_pair(ctx, factory, token0, token1)?;
            ctx.save_derived(seed.name, pair, template.interface.clone(), self.tag())?;
        }
        Ok(())
    }
}

fn read_pair(ctx: &StepContext,
             factory: ChainAddress,
             token0: ChainAddress,
             token1: ChainAddress)
             -> Result<ChainAddress, CoreError> {
    let value = ctx.chain.read(factory, "getPair", &json!([token0, token1]))?;
    value.as_str()
         .and_then(|s| s.parse().ok())
         .filter(|a: &ChainAddress| !a.is_zero())
         .ok_or_else(|| CoreError::Storage(format!("factory {} did not report a pair", factory)))
}
