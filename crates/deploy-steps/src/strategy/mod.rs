//! Resolución de parámetros de estrategias.
//!
//! El resolver es una función pura de (descriptor, snapshot del registro,
//! artifacts bien conocidos) a un registro completo de argumentos de
//! constructor; la única lectura externa es el orden canónico de tokens de
//! un contrato de par, detrás del trait `PairInspector`.

mod resolver;
mod table;

use serde::Serialize;
use serde_json::{json, Value};

use deploy_core::chain::ChainClient;
use deploy_core::errors::CoreError;
use deploy_core::registry::ArtifactRegistry;
use deploy_domain::{ChainAddress, StrategyKind};

pub use resolver::resolve_strategy;
pub use table::{deduped_strategies, STRATEGIES};

use crate::names;

// Defaults del protocolo (puntos básicos sobre 10000).
pub const DEFAULT_CONTROLLER_FEE: u64 = 300;
pub const DEFAULT_BUY_BACK_RATE: u64 = 200;
/// Factores "retener 99.90%" de entrada/retiro.
pub const DEFAULT_ENTRANCE_FEE_FACTOR: u64 = 9990;
pub const DEFAULT_WITHDRAW_FEE_FACTOR: u64 = 9990;

/// Un tramo de swap: router + camino de direcciones.
///
/// Invariante: `path` vacío ⇔ `router` es la dirección cero; un `path` no
/// vacío tiene al menos dos hops.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwapLeg {
    pub router: ChainAddress,
    pub path: Vec<ChainAddress>,
}

impl SwapLeg {
    pub fn empty() -> Self {
        Self { router: ChainAddress::ZERO, path: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}

/// Conversión earned→objetivo en hasta dos tramos consecutivos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutePlan {
    pub leg0: SwapLeg,
    pub leg1: SwapLeg,
}

impl RoutePlan {
    pub fn empty() -> Self {
        Self { leg0: SwapLeg::empty(), leg1: SwapLeg::empty() }
    }

    pub fn is_empty(&self) -> bool {
        self.leg0.is_empty() && self.leg1.is_empty()
    }
}

/// Lectura del orden canónico de un contrato de par.
pub trait PairInspector {
    fn pair_tokens(&self, pair: ChainAddress) -> Result<(ChainAddress, ChainAddress), CoreError>;
}

/// Inspector respaldado por el cliente de cadena (lecturas token0/token1).
pub struct ChainPairInspector<'a> {
    pub chain: &'a dyn ChainClient,
}

impl PairInspector for ChainPairInspector<'_> {
    fn pair_tokens(&self, pair: ChainAddress) -> Result<(ChainAddress, ChainAddress), CoreError> {
        let parse = |v: Value| -> Result<ChainAddress, CoreError> {
            v.as_str()
             .and_then(|s| s.parse().ok())
             .ok_or_else(|| CoreError::Storage(format!("pair {} returned a non-address", pair)))
        };
        let t0 = parse(self.chain.read(pair, "token0", &json!([]))?)?;
        let t1 = parse(self.chain.read(pair, "token1", &json!([]))?)?;
        Ok((t0, t1))
    }
}

/// Artifacts bien conocidos que todo el pipeline de estrategias necesita.
#[derive(Debug, Clone, Copy)]
pub struct WellKnown {
    pub core: ChainAddress,
    pub wrapped_native: ChainAddress,
    pub up_farm: ChainAddress,
    pub up: ChainAddress,
    pub reward_token: ChainAddress,
    pub primary_router: ChainAddress,
    pub secondary_router: ChainAddress,
    pub rewards_distributor: ChainAddress,
}

impl WellKnown {
    pub fn from_registry(registry: &dyn ArtifactRegistry) -> Result<Self, CoreError> {
        Ok(Self { core: registry.address_of(names::CORE)?,
                  wrapped_native: registry.address_of(names::WBNB)?,
                  up_farm: registry.address_of(names::UP_FARM)?,
                  up: registry.address_of(names::UP)?,
                  reward_token: registry.address_of(names::CAKE)?,
                  primary_router: registry.address_of(names::PRIMARY_ROUTER)?,
                  secondary_router: registry.address_of(names::SECONDARY_ROUTER)?,
                  rewards_distributor: registry.address_of(names::REWARDS_DISTRIBUTOR)? })
    }
}

/// Argumentos de constructor completamente resueltos para una estrategia.
/// Registro derivado, no persistido.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedStrategyArgs {
    pub name: String,
    pub kind: StrategyKind,
    pub collect_only: bool,
    pub pid: u64,

    pub core: ChainAddress,
    /// Dirección del wrapped-native si earned == wrapped-native, cero si no.
    pub wrapped_native: ChainAddress,
    pub up_farm: ChainAddress,
    pub up: ChainAddress,
    pub want: ChainAddress,
    /// Orden canónico del par (token0 < token1 según el propio contrato);
    /// para wants de un solo token ambos son el want (auto-par).
    pub token0: ChainAddress,
    pub token1: ChainAddress,
    pub earned: ChainAddress,
    pub yield_source: ChainAddress,
    pub rewards_distributor: ChainAddress,
    pub want_router: ChainAddress,

    pub earned_to_up: RoutePlan,
    pub earned_to_token0: RoutePlan,
    pub earned_to_token1: RoutePlan,

    pub reward_token: ChainAddress,
    /// La fuente de recompensas coincide con el want (evita el riesgo de
    /// auto-transferencia aguas abajo).
    pub is_reward_want: bool,

    pub controller_fee: u64,
    pub buy_back_rate: u64,
    pub entrance_fee_factor: u64,
    pub withdraw_fee_factor: u64,
}

impl ResolvedStrategyArgs {
    fn address_block(&self) -> Value {
        json!([self.core,
               self.wrapped_native,
               self.up_farm,
               self.up,
               self.want,
               self.token0,
               self.token1,
               self.earned,
               self.yield_source,
               self.rewards_distributor,
               self.want_router,
               self.earned_to_token0.leg0.router,
               self.earned_to_token0.leg1.router,
               self.earned_to_token1.leg0.router,
               self.earned_to_token1.leg1.router,
               self.earned_to_up.leg0.router,
               self.earned_to_up.leg1.router])
    }

    /// Serializa los args en la forma que espera el constructor de cada
    /// variante de contrato.
    pub fn constructor_args(&self) -> Value {
        match self.kind {
            StrategyKind::Pcs => json!([self.address_block(),
                                        self.pid,
                                        self.is_reward_want,
                                        true,
                                        self.collect_only,
                                        self.earned_to_up.leg0.path,
                                        self.earned_to_up.leg1.path,
                                        self.earned_to_token0.leg0.path,
                                        self.earned_to_token0.leg1.path,
                                        self.earned_to_token1.leg0.path,
                                        self.earned_to_token1.leg1.path,
                                        self.controller_fee,
                                        self.buy_back_rate,
                                        self.entrance_fee_factor,
                                        self.withdraw_fee_factor]),
            StrategyKind::Mars => json!([self.address_block(),
                                         self.pid,
                                         self.earned_to_up.leg0.path,
                                         self.earned_to_up.leg1.path,
                                         self.earned_to_token0.leg0.path,
                                         self.earned_to_token0.leg1.path,
                                         self.earned_to_token1.leg0.path,
                                         self.earned_to_token1.leg1.path,
                                         self.controller_fee,
                                         self.buy_back_rate,
                                         self.entrance_fee_factor,
                                         self.withdraw_fee_factor,
                                         self.collect_only]),
        }
    }
}
