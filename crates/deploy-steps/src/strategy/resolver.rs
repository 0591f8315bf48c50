//! Resolver de parámetros de estrategia.
//!
//! Determinista y puro salvo lecturas del registro y del orden canónico
//! del par. Cada regla de defaulting es una función nombrada para poder
//! testearla aislada de cualquier I/O de cadena:
//!
//! 1. `canonical_pair` — orden canónico de tokens y swap de hints indexados.
//! 2. `default_up_plan` — síntesis de la ruta earned→UP por convención.
//! 3. `token_plan` — síntesis/resolución de las rutas earned→token0/1.
//! 4. `resolve_fees` — defaults de comisiones.
//! 5. zeroing de collect-only, aplicado al final sobre todo lo anterior.
//! 6. detección de auto-recompensa.

use deploy_domain::{ChainAddress, FeeOverrides, LegSpec, StrategyDescriptor};

use deploy_core::errors::CoreError;
use deploy_core::registry::ArtifactRegistry;

use crate::names;

use super::{PairInspector, ResolvedStrategyArgs, RoutePlan, SwapLeg, WellKnown,
            DEFAULT_BUY_BACK_RATE, DEFAULT_CONTROLLER_FEE, DEFAULT_ENTRANCE_FEE_FACTOR,
            DEFAULT_WITHDRAW_FEE_FACTOR};

/// Assets base del protocolo: rutean a UP vía el router secundario.
const BASE_ASSETS: [&str; 2] = [names::XMS, names::USDM];

pub fn resolve_strategy(d: &StrategyDescriptor,
                        registry: &dyn ArtifactRegistry,
                        pairs: &dyn PairInspector,
                        wk: &WellKnown)
                        -> Result<ResolvedStrategyArgs, CoreError> {
    let name = d.artifact_name();
    let want = registry.address_of(d.want)?;
    let earned = registry.address_of(d.earn)?;
    let yield_source = registry.address_of(d.yield_source)?;
    let collect = d.is_collect();

    // 1. Orden canónico del par; "índice 0" significa siempre el token0 del
    //    propio contrato, no el primero declarado en la fila.
    let (token0, token1, spec_t0, spec_t1) = canonical_pair(d, registry, pairs, want)?;

    // 2. Ruta earned→UP; los routers de este plan son los de buy-back.
    let buy_back_router0 = resolve_router(registry, d.buy_back_router0, wk.primary_router)?;
    let buy_back_router1 = resolve_router(registry, d.buy_back_router1, ChainAddress::ZERO)?;
    let mut earned_to_up = explicit_plan(registry, &d.earned_to_up,
                                         buy_back_router0, buy_back_router1)?;
    if earned_to_up.is_empty() && !collect {
        earned_to_up = default_up_plan(d.earn, earned, buy_back_router0, wk);
    }

    // 3. Rutas earned→token0 y earned→token1.
    let mut earned_to_token0 =
        token_plan(registry, &spec_t0, earned, token0, collect, wk.primary_router)?;
    let mut earned_to_token1 =
        token_plan(registry, &spec_t1, earned, token1, collect, wk.primary_router)?;

    // 4. Comisiones.
    let fees = resolve_fees(&d.fees, collect);

    // Router con el que la estrategia recompone el want.
    let mut want_router = resolve_want_router(d, registry, token0, token1, wk)?;

    // Token de distribución de la fuente de yield y auto-recompensa.
    let reward_token = match d.reward_token {
        Some(name) => registry.address_of(name)?,
        None => wk.reward_token,
    };
    let is_reward_want = reward_token == want;

    // Campo wrapped-native: sólo cuando lo cosechado ES el wrapped-native.
    let mut wrapped_native = if earned == wk.wrapped_native {
        wk.wrapped_native
    } else {
        ChainAddress::ZERO
    };

    // 5. Collect-only: jamás swapea. Se fuerza al final, gane lo que gane
    //    arriba.
    if collect {
        earned_to_up = RoutePlan::empty();
        earned_to_token0 = RoutePlan::empty();
        earned_to_token1 = RoutePlan::empty();
        want_router = ChainAddress::ZERO;
        wrapped_native = ChainAddress::ZERO;
    }

    let args = ResolvedStrategyArgs { name: name.clone(),
                                      kind: d.kind,
                                      collect_only: collect,
                                      pid: d.pid,
                                      core: wk.core,
                                      wrapped_native,
                                      up_farm: wk.up_farm,
                                      up: wk.up,
                                      want,
                                      token0,
                                      token1,
                                      earned,
                                      yield_source,
                                      rewards_distributor: wk.rewards_distributor,
                                      want_router,
                                      earned_to_up: seal_plan(earned_to_up, &name, "earnedToUp")?,
                                      earned_to_token0: seal_plan(earned_to_token0, &name,
                                                                  "earnedToToken0")?,
                                      earned_to_token1: seal_plan(earned_to_token1, &name,
                                                                  "earnedToToken1")?,
                                      reward_token,
                                      is_reward_want,
                                      controller_fee: fees.0,
                                      buy_back_rate: fees.1,
                                      entrance_fee_factor: fees.2,
                                      withdraw_fee_factor: fees.3 };
    Ok(args)
}

/// Regla 1: resolución del par.
///
/// Para un want de un solo token, token0 == token1 == want (auto-par). Para
/// un par, manda el orden interno del contrato; si la fila declaró sus
/// tokens al revés, los hints indexados por token se intercambian en bloque
/// (route0 ↔ route1 con sus routers).
fn canonical_pair(d: &StrategyDescriptor,
                  registry: &dyn ArtifactRegistry,
                  pairs: &dyn PairInspector,
                  want: ChainAddress)
                  -> Result<(ChainAddress, ChainAddress, LegSpec, LegSpec), CoreError> {
    if !d.is_pair_want() {
        return Ok((want, want, d.earned_to_token0, d.earned_to_token1));
    }

    let (token0, token1) = pairs.pair_tokens(want)?;
    let mut spec_t0 = d.earned_to_token0;
    let mut spec_t1 = d.earned_to_token1;
    if let Some(tokens) = d.tokens {
        let declared0 = registry.address_of(tokens[0])?;
        if declared0 != token0 {
            std::mem::swap(&mut spec_t0, &mut spec_t1);
        }
    }
    Ok((token0, token1, spec_t0, spec_t1))
}

/// Regla 2: síntesis de la ruta earned→UP cuando la fila no la da.
///
/// - earned == wrapped-native: `[WBNB, UP]` por el router secundario;
/// - earned es asset base del protocolo: `[earned, WBNB, UP]` por el
///   secundario;
/// - cualquier otro: `[earned, WBNB]` por el router de buy-back declarado
///   (o el primario) y después `[WBNB, UP]` por el secundario.
fn default_up_plan(earn: &str,
                   earned: ChainAddress,
                   buy_back_router0: ChainAddress,
                   wk: &WellKnown)
                   -> RoutePlan {
    let up = wk.up;
    let wbnb = wk.wrapped_native;

    if earned == wbnb {
        return RoutePlan { leg0: SwapLeg { router: wk.secondary_router, path: vec![wbnb, up] },
                           leg1: SwapLeg::empty() };
    }
    if BASE_ASSETS.contains(&earn) {
        return RoutePlan { leg0: SwapLeg { router: wk.secondary_router,
                                           path: vec![earned, wbnb, up] },
                           leg1: SwapLeg::empty() };
    }
    RoutePlan { leg0: SwapLeg { router: buy_back_router0, path: vec![earned, wbnb] },
                leg1: SwapLeg { router: wk.secondary_router, path: vec![wbnb, up] } }
}

/// Regla 3: plan earned→token objetivo.
///
/// Con hints explícitos resuelve cada hop simbólico; sin hints y con
/// earned != objetivo (fuera de collect-only) sintetiza el camino trivial
/// de dos hops por el router de la fila o el primario.
fn token_plan(registry: &dyn ArtifactRegistry,
              spec: &LegSpec,
              earned: ChainAddress,
              target: ChainAddress,
              collect: bool,
              primary_router: ChainAddress)
              -> Result<RoutePlan, CoreError> {
    let router0 = resolve_router(registry, spec.router0, primary_router)?;
    let router1 = resolve_router(registry, spec.router1, ChainAddress::ZERO)?;
    let mut plan = RoutePlan { leg0: SwapLeg { router: router0,
                                               path: resolve_path(registry, spec.path0)? },
                               leg1: SwapLeg { router: router1,
                                               path: resolve_path(registry, spec.path1)? } };

    if plan.is_empty() && !collect && earned != target {
        plan.leg0.path = vec![earned, target];
    }
    Ok(plan)
}

/// Regla 4: comisiones. En collect-only la controller fee y el buy-back se
/// anulan aunque la fila traiga overrides; los factores de entrada/retiro
/// usan el default casi-unitario en cualquier modo.
fn resolve_fees(fees: &FeeOverrides, collect: bool) -> (u64, u64, u64, u64) {
    let controller = if collect {
        0
    } else {
        fees.controller_fee.unwrap_or(DEFAULT_CONTROLLER_FEE)
    };
    let buy_back = if collect {
        0
    } else {
        fees.buy_back_rate.unwrap_or(DEFAULT_BUY_BACK_RATE)
    };
    let entrance = fees.entrance_fee_factor.unwrap_or(DEFAULT_ENTRANCE_FEE_FACTOR);
    let withdraw = fees.withdraw_fee_factor.unwrap_or(DEFAULT_WITHDRAW_FEE_FACTOR);
    (controller, buy_back, entrance, withdraw)
}

fn resolve_want_router(d: &StrategyDescriptor,
                       registry: &dyn ArtifactRegistry,
                       token0: ChainAddress,
                       token1: ChainAddress,
                       wk: &WellKnown)
                       -> Result<ChainAddress, CoreError> {
    if let Some(name) = d.want_router {
        return registry.address_of(name);
    }
    if token0 == token1 {
        // want de un solo token: no hay liquidez que recomponer
        return Ok(ChainAddress::ZERO);
    }
    Ok(match d.kind {
        deploy_domain::StrategyKind::Pcs => wk.primary_router,
        deploy_domain::StrategyKind::Mars => wk.secondary_router,
    })
}

/// Plan explícito a partir de los hints (sin síntesis).
fn explicit_plan(registry: &dyn ArtifactRegistry,
                 spec: &LegSpec,
                 router0_default: ChainAddress,
                 router1_default: ChainAddress)
                 -> Result<RoutePlan, CoreError> {
    Ok(RoutePlan { leg0: SwapLeg { router: resolve_router(registry, spec.router0,
                                                          router0_default)?,
                                   path: resolve_path(registry, spec.path0)? },
                   leg1: SwapLeg { router: resolve_router(registry, spec.router1,
                                                          router1_default)?,
                                   path: resolve_path(registry, spec.path1)? } })
}

fn resolve_path(registry: &dyn ArtifactRegistry,
                path: Option<&'static [&'static str]>)
                -> Result<Vec<ChainAddress>, CoreError> {
    match path {
        None => Ok(Vec::new()),
        Some(hops) => hops.iter().map(|h| registry.address_of(h)).collect(),
    }
}

fn resolve_router(registry: &dyn ArtifactRegistry,
                  name: Option<&'static str>,
                  default: ChainAddress)
                  -> Result<ChainAddress, CoreError> {
    match name {
        Some(n) => registry.address_of(n),
        None => Ok(default),
    }
}

/// Acoplamiento ruta/router, aplicado a todo plan ya resuelto: una ruta
/// vacía fuerza router cero; una ruta no vacía exige router no-cero y al
/// menos dos hops. La violación es un defecto del descriptor y se rechaza
/// antes de desplegar.
fn seal_plan(mut plan: RoutePlan, strategy: &str, field: &str) -> Result<RoutePlan, CoreError> {
    for (leg, idx) in [(&mut plan.leg0, 0), (&mut plan.leg1, 1)] {
        if leg.path.is_empty() {
            leg.router = ChainAddress::ZERO;
            continue;
        }
        if leg.path.len() < 2 {
            return Err(CoreError::MalformedDescriptor {
                strategy: strategy.to_string(),
                detail: format!("{} leg {} has a single-hop path", field, idx),
            });
        }
        if leg.router.is_zero() {
            return Err(CoreError::MalformedDescriptor {
                strategy: strategy.to_string(),
                detail: format!("{} leg {} has a path but a zero router", field, idx),
            });
        }
    }
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use serde_json::json;

    use deploy_core::model::DeployedArtifact;
    use deploy_core::registry::InMemoryRegistry;
    use deploy_domain::{StrategyMode, StrategyKind};

    use super::*;

    struct MapInspector {
        tokens: HashMap<ChainAddress, (ChainAddress, ChainAddress)>,
    }

    impl PairInspector for MapInspector {
        fn pair_tokens(&self,
                       pair: ChainAddress)
                       -> Result<(ChainAddress, ChainAddress), CoreError> {
            self.tokens
                .get(&pair)
                .copied()
                .ok_or_else(|| CoreError::Storage(format!("unknown pair {}", pair)))
        }
    }

    fn addr(name: &str) -> ChainAddress {
        ChainAddress::derive(name)
    }

    fn fixture() -> (InMemoryRegistry, MapInspector, WellKnown) {
        let mut reg = InMemoryRegistry::new();
        for n in [names::CORE, names::UP, names::WBNB, names::CAKE, names::XMS, names::USDM,
                  names::BUSD, names::BSW, names::UP_FARM, names::PRIMARY_ROUTER,
                  names::SECONDARY_ROUTER, names::BISWAP_ROUTER, names::REWARDS_DISTRIBUTOR,
                  names::MASTER_CHEF, names::MINING_MASTER_CAKE, names::PAIR_XMS_USDM,
                  names::PAIR_BUSD_BNB, names::STAKING_CAKE]
        {
            reg.save(DeployedArtifact::new(n, addr(n), json!({"contract": n}), "test"))
               .unwrap();
        }
        let mut tokens = HashMap::new();
        // orden canónico elegido a mano para los tests
        tokens.insert(addr(names::PAIR_XMS_USDM), (addr(names::USDM), addr(names::XMS)));
        tokens.insert(addr(names::PAIR_BUSD_BNB), (addr(names::BUSD), addr(names::WBNB)));
        let wk = WellKnown::from_registry(&reg).unwrap();
        (reg, MapInspector { tokens }, wk)
    }

    fn pcs_lp_descriptor() -> StrategyDescriptor {
        StrategyDescriptor { want: names::PAIR_BUSD_BNB,
                             tokens: Some([names::BUSD, names::WBNB]),
                             earn: names::CAKE,
                             kind: StrategyKind::Pcs,
                             pid: 2,
                             yield_source: names::MASTER_CHEF,
                             ..Default::default() }
    }

    #[test]
    fn default_fees_and_overrides() {
        let (reg, pairs, wk) = fixture();
        let d = pcs_lp_descriptor();
        let r = resolve_strategy(&d, &reg, &pairs, &wk).unwrap();
        assert_eq!(r.controller_fee, DEFAULT_CONTROLLER_FEE);
        assert_eq!(r.buy_back_rate, DEFAULT_BUY_BACK_RATE);
        assert_eq!(r.entrance_fee_factor, DEFAULT_ENTRANCE_FEE_FACTOR);
        assert_eq!(r.withdraw_fee_factor, DEFAULT_WITHDRAW_FEE_FACTOR);

        let mut d = pcs_lp_descriptor();
        d.fees = FeeOverrides { controller_fee: Some(100),
                                buy_back_rate: None,
                                entrance_fee_factor: Some(10000),
                                withdraw_fee_factor: None };
        let r = resolve_strategy(&d, &reg, &pairs, &wk).unwrap();
        assert_eq!(r.controller_fee, 100);
        assert_eq!(r.buy_back_rate, DEFAULT_BUY_BACK_RATE);
        assert_eq!(r.entrance_fee_factor, 10000);
        assert_eq!(r.withdraw_fee_factor, DEFAULT_WITHDRAW_FEE_FACTOR);
    }

    #[test]
    fn pair_order_follows_the_contract_not_the_row() {
        let (reg, pairs, wk) = fixture();
        // la fila declara [WBNB, BUSD] pero el contrato dice token0 = BUSD
        let mut d = pcs_lp_descriptor();
        d.tokens = Some([names::WBNB, names::BUSD]);
        d.earned_to_token0 = LegSpec { path0: Some(&["CAKE", "WBNB"]), ..Default::default() };
        let r = resolve_strategy(&d, &reg, &pairs, &wk).unwrap();
        assert_eq!(r.token0, addr(names::BUSD));
        assert_eq!(r.token1, addr(names::WBNB));
        // el hint declarado para "token 0 de la fila" (WBNB) terminó en el
        // plan de token1
        assert_eq!(r.earned_to_token1.leg0.path,
                   vec![addr(names::CAKE), addr(names::WBNB)]);
        // y token0 (BUSD) recibió la síntesis trivial
        assert_eq!(r.earned_to_token0.leg0.path,
                   vec![addr(names::CAKE), addr(names::BUSD)]);
    }

    #[test]
    fn single_token_want_is_its_own_pair() {
        let (reg, pairs, wk) = fixture();
        let d = StrategyDescriptor { want: names::XMS,
                                     earn: names::XMS,
                                     kind: StrategyKind::Mars,
                                     yield_source: names::MINING_MASTER_CAKE,
                                     ..Default::default() };
        let r = resolve_strategy(&d, &reg, &pairs, &wk).unwrap();
        assert_eq!(r.token0, addr(names::XMS));
        assert_eq!(r.token1, addr(names::XMS));
        assert_eq!(r.want_router, ChainAddress::ZERO);
        // earned == target: no hay ruta que sintetizar
        assert!(r.earned_to_token0.is_empty());
        assert!(r.earned_to_token1.is_empty());
    }

    #[test]
    fn up_route_synthesis_for_wrapped_native() {
        let (reg, pairs, wk) = fixture();
        let d = StrategyDescriptor { want: names::WBNB,
                                     earn: names::WBNB,
                                     kind: StrategyKind::Mars,
                                     yield_source: names::MINING_MASTER_CAKE,
                                     ..Default::default() };
        let r = resolve_strategy(&d, &reg, &pairs, &wk).unwrap();
        assert_eq!(r.earned_to_up.leg0.router, wk.secondary_router);
        assert_eq!(r.earned_to_up.leg0.path, vec![wk.wrapped_native, wk.up]);
        assert!(r.earned_to_up.leg1.is_empty());
        assert_eq!(r.wrapped_native, wk.wrapped_native);
    }

    #[test]
    fn up_route_synthesis_for_base_asset() {
        let (reg, pairs, wk) = fixture();
        let d = StrategyDescriptor { want: names::XMS,
                                     earn: names::XMS,
                                     kind: StrategyKind::Mars,
                                     yield_source: names::MINING_MASTER_CAKE,
                                     ..Default::default() };
        let r = resolve_strategy(&d, &reg, &pairs, &wk).unwrap();
        assert_eq!(r.earned_to_up.leg0.router, wk.secondary_router);
        assert_eq!(r.earned_to_up.leg0.path,
                   vec![addr(names::XMS), wk.wrapped_native, wk.up]);
        assert!(r.earned_to_up.leg1.is_empty());
        assert_eq!(r.wrapped_native, ChainAddress::ZERO);
    }

    #[test]
    fn up_route_synthesis_generic_two_legs() {
        let (reg, pairs, wk) = fixture();
        let d = pcs_lp_descriptor();
        let r = resolve_strategy(&d, &reg, &pairs, &wk).unwrap();
        assert_eq!(r.earned_to_up.leg0.router, wk.primary_router);
        assert_eq!(r.earned_to_up.leg0.path, vec![addr(names::CAKE), wk.wrapped_native]);
        assert_eq!(r.earned_to_up.leg1.router, wk.secondary_router);
        assert_eq!(r.earned_to_up.leg1.path, vec![wk.wrapped_native, wk.up]);
    }

    #[test]
    fn explicit_up_route_wins_over_synthesis() {
        let (reg, pairs, wk) = fixture();
        let d = StrategyDescriptor { want: names::UP,
                                     earn: names::CAKE,
                                     kind: StrategyKind::Pcs,
                                     yield_source: names::STAKING_CAKE,
                                     earned_to_up: LegSpec { path0: Some(&["CAKE", "UP"]),
                                                             ..Default::default() },
                                     buy_back_router0: Some(names::SECONDARY_ROUTER),
                                     ..Default::default() };
        let r = resolve_strategy(&d, &reg, &pairs, &wk).unwrap();
        assert_eq!(r.earned_to_up.leg0.router, wk.secondary_router);
        assert_eq!(r.earned_to_up.leg0.path, vec![addr(names::CAKE), addr(names::UP)]);
        assert!(r.earned_to_up.leg1.is_empty());
    }

    #[test]
    fn collect_only_zeroes_everything_swappy() {
        let (reg, pairs, wk) = fixture();
        let mut d = StrategyDescriptor { want: names::WBNB,
                                         earn: names::WBNB,
                                         kind: StrategyKind::Mars,
                                         mode: StrategyMode::CollectOnly,
                                         yield_source: names::MINING_MASTER_CAKE,
                                         ..Default::default() };
        // los overrides de fee swappy se ignoran en collect-only
        d.fees = FeeOverrides { controller_fee: Some(450),
                                buy_back_rate: Some(450),
                                entrance_fee_factor: Some(9995),
                                withdraw_fee_factor: None };
        let r = resolve_strategy(&d, &reg, &pairs, &wk).unwrap();
        assert!(r.collect_only);
        assert!(r.earned_to_up.is_empty());
        assert!(r.earned_to_token0.is_empty());
        assert!(r.earned_to_token1.is_empty());
        assert_eq!(r.earned_to_up.leg0.router, ChainAddress::ZERO);
        assert_eq!(r.want_router, ChainAddress::ZERO);
        assert_eq!(r.wrapped_native, ChainAddress::ZERO);
        assert_eq!(r.controller_fee, 0);
        assert_eq!(r.buy_back_rate, 0);
        // los factores de entrada/retiro sí respetan overrides
        assert_eq!(r.entrance_fee_factor, 9995);
        assert_eq!(r.withdraw_fee_factor, DEFAULT_WITHDRAW_FEE_FACTOR);
    }

    #[test]
    fn want_router_defaults_to_the_kind_home_router() {
        let (reg, pairs, wk) = fixture();
        let r = resolve_strategy(&pcs_lp_descriptor(), &reg, &pairs, &wk).unwrap();
        assert_eq!(r.want_router, wk.primary_router);

        let d = StrategyDescriptor { want: names::PAIR_XMS_USDM,
                                     tokens: Some([names::XMS, names::USDM]),
                                     earn: names::XMS,
                                     kind: StrategyKind::Mars,
                                     yield_source: names::MINING_MASTER_CAKE,
                                     ..Default::default() };
        let r = resolve_strategy(&d, &reg, &pairs, &wk).unwrap();
        assert_eq!(r.want_router, wk.secondary_router);

        let d = StrategyDescriptor { want_router: Some(names::BISWAP_ROUTER),
                                     ..pcs_lp_descriptor() };
        let r = resolve_strategy(&d, &reg, &pairs, &wk).unwrap();
        assert_eq!(r.want_router, addr(names::BISWAP_ROUTER));
    }

    #[test]
    fn reward_token_override_and_self_reward() {
        let (reg, pairs, wk) = fixture();
        // default: la fuente reparte CAKE, y el want no es CAKE
        let r = resolve_strategy(&pcs_lp_descriptor(), &reg, &pairs, &wk).unwrap();
        assert_eq!(r.reward_token, addr(names::CAKE));
        assert!(!r.is_reward_want);

        // want == token de recompensa
        let d = StrategyDescriptor { want: names::BSW,
                                     earn: names::BSW,
                                     kind: StrategyKind::Pcs,
                                     reward_token: Some(names::BSW),
                                     yield_source: names::MASTER_CHEF,
                                     ..Default::default() };
        let r = resolve_strategy(&d, &reg, &pairs, &wk).unwrap();
        assert_eq!(r.reward_token, addr(names::BSW));
        assert!(r.is_reward_want);
    }

    #[test]
    fn path_without_router_is_malformed() {
        let (reg, pairs, wk) = fixture();
        let mut d = pcs_lp_descriptor();
        // segundo tramo con camino pero sin router declarado (default cero)
        d.earned_to_token0 = LegSpec { path0: Some(&["CAKE", "WBNB"]),
                                       path1: Some(&["WBNB", "BUSD"]),
                                       ..Default::default() };
        let err = resolve_strategy(&d, &reg, &pairs, &wk).unwrap_err();
        match err {
            CoreError::MalformedDescriptor { strategy, detail } => {
                assert_eq!(strategy, d.artifact_name());
                assert!(detail.contains("zero router"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn single_hop_path_is_malformed() {
        let (reg, pairs, wk) = fixture();
        let mut d = pcs_lp_descriptor();
        d.earned_to_up = LegSpec { path0: Some(&["CAKE"]), ..Default::default() };
        let err = resolve_strategy(&d, &reg, &pairs, &wk).unwrap_err();
        assert!(matches!(err, CoreError::MalformedDescriptor { .. }));
    }
}
