//! Tabla declarativa de estrategias del protocolo.
//!
//! Cada fila nombra artifacts por su clave de registro; nunca direcciones.
//! Las filas collect-only duplican el (want, earn) de una fila accumulate a
//! propósito: son contratos distintos con nombre distinto (sufijo
//! `_collect`).

use once_cell::sync::Lazy;

use deploy_domain::{LegSpec, StrategyDescriptor, StrategyKind, StrategyMode};

use crate::names;

pub static STRATEGIES: Lazy<Vec<StrategyDescriptor>> = Lazy::new(|| {
    vec![
        // --- accumulate sobre los mining masters propios ---
        StrategyDescriptor { want: names::XMS,
                             earn: names::WBNB,
                             kind: StrategyKind::Mars,
                             pid: 0,
                             alloc_point: 80,
                             yield_source: names::MINING_MASTER_BNB,
                             earned_to_token0:
                                 LegSpec { router0: Some(names::SECONDARY_ROUTER),
                                           ..Default::default() },
                             ..Default::default() },
        StrategyDescriptor { want: names::XMS,
                             earn: names::CAKE,
                             kind: StrategyKind::Mars,
                             pid: 0,
                             alloc_point: 20,
                             yield_source: names::MINING_MASTER_CAKE,
                             earned_to_token0:
                                 LegSpec { path0: Some(&["CAKE", "WBNB"]),
                                           router0: Some(names::PRIMARY_ROUTER),
                                           path1: Some(&["WBNB", "XMS"]),
                                           router1: Some(names::SECONDARY_ROUTER) },
                             ..Default::default() },
        StrategyDescriptor { want: names::XMS,
                             earn: names::ETH,
                             kind: StrategyKind::Mars,
                             pid: 0,
                             alloc_point: 50,
                             yield_source: names::MINING_MASTER_ETH,
                             earned_to_token0:
                                 LegSpec { path0: Some(&["ETH", "WBNB"]),
                                           router0: Some(names::PRIMARY_ROUTER),
                                           path1: Some(&["WBNB", "XMS"]),
                                           router1: Some(names::SECONDARY_ROUTER) },
                             ..Default::default() },
        StrategyDescriptor { want: names::USDM,
                             earn: names::WBNB,
                             kind: StrategyKind::Mars,
                             pid: 2,
                             alloc_point: 30,
                             yield_source: names::MINING_MASTER_BNB,
                             earned_to_token0:
                                 LegSpec { router0: Some(names::SECONDARY_ROUTER),
                                           ..Default::default() },
                             ..Default::default() },
        StrategyDescriptor { want: names::USDM,
                             earn: names::CAKE,
                             kind: StrategyKind::Mars,
                             pid: 1,
                             alloc_point: 20,
                             yield_source: names::MINING_MASTER_CAKE,
                             earned_to_token0:
                                 LegSpec { path0: Some(&["CAKE", "BUSD"]),
                                           router0: Some(names::PRIMARY_ROUTER),
                                           path1: Some(&["BUSD", "USDm"]),
                                           router1: Some(names::SECONDARY_ROUTER) },
                             ..Default::default() },
        StrategyDescriptor { want: names::PAIR_XMS_USDM,
                             tokens: Some([names::XMS, names::USDM]),
                             earn: names::CAKE,
                             kind: StrategyKind::Mars,
                             pid: 2,
                             alloc_point: 40,
                             yield_source: names::MINING_MASTER_CAKE,
                             earned_to_token0:
                                 LegSpec { path0: Some(&["CAKE", "WBNB"]),
                                           router0: Some(names::PRIMARY_ROUTER),
                                           path1: Some(&["WBNB", "XMS"]),
                                           router1: Some(names::SECONDARY_ROUTER) },
                             earned_to_token1:
                                 LegSpec { path0: Some(&["CAKE", "BUSD"]),
                                           router0: Some(names::PRIMARY_ROUTER),
                                           path1: Some(&["BUSD", "USDm"]),
                                           router1: Some(names::SECONDARY_ROUTER) },
                             ..Default::default() },
        StrategyDescriptor { want: names::PAIR_XMS_BNB,
                             tokens: Some([names::XMS, names::WBNB]),
                             earn: names::WBNB,
                             kind: StrategyKind::Mars,
                             pid: 1,
                             alloc_point: 50,
                             yield_source: names::MINING_MASTER_BNB,
                             earned_to_token0:
                                 LegSpec { router0: Some(names::SECONDARY_ROUTER),
                                           ..Default::default() },
                             ..Default::default() },
        StrategyDescriptor { want: names::PAIR_XMS_BNB,
                             tokens: Some([names::XMS, names::WBNB]),
                             earn: names::CAKE,
                             kind: StrategyKind::Mars,
                             pid: 3,
                             alloc_point: 60,
                             yield_source: names::MINING_MASTER_CAKE,
                             earned_to_token0:
                                 LegSpec { path0: Some(&["CAKE", "WBNB"]),
                                           router0: Some(names::PRIMARY_ROUTER),
                                           path1: Some(&["WBNB", "XMS"]),
                                           router1: Some(names::SECONDARY_ROUTER) },
                             ..Default::default() },
        // --- accumulate sobre el chef externo ---
        StrategyDescriptor { want: names::CAKE,
                             earn: names::CAKE,
                             kind: StrategyKind::Pcs,
                             pid: 0,
                             alloc_point: 80,
                             yield_source: names::MASTER_CHEF,
                             ..Default::default() },
        StrategyDescriptor { want: names::PAIR_BUSD_BNB,
                             tokens: Some([names::BUSD, names::WBNB]),
                             earn: names::CAKE,
                             kind: StrategyKind::Pcs,
                             pid: 1,
                             alloc_point: 20,
                             yield_source: names::MASTER_CHEF,
                             ..Default::default() },
        StrategyDescriptor { want: names::PAIR_ETH_BUSD,
                             tokens: Some([names::ETH, names::BUSD]),
                             earn: names::CAKE,
                             kind: StrategyKind::Pcs,
                             pid: 2,
                             alloc_point: 50,
                             yield_source: names::MASTER_CHEF,
                             ..Default::default() },
        StrategyDescriptor { want: names::PAIR_CAKE_BNB,
                             tokens: Some([names::CAKE, names::WBNB]),
                             earn: names::CAKE,
                             kind: StrategyKind::Pcs,
                             pid: 3,
                             alloc_point: 30,
                             yield_source: names::MASTER_CHEF,
                             ..Default::default() },
        StrategyDescriptor { want: names::PAIR_CAKE_BUSD,
                             tokens: Some([names::CAKE, names::BUSD]),
                             earn: names::CAKE,
                             kind: StrategyKind::Pcs,
                             pid: 4,
                             alloc_point: 20,
                             yield_source: names::MASTER_CHEF,
                             ..Default::default() },
        // --- collect-only (mismos pools, contratos aparte) ---
        collect(names::XMS, names::WBNB, StrategyKind::Mars, 0, 40, names::MINING_MASTER_BNB),
        collect(names::XMS, names::CAKE, StrategyKind::Mars, 0, 50, names::MINING_MASTER_CAKE),
        collect(names::XMS, names::ETH, StrategyKind::Mars, 0, 60, names::MINING_MASTER_ETH),
        collect(names::USDM, names::WBNB, StrategyKind::Mars, 2, 80, names::MINING_MASTER_BNB),
        collect(names::USDM, names::CAKE, StrategyKind::Mars, 1, 20, names::MINING_MASTER_CAKE),
        collect(names::PAIR_XMS_USDM, names::CAKE, StrategyKind::Mars, 2, 50,
                names::MINING_MASTER_CAKE),
        collect(names::PAIR_XMS_BNB, names::WBNB, StrategyKind::Mars, 1, 30,
                names::MINING_MASTER_BNB),
        collect(names::PAIR_XMS_BNB, names::CAKE, StrategyKind::Mars, 3, 20,
                names::MINING_MASTER_CAKE),
        collect(names::CAKE, names::CAKE, StrategyKind::Pcs, 0, 40, names::MASTER_CHEF),
        collect(names::PAIR_BUSD_BNB, names::CAKE, StrategyKind::Pcs, 1, 50, names::MASTER_CHEF),
        collect(names::PAIR_ETH_BUSD, names::CAKE, StrategyKind::Pcs, 2, 60, names::MASTER_CHEF),
        collect(names::PAIR_CAKE_BNB, names::CAKE, StrategyKind::Pcs, 3, 100, names::MASTER_CHEF),
        collect(names::PAIR_CAKE_BUSD, names::CAKE, StrategyKind::Pcs, 4, 100,
                names::MASTER_CHEF),
        // --- UP desde el staking de CAKE: la ruta a UP es directa ---
        StrategyDescriptor { want: names::UP,
                             earn: names::CAKE,
                             kind: StrategyKind::Mars,
                             pid: 0,
                             alloc_point: 80,
                             yield_source: names::STAKING_CAKE,
                             earned_to_up: LegSpec { path0: Some(&["CAKE", "UP"]),
                                                     ..Default::default() },
                             earned_to_token0: LegSpec { path0: Some(&["CAKE", "UP"]),
                                                         ..Default::default() },
                             ..Default::default() },
        // --- pools del chef de Biswap: reparten BSW, no CAKE ---
        StrategyDescriptor { want: names::BSW,
                             earn: names::BSW,
                             kind: StrategyKind::Pcs,
                             pid: 0,
                             alloc_point: 20,
                             yield_source: names::MASTER_CHEF_BSW,
                             reward_token: Some(names::BSW),
                             buy_back_router0: Some(names::BISWAP_ROUTER),
                             buy_back_router1: Some(names::PRIMARY_ROUTER),
                             earned_to_up:
                                 LegSpec { path0: Some(&["BSW", "WBNB"]),
                                           path1: Some(&["WBNB", "CAKE", "UP"]),
                                           ..Default::default() },
                             ..Default::default() },
        StrategyDescriptor { want: names::PAIR_BSW_BNB,
                             tokens: Some([names::BSW, names::WBNB]),
                             earn: names::BSW,
                             kind: StrategyKind::Pcs,
                             pid: 1,
                             alloc_point: 50,
                             yield_source: names::MASTER_CHEF_BSW,
                             reward_token: Some(names::BSW),
                             want_router: Some(names::BISWAP_ROUTER),
                             buy_back_router0: Some(names::BISWAP_ROUTER),
                             buy_back_router1: Some(names::PRIMARY_ROUTER),
                             earned_to_up:
                                 LegSpec { path0: Some(&["BSW", "WBNB"]),
                                           path1: Some(&["WBNB", "CAKE", "UP"]),
                                           ..Default::default() },
                             earned_to_token1:
                                 LegSpec { path0: Some(&["BSW", "WBNB"]),
                                           router0: Some(names::BISWAP_ROUTER),
                                           ..Default::default() },
                             ..Default::default() },
        StrategyDescriptor { want: names::PAIR_BTCB_USDT,
                             tokens: Some([names::BTCB, names::USDT]),
                             earn: names::BSW,
                             kind: StrategyKind::Pcs,
                             pid: 2,
                             alloc_point: 50,
                             yield_source: names::MASTER_CHEF_BSW,
                             reward_token: Some(names::BSW),
                             want_router: Some(names::BISWAP_ROUTER),
                             buy_back_router0: Some(names::BISWAP_ROUTER),
                             buy_back_router1: Some(names::PRIMARY_ROUTER),
                             earned_to_up:
                                 LegSpec { path0: Some(&["BSW", "WBNB"]),
                                           path1: Some(&["WBNB", "CAKE", "UP"]),
                                           ..Default::default() },
                             earned_to_token0:
                                 LegSpec { path0: Some(&["BSW", "WBNB", "BTCB"]),
                                           router0: Some(names::BISWAP_ROUTER),
                                           ..Default::default() },
                             earned_to_token1:
                                 LegSpec { path0: Some(&["BSW", "USDT"]),
                                           router0: Some(names::BISWAP_ROUTER),
                                           ..Default::default() },
                             ..Default::default() },
        collect_rewarded(names::BSW, names::BSW, StrategyKind::Pcs, 0, 20,
                         names::MASTER_CHEF_BSW, names::BSW),
        collect_rewarded(names::PAIR_BSW_BNB, names::BSW, StrategyKind::Pcs, 1, 50,
                         names::MASTER_CHEF_BSW, names::BSW),
        collect_rewarded(names::PAIR_BTCB_USDT, names::BSW, StrategyKind::Pcs, 2, 50,
                         names::MASTER_CHEF_BSW, names::BSW),
    ]
});

fn collect(want: &'static str,
           earn: &'static str,
           kind: StrategyKind,
           pid: u64,
           alloc_point: u64,
           yield_source: &'static str)
           -> StrategyDescriptor {
    StrategyDescriptor { want,
                         earn,
                         kind,
                         mode: StrategyMode::CollectOnly,
                         pid,
                         alloc_point,
                         yield_source,
                         ..Default::default() }
}

fn collect_rewarded(want: &'static str,
                    earn: &'static str,
                    kind: StrategyKind,
                    pid: u64,
                    alloc_point: u64,
                    yield_source: &'static str,
                    reward_token: &'static str)
                    -> StrategyDescriptor {
    StrategyDescriptor { reward_token: Some(reward_token),
                         ..collect(want, earn, kind, pid, alloc_point, yield_source) }
}

/// Filas en orden de tabla, saltando nombres de artifact repetidos (una
/// fila repetida por error de edición no debe pisar ni duplicar contratos).
pub fn deduped_strategies() -> Vec<&'static StrategyDescriptor> {
    let mut seen = std::collections::HashSet::new();
    STRATEGIES.iter()
              .filter(|d| seen.insert(d.artifact_name()))
              .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_no_duplicate_artifact_names() {
        assert_eq!(deduped_strategies().len(), STRATEGIES.len());
    }

    #[test]
    fn every_pair_accumulate_row_declares_its_tokens() {
        for d in STRATEGIES.iter() {
            if d.is_pair_want() && !d.is_collect() {
                assert!(d.tokens.is_some(), "{} lacks declared tokens", d.artifact_name());
            }
        }
    }

    #[test]
    fn collect_rows_mirror_an_accumulate_pool() {
        for d in STRATEGIES.iter().filter(|d| d.is_collect()) {
            let twin = STRATEGIES.iter()
                                 .find(|a| {
                                     !a.is_collect()
                                     && a.want == d.want
                                     && a.earn == d.earn
                                     && a.yield_source == d.yield_source
                                 })
                                 .unwrap_or_else(|| panic!("{} has no twin", d.artifact_name()));
            assert_eq!(twin.pid, d.pid, "{} pid mismatch", d.artifact_name());
        }
    }
}
