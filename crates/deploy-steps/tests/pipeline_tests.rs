//! Corrida completa del pipeline contra el cliente simulado.

use serde_json::json;

use deploy_core::{ArtifactRegistry, ChainClient, InMemoryRegistry, Scheduler, SimulatedChain,
                  StepContext, StepStatus};
use deploy_domain::Network;
use deploy_steps::build_pipeline;
use deploy_steps::strategy::deduped_strategies;

fn run_full(registry: &mut InMemoryRegistry, chain: &mut SimulatedChain) -> bool {
    let scheduler = Scheduler::new(build_pipeline());
    let mut ctx = StepContext::new(registry, chain, Network::Local);
    scheduler.run(&mut ctx).unwrap().is_success()
}

#[test]
fn full_run_creates_the_whole_protocol() {
    let mut registry = InMemoryRegistry::new();
    let mut chain = SimulatedChain::new();
    assert!(run_full(&mut registry, &mut chain));

    for name in ["Core",
                 "UP",
                 "VestingMaster",
                 "TimelockController",
                 "WBNB",
                 "CAKE",
                 "BSW",
                 "XMS",
                 "USDm",
                 "StakingRewardsUP",
                 "StakingRewardsUPGrant",
                 "UpFarm",
                 "UpFarmGrant",
                 "MasterChef",
                 "SyrupBar",
                 "MasterChefBSW",
                 "PancakeSwapRouter",
                 "MarsSwapRouter",
                 "BiswapRouter",
                 "MarsSwapPair",
                 "RewardsDistributor",
                 "mars_XMS-USDm",
                 "pcs_CAKE-BUSD",
                 "bsw_BTCB-USDT",
                 "LiquidityMiningMasterBNB",
                 "LiquidityMiningMasterCAKE",
                 "LiquidityMiningMasterETH"]
    {
        assert!(registry.exists(name), "missing artifact {}", name);
    }

    // una estrategia por fila de la tabla, y un pool del farm por estrategia
    for d in deduped_strategies() {
        let name = d.artifact_name();
        assert!(registry.exists(&name), "missing strategy {}", name);
        assert!(registry.exists(&format!("UpFarm-{}", name)), "missing pool for {}", name);
    }

    // cada estrategia nueva cede ownership al farm
    assert_eq!(chain.executions_of("transferOwnership"),
               deduped_strategies().len() + 1, // +1: SyrupBar -> MasterChef
               "every strategy hands ownership to the farm");
}

#[test]
fn rerun_is_a_complete_noop_on_chain() {
    let mut registry = InMemoryRegistry::new();
    let mut chain = SimulatedChain::new();
    assert!(run_full(&mut registry, &mut chain));

    let deploys = chain.deploy_count();
    let executes = chain.execute_count();
    assert!(run_full(&mut registry, &mut chain));

    assert_eq!(chain.deploy_count(), deploys, "rerun must not deploy");
    assert_eq!(chain.execute_count(), executes, "rerun must not execute");
}

#[test]
fn strategy_constructor_args_share_the_resolved_shape() {
    let mut registry = InMemoryRegistry::new();
    let mut chain = SimulatedChain::new();
    assert!(run_full(&mut registry, &mut chain));

    let strategy_deploys: Vec<_> = chain.deploys()
                                        .iter()
                                        .filter(|d| {
                                            d.contract_kind == "StrategyPCS"
                                            || d.contract_kind == "StrategyMars"
                                        })
                                        .collect();
    assert_eq!(strategy_deploys.len(), deduped_strategies().len());

    for d in &strategy_deploys {
        let block = d.args.get(0).and_then(|v| v.as_array()).expect("address block");
        assert_eq!(block.len(), 17, "{} address block", d.contract_kind);
    }
}

#[test]
fn test_infrastructure_steps_skip_on_mainnet() {
    let mut registry = InMemoryRegistry::new();
    let mut chain = SimulatedChain::new();
    let scheduler = Scheduler::new(build_pipeline());
    let mut ctx = StepContext::new(&mut registry, &mut chain, Network::Mainnet);

    let report = scheduler.run_selected(&mut ctx, Some(&["Tokens", "WBNB", "CAKE", "BSW"]))
                          .unwrap();
    assert!(report.is_success());
    assert_eq!(chain.deploy_count(), 0, "mainnet must not deploy test tokens");
    assert!(registry.is_empty());
}

#[test]
fn chain_failure_blocks_dependents_and_halts() {
    let mut registry = InMemoryRegistry::new();
    let mut chain = SimulatedChain::new();
    chain.fail_on_execute("addLiquidity");

    let scheduler = Scheduler::new(build_pipeline());
    let mut ctx = StepContext::new(&mut registry, &mut chain, Network::Local);
    let report = scheduler.run(&mut ctx).unwrap();

    assert!(!report.is_success());
    assert_eq!(report.failure.as_ref().unwrap().tag, "LPs");
    assert_eq!(report.status("LPs"), Some(StepStatus::Failed));
    assert_eq!(report.status("Strategies"), Some(StepStatus::Blocked));
    assert_eq!(report.status("UpFarmAddPool"), Some(StepStatus::Blocked));
    assert_eq!(report.status("Core"), Some(StepStatus::Done));
}

#[test]
fn selection_runs_only_the_transitive_closure() {
    let mut registry = InMemoryRegistry::new();
    let mut chain = SimulatedChain::new();
    let scheduler = Scheduler::new(build_pipeline());
    let mut ctx = StepContext::new(&mut registry, &mut chain, Network::Local);

    let report = scheduler.run_selected(&mut ctx, Some(&["VestingMaster"])).unwrap();
    assert!(report.is_success());
    assert!(registry.exists("Core"));
    assert!(registry.exists("UP"));
    assert!(registry.exists("VestingMaster"));
    assert!(!registry.exists("UpFarm"));
    assert_eq!(report.status("UpFarm"), Some(StepStatus::Pending));
}

#[test]
fn pair_canonical_order_drives_strategy_token_slots() {
    let mut registry = InMemoryRegistry::new();
    let mut chain = SimulatedChain::new();
    assert!(run_full(&mut registry, &mut chain));

    // para cada estrategia de par, token0/token1 del bloque de direcciones
    // deben coincidir con el orden canónico que reporta el propio par
    for d in deduped_strategies().into_iter().filter(|d| d.is_pair_want()) {
        let want = registry.get(d.want).unwrap().address;
        let t0 = chain.read(want, "token0", &json!([])).unwrap();
        let t1 = chain.read(want, "token1", &json!([])).unwrap();

        let deploy = chain.deploys()
                          .iter()
                          .find(|rec| {
                              rec.args
                                 .get(0)
                                 .and_then(|b| b.get(4))
                                 .and_then(|v| v.as_str())
                                 == Some(&want.to_string())
                                 && (rec.contract_kind == "StrategyPCS"
                                     || rec.contract_kind == "StrategyMars")
                          })
                          .expect("strategy deploy for pair want");
        let block = deploy.args.get(0).unwrap();
        assert_eq!(block.get(5).unwrap(), &t0, "token0 slot for {}", d.artifact_name());
        assert_eq!(block.get(6).unwrap(), &t1, "token1 slot for {}", d.artifact_name());
    }
}
