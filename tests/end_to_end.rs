//! El pipeline completo contra el registro persistente en disco: una
//! corrida interrumpida se retoma desde los archivos, sin repetir nada de
//! lo ya hecho.

use tempfile::TempDir;

use deploy_core::{ArtifactRegistry, Scheduler, SimulatedChain, StepContext};
use deploy_domain::Network;
use deploy_persistence::FileRegistry;
use deploy_steps::build_pipeline;

#[test]
fn resume_from_disk_skips_everything_already_done() {
    let tmp = TempDir::new().unwrap();
    let scheduler = Scheduler::new(build_pipeline());
    let mut chain = SimulatedChain::new();

    // primera mitad: correr sólo hasta el farm y cerrar el registro
    {
        let mut registry = FileRegistry::open_dir(tmp.path()).unwrap();
        let mut ctx = StepContext::new(&mut registry, &mut chain, Network::Local);
        let report = scheduler.run_selected(&mut ctx, Some(&["UpFarmGrant"])).unwrap();
        assert!(report.is_success());
    }
    let deploys_after_first = chain.deploy_count();
    assert!(deploys_after_first > 0);

    // reapertura: el estado viene de disco, la corrida completa sólo agrega
    // lo que falta
    let mut registry = FileRegistry::open_dir(tmp.path()).unwrap();
    assert!(registry.exists("UpFarm"));
    {
        let mut ctx = StepContext::new(&mut registry, &mut chain, Network::Local);
        let report = scheduler.run(&mut ctx).unwrap();
        assert!(report.is_success());
        assert!(!report.created.contains(&"UpFarm".to_string()),
                "resumed artifacts are reused, not recreated");
    }
    assert!(registry.exists("UpFarm-StrategyPCS_CAKE_Earn_CAKE"));

    // tercera corrida: no-op total en la cadena
    let deploys = chain.deploy_count();
    let executes = chain.execute_count();
    let mut ctx = StepContext::new(&mut registry, &mut chain, Network::Local);
    let report = scheduler.run(&mut ctx).unwrap();
    assert!(report.is_success());
    assert!(report.created.is_empty());
    assert_eq!(chain.deploy_count(), deploys);
    assert_eq!(chain.execute_count(), executes);
}
