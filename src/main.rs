//! Corrida de demostración: pipeline completo contra el cliente simulado,
//! dos veces, para mostrar el replay idempotente (la segunda corrida no
//! toca la cadena).

use deploy_core::{ArtifactRegistry, InMemoryRegistry, Scheduler, SimulatedChain, StepContext};
use deploy_domain::Network;
use deploy_steps::build_pipeline;

fn main() {
    let mut registry = InMemoryRegistry::new();
    let mut chain = SimulatedChain::new();
    let scheduler = Scheduler::new(build_pipeline());

    for round in 1..=2 {
        let mut ctx = StepContext::new(&mut registry, &mut chain, Network::Local);
        let report = match scheduler.run(&mut ctx) {
            Ok(r) => r,
            Err(e) => {
                eprintln!("[main-deploy] invalid pipeline: {e}");
                std::process::exit(4);
            }
        };
        println!("== round {}: {} step(s), {} artifact(s) created, {} deploy(s) on chain",
                 round,
                 report.statuses.len(),
                 report.created.len(),
                 chain.deploy_count());
        if let Some(failure) = &report.failure {
            eprintln!("[main-deploy] step \"{}\" failed: {}", failure.tag, failure.error);
            std::process::exit(5);
        }
    }

    println!("== artifacts");
    for name in registry.names() {
        if let Some(artifact) = registry.get_or_null(&name) {
            println!("{:<48} {}", name, artifact.address);
        }
    }
}
