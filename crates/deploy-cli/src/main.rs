use deploy_core::{ArtifactRegistry, Scheduler, SimulatedChain, StepContext};
use deploy_domain::Network;
use deploy_persistence::{FileRegistry, StoreConfig};
use deploy_steps::build_pipeline;

fn main() {
    // Cargar .env si existe para obtener DEPLOYMENTS_DIR / NETWORK
    let _ = dotenvy::dotenv();
    let args: Vec<String> = std::env::args().collect();

    if args.len() >= 2 && args[1] == "run" {
        // `deploy run [--network <red>] [--dir <ruta>] [--tags a,b,c]`
        let mut config = StoreConfig::from_env();
        let mut tags: Option<Vec<String>> = None;
        let mut i = 2;
        while i < args.len() {
            match args[i].as_str() {
                "--network" => {
                    i += 1;
                    if i < args.len() {
                        match args[i].parse::<Network>() {
                            Ok(n) => config.network = n,
                            Err(e) => {
                                eprintln!("[deploy run] {e}");
                                std::process::exit(2);
                            }
                        }
                    }
                }
                "--dir" => {
                    i += 1;
                    if i < args.len() {
                        config.dir = args[i].clone().into();
                    }
                }
                "--tags" => {
                    i += 1;
                    if i < args.len() {
                        tags = Some(args[i].split(',').map(|s| s.trim().to_string()).collect());
                    }
                }
                _ => {}
            }
            i += 1;
        }

        let mut registry = match FileRegistry::open(&config) {
            Ok(r) => r,
            Err(e) => {
                eprintln!("[deploy run] store error: {e}");
                std::process::exit(5);
            }
        };
        // Cliente simulado: corrida en seco contra el estado persistido.
        // El cliente RPC real se enchufa aquí cuando existe.
        let mut chain = SimulatedChain::new();
        let scheduler = Scheduler::new(build_pipeline());
        let mut ctx = StepContext::new(&mut registry, &mut chain, config.network);

        let selection: Option<Vec<&str>> =
            tags.as_ref().map(|v| v.iter().map(|s| s.as_str()).collect());
        let report = match scheduler.run_selected(&mut ctx, selection.as_deref()) {
            Ok(r) => r,
            Err(e) => {
                eprintln!("[deploy run] invalid pipeline: {e}");
                std::process::exit(4);
            }
        };

        for (tag, status) in &report.statuses {
            println!("{:<44} {:?}", tag, status);
        }
        println!("created {} artifact(s)", report.created.len());
        for name in &report.created {
            println!("  + {}", name);
        }
        if let Some(failure) = &report.failure {
            eprintln!("[deploy run] step \"{}\" failed: {}", failure.tag, failure.error);
            std::process::exit(5);
        }
        std::process::exit(0);
    }

    if args.len() >= 2 && args[1] == "list" {
        // `deploy list [--network <red>] [--dir <ruta>]`
        let mut config = StoreConfig::from_env();
        let mut i = 2;
        while i < args.len() {
            match args[i].as_str() {
                "--network" => {
                    i += 1;
                    if i < args.len() {
                        if let Ok(n) = args[i].parse::<Network>() {
                            config.network = n;
                        }
                    }
                }
                "--dir" => {
                    i += 1;
                    if i < args.len() {
                        config.dir = args[i].clone().into();
                    }
                }
                _ => {}
            }
            i += 1;
        }
        let registry = match FileRegistry::open(&config) {
            Ok(r) => r,
            Err(e) => {
                eprintln!("[deploy list] store error: {e}");
                std::process::exit(5);
            }
        };
        for name in registry.names() {
            if let Some(artifact) = registry.get_or_null(&name) {
                println!("{:<48} {}", name, artifact.address);
            }
        }
        std::process::exit(0);
    }

    if args.len() >= 2 && args[1] == "tags" {
        for step in build_pipeline() {
            println!("{}", step.tag());
        }
        std::process::exit(0);
    }

    eprintln!("Uso: deploy run [--network <red>] [--dir <ruta>] [--tags a,b,c]");
    eprintln!("     deploy list [--network <red>] [--dir <ruta>]");
    eprintln!("     deploy tags");
    std::process::exit(2);
}
