//! Cliente de cadena simulado y determinista.
//!
//! Modela lo mínimo de la red que el pipeline necesita observar:
//! - deploys con direcciones derivadas de forma estable,
//! - creación de pares de liquidez con orden canónico `token0 < token1`
//!   (orden por bytes de dirección, como la factory real),
//! - lecturas `getPair` / `token0` / `token1` sobre ese estado.
//!
//! Además lleva el log completo de llamadas para que los tests afirmen
//! idempotencia (cero deploys/executes en la segunda corrida).

use std::collections::HashMap;

use serde_json::{json, Value};

use deploy_domain::ChainAddress;

use super::{ChainClient, ChainError, DeployOutcome};

#[derive(Debug, Clone)]
pub struct DeployRecord {
    pub contract_kind: String,
    pub args: Value,
    pub address: ChainAddress,
}

#[derive(Debug, Clone)]
pub struct ExecuteRecord {
    pub target: ChainAddress,
    pub method: String,
    pub args: Value,
}

#[derive(Debug, Default)]
pub struct SimulatedChain {
    nonce: u64,
    deploys: Vec<DeployRecord>,
    executions: Vec<ExecuteRecord>,
    // pares: clave no ordenada (min, max) -> dirección del par
    pairs: HashMap<(ChainAddress, ChainAddress), ChainAddress>,
    // dirección del par -> (token0, token1) en orden canónico
    pair_tokens: HashMap<ChainAddress, (ChainAddress, ChainAddress)>,
    stub_reads: HashMap<(ChainAddress, String), Value>,
    fail_execute_on: Option<String>,
}

impl SimulatedChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn deploy_count(&self) -> usize {
        self.deploys.len()
    }

    pub fn execute_count(&self) -> usize {
        self.executions.len()
    }

    pub fn deploys(&self) -> &[DeployRecord] {
        &self.deploys
    }

    pub fn executions(&self) -> &[ExecuteRecord] {
        &self.executions
    }

    pub fn executions_of(&self, method: &str) -> usize {
        self.executions.iter().filter(|e| e.method == method).count()
    }

    /// Programa un revert para la próxima llamada al método dado.
    pub fn fail_on_execute(&mut self, method: impl Into<String>) {
        self.fail_execute_on = Some(method.into());
    }

    /// Stub genérico de lectura para métodos que el doble no modela.
    pub fn set_read(&mut self, target: ChainAddress, method: impl Into<String>, value: Value) {
        self.stub_reads.insert((target, method.into()), value);
    }

    /// Registra un par con orden canónico explícito (tests del resolver).
    pub fn register_pair(&mut self,
                         pair: ChainAddress,
                         token0: ChainAddress,
                         token1: ChainAddress) {
        let key = Self::pair_key(token0, token1);
        self.pairs.insert(key, pair);
        self.pair_tokens.insert(pair, (token0, token1));
    }

    fn pair_key(a: ChainAddress, b: ChainAddress) -> (ChainAddress, ChainAddress) {
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }

    /// Crea (si no existe) el par para dos tokens y lo devuelve. El orden
    /// canónico interno es el orden por bytes, independiente del declarado.
    fn ensure_pair(&mut self, a: ChainAddress, b: ChainAddress) -> ChainAddress {
        let (t0, t1) = Self::pair_key(a, b);
        if let Some(existing) = self.pairs.get(&(t0, t1)) {
            return *existing;
        }
        let pair = ChainAddress::derive(&format!("sim:pair:{}:{}", t0, t1));
        self.pairs.insert((t0, t1), pair);
        self.pair_tokens.insert(pair, (t0, t1));
        pair
    }

    fn parse_address(v: &Value) -> Option<ChainAddress> {
        v.as_str().and_then(|s| s.parse().ok())
    }
}

impl ChainClient for SimulatedChain {
    fn deploy(&mut self, contract_kind: &str, constructor_args: &Value)
              -> Result<DeployOutcome, ChainError> {
        let address = ChainAddress::derive(&format!("sim:deploy:{}:{}", contract_kind, self.nonce));
        self.nonce += 1;
        self.deploys.push(DeployRecord { contract_kind: contract_kind.to_string(),
                                         args: constructor_args.clone(),
                                         address });
        Ok(DeployOutcome { address, is_newly_created: true })
    }

    fn execute(&mut self, target: ChainAddress, method: &str, args: &Value)
               -> Result<(), ChainError> {
        if self.fail_execute_on.as_deref() == Some(method) {
            return Err(ChainError::Reverted(format!("simulated revert in {}", method)));
        }
        if method == "addLiquidity" {
            // args: [tokenA, tokenB, amountA, amountB, ...]
            if let (Some(a), Some(b)) = (args.get(0).and_then(Self::parse_address),
                                         args.get(1).and_then(Self::parse_address))
            {
                self.ensure_pair(a, b);
            }
        }
        self.executions.push(ExecuteRecord { target,
                                             method: method.to_string(),
                                             args: args.clone() });
        Ok(())
    }

    fn read(&self, target: ChainAddress, method: &str, args: &Value) -> Result<Value, ChainError> {
        match method {
            "getPair" => {
                let a = args.get(0).and_then(Self::parse_address);
                let b = args.get(1).and_then(Self::parse_address);
                if let (Some(a), Some(b)) = (a, b) {
                    let pair = self.pairs
                                   .get(&Self::pair_key(a, b))
                                   .copied()
                                   .unwrap_or(ChainAddress::ZERO);
                    return Ok(json!(pair.to_string()));
                }
                Err(ChainError::UnsupportedRead { target, method: method.to_string() })
            }
            "token0" | "token1" => {
                if let Some((t0, t1)) = self.pair_tokens.get(&target) {
                    let t = if method == "token0" { t0 } else { t1 };
                    return Ok(json!(t.to_string()));
                }
                Err(ChainError::UnsupportedRead { target, method: method.to_string() })
            }
            _ => self.stub_reads
                     .get(&(target, method.to_string()))
                     .cloned()
                     .ok_or_else(|| ChainError::UnsupportedRead { target,
                                                                  method: method.to_string() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deploy_addresses_are_distinct_and_recorded() {
        let mut chain = SimulatedChain::new();
        let a = chain.deploy("Core", &json!([])).unwrap();
        let b = chain.deploy("Core", &json!([])).unwrap();
        assert_ne!(a.address, b.address);
        assert!(a.is_newly_created);
        assert_eq!(chain.deploy_count(), 2);
    }

    #[test]
    fn add_liquidity_creates_canonical_pair() {
        let mut chain = SimulatedChain::new();
        let x = ChainAddress::derive("token:X");
        let y = ChainAddress::derive("token:Y");
        let router = ChainAddress::derive("router");
        chain.execute(router, "addLiquidity", &json!([x.to_string(), y.to_string(), "10", "10"]))
             .unwrap();

        // getPair es insensible al orden de los argumentos
        let p1 = chain.read(router, "getPair", &json!([x.to_string(), y.to_string()])).unwrap();
        let p2 = chain.read(router, "getPair", &json!([y.to_string(), x.to_string()])).unwrap();
        assert_eq!(p1, p2);

        let pair: ChainAddress = p1.as_str().unwrap().parse().unwrap();
        let t0: ChainAddress =
            chain.read(pair, "token0", &json!([])).unwrap().as_str().unwrap().parse().unwrap();
        let t1: ChainAddress =
            chain.read(pair, "token1", &json!([])).unwrap().as_str().unwrap().parse().unwrap();
        assert!(t0 < t1, "el par mantiene orden canónico por bytes");
    }

    #[test]
    fn programmed_revert_propagates() {
        let mut chain = SimulatedChain::new();
        chain.fail_on_execute("grantRole");
        let err = chain.execute(ChainAddress::derive("core"), "grantRole", &json!([])).unwrap_err();
        assert!(matches!(err, ChainError::Reverted(_)));
    }

    #[test]
    fn unknown_read_is_an_error() {
        let chain = SimulatedChain::new();
        let err = chain.read(ChainAddress::derive("x"), "balanceOf", &json!([])).unwrap_err();
        assert!(matches!(err, ChainError::UnsupportedRead { .. }));
    }
}
