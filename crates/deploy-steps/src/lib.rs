//! deploy-steps: el pipeline concreto del protocolo.
//!
//! Aquí viven los pasos de despliegue/chequeo/attachment, la tabla
//! declarativa de estrategias y el resolver de parámetros. El core no sabe
//! nada de estos contratos; este crate no sabe nada de persistencia ni de
//! la red real.

pub mod names;
pub mod pipeline;
pub mod steps;
pub mod strategy;

pub use pipeline::build_pipeline;
pub use strategy::{resolve_strategy, ResolvedStrategyArgs, RoutePlan, SwapLeg, WellKnown};
