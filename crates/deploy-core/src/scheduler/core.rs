//! Ejecución del grafo de pasos.
//!
//! Garantías:
//! - validación completa (tags duplicados, dependencias desconocidas,
//!   ciclos) ANTES de arrancar cualquier paso;
//! - orden topológico con desempate por orden de declaración: determinista,
//!   sin paralelismo (una sola hebra lógica);
//! - skip idempotente genérico vía `DeployStep::creates`;
//! - fase final diferida hasta que toda la fase normal es terminal;
//! - stop-on-failure: el primer paso fallido detiene la corrida, sus
//!   dependientes transitivos quedan `Blocked` y jamás arrancan.

use indexmap::{IndexMap, IndexSet};

use crate::context::StepContext;
use crate::errors::CoreError;
use crate::registry::ArtifactRegistry;
use crate::step::{DeployStep, Phase};

use super::events::{RunEventKind, RunLog};
use super::status::StepStatus;

pub struct Scheduler {
    steps: Vec<Box<dyn DeployStep>>,
}

/// Falla terminal de la corrida: tag del paso y error de cadena/orquestación.
#[derive(Debug, Clone)]
pub struct StepFailure {
    pub tag: String,
    pub error: CoreError,
}

#[derive(Debug)]
pub struct RunReport {
    /// Estado final por tag, en orden de declaración.
    pub statuses: IndexMap<String, StepStatus>,
    pub log: RunLog,
    pub failure: Option<StepFailure>,
    /// Nombres de artifact creados en esta corrida (no los reutilizados).
    pub created: Vec<String>,
}

impl RunReport {
    pub fn is_success(&self) -> bool {
        self.failure.is_none()
    }

    pub fn status(&self, tag: &str) -> Option<StepStatus> {
        self.statuses.get(tag).copied()
    }
}

impl Scheduler {
    pub fn new(steps: Vec<Box<dyn DeployStep>>) -> Self {
        Self { steps }
    }

    pub fn tags(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.tag()).collect()
    }

    fn index_by_tag(&self) -> Result<IndexMap<&str, usize>, CoreError> {
        let mut by_tag: IndexMap<&str, usize> = IndexMap::new();
        for (i, step) in self.steps.iter().enumerate() {
            if by_tag.insert(step.tag(), i).is_some() {
                return Err(CoreError::DuplicateStepTag(step.tag().to_string()));
            }
        }
        Ok(by_tag)
    }

    /// Valida el grafo completo. Ningún paso corre si esto falla.
    pub fn validate(&self) -> Result<(), CoreError> {
        let by_tag = self.index_by_tag()?;

        for step in &self.steps {
            for dep in step.depends_on() {
                let dep_idx = *by_tag.get(dep).ok_or_else(|| CoreError::UnknownDependency {
                                             step: step.tag().to_string(),
                                             dependency: dep.to_string(),
                                         })?;
                if step.phase() == Phase::Normal && self.steps[dep_idx].phase() == Phase::Final {
                    return Err(CoreError::FinalPhaseDependency { step: step.tag().to_string(),
                                                                 dependency: dep.to_string() });
                }
            }
        }

        // Detección de ciclos (Kahn sobre el grafo entero).
        let all: Vec<usize> = (0..self.steps.len()).collect();
        self.topo_order(&all, &by_tag)?;
        Ok(())
    }

    /// Orden de ejecución: cierre transitivo de la selección (si la hay),
    /// fase normal en orden topológico con desempate por declaración y
    /// después la fase final.
    pub fn plan(&self, selection: Option<&[&str]>) -> Result<Vec<usize>, CoreError> {
        self.validate()?;
        let by_tag = self.index_by_tag()?;

        let selected: Vec<usize> = match selection {
            None => (0..self.steps.len()).collect(),
            Some(tags) => {
                let mut seen: IndexSet<usize> = IndexSet::new();
                let mut queue: Vec<usize> = Vec::new();
                for tag in tags {
                    let idx = *by_tag.get(*tag)
                                     .ok_or_else(|| CoreError::UnknownSelection(tag.to_string()))?;
                    queue.push(idx);
                }
                while let Some(idx) = queue.pop() {
                    if !seen.insert(idx) {
                        continue;
                    }
                    for dep in self.steps[idx].depends_on() {
                        queue.push(by_tag[dep]);
                    }
                }
                let mut v: Vec<usize> = seen.into_iter().collect();
                v.sort_unstable();
                v
            }
        };

        let normal: Vec<usize> = selected.iter()
                                         .copied()
                                         .filter(|&i| self.steps[i].phase() == Phase::Normal)
                                         .collect();
        let last: Vec<usize> = selected.iter()
                                       .copied()
                                       .filter(|&i| self.steps[i].phase() == Phase::Final)
                                       .collect();

        let mut order = self.topo_order(&normal, &by_tag)?;
        order.extend(self.topo_order(&last, &by_tag)?);
        Ok(order)
    }

    /// Kahn con desempate determinista: entre pasos simultáneamente
    /// desbloqueados gana el de menor índice de declaración.
    fn topo_order(&self, subset: &[usize], by_tag: &IndexMap<&str, usize>)
                  -> Result<Vec<usize>, CoreError> {
        let in_subset: IndexSet<usize> = subset.iter().copied().collect();
        let mut done: IndexSet<usize> = IndexSet::new();
        let mut order: Vec<usize> = Vec::with_capacity(subset.len());

        while order.len() < subset.len() {
            let ready = subset.iter().copied().find(|&i| {
                                         !done.contains(&i)
                                         && self.steps[i].depends_on().iter().all(|d| {
                                                let di = by_tag[*d];
                                                // dependencias fuera del subset (otra fase)
                                                // se consideran satisfechas aquí
                                                !in_subset.contains(&di) || done.contains(&di)
                                            })
                                     });
            match ready {
                Some(i) => {
                    done.insert(i);
                    order.push(i);
                }
                None => {
                    let stuck = subset.iter().copied().find(|i| !done.contains(i)).unwrap();
                    return Err(CoreError::DependencyCycle(self.steps[stuck].tag().to_string()));
                }
            }
        }
        Ok(order)
    }

    pub fn run(&self, ctx: &mut StepContext) -> Result<RunReport, CoreError> {
        self.run_selected(ctx, None)
    }

    /// Corre la selección dada (más dependencias transitivas) o el pipeline
    /// completo. `Err` sólo por validación/planificación; una falla de
    /// ejecución se reporta en `RunReport::failure` con el grafo restante
    /// marcado (`Blocked` para dependientes, `Pending` para el resto).
    pub fn run_selected(&self, ctx: &mut StepContext, selection: Option<&[&str]>)
                        -> Result<RunReport, CoreError> {
        let order = self.plan(selection)?;

        let mut statuses: IndexMap<String, StepStatus> =
            self.steps.iter().map(|s| (s.tag().to_string(), StepStatus::Pending)).collect();
        let mut log = RunLog::new();
        let mut failure: Option<StepFailure> = None;
        let mut created: Vec<String> = Vec::new();

        log.append(RunEventKind::RunStarted { step_count: order.len() });

        for &idx in &order {
            let step = &self.steps[idx];
            let tag = step.tag().to_string();

            if failure.is_some() {
                // La corrida ya se detuvo: sólo clasificamos el resto.
                if let Some(dep) = self.failed_dependency(step.as_ref(), &statuses) {
                    statuses[&tag] = StepStatus::Blocked;
                    log.append(RunEventKind::StepBlocked { tag: tag.clone(),
                                                           failed_dependency: dep });
                }
                continue;
            }

            // Skip genérico: el paso declaró sus artifacts y todos existen.
            let declared = step.creates();
            if !declared.is_empty() && declared.iter().all(|n| ctx.registry.exists(n)) {
                for name in &declared {
                    log::info!("reusing existing artifact \"{}\"", name);
                }
                statuses[&tag] = StepStatus::Done;
                log.append(RunEventKind::StepSkipped { tag: tag.clone(), reusing: declared });
                continue;
            }

            statuses[&tag] = StepStatus::Running;
            log.append(RunEventKind::StepStarted { tag: tag.clone() });
            log::info!("running step \"{}\"", tag);

            let before = ctx.registry.names().len();
            match step.run(ctx) {
                Ok(()) => {
                    // el registro es append-only: lo nuevo es el sufijo
                    let step_created: Vec<String> =
                        ctx.registry.names().split_off(before);
                    created.extend(step_created.iter().cloned());
                    statuses[&tag] = StepStatus::Done;
                    log.append(RunEventKind::StepFinished { tag: tag.clone(),
                                                            created: step_created });
                }
                Err(error) => {
                    log::error!("step \"{}\" failed: {}", tag, error);
                    statuses[&tag] = StepStatus::Failed;
                    log.append(RunEventKind::StepFailed { tag: tag.clone(),
                                                          error: error.to_string() });
                    failure = Some(StepFailure { tag: tag.clone(), error });
                }
            }
        }

        if failure.is_none() {
            log.append(RunEventKind::RunCompleted { created_total: created.len() });
        }

        Ok(RunReport { statuses, log, failure, created })
    }

    /// Primera dependencia (directa) en estado `Failed`/`Blocked`, si la
    /// hay. Al procesar en orden topológico esto propaga el bloqueo a todo
    /// dependiente transitivo.
    fn failed_dependency(&self, step: &dyn DeployStep,
                         statuses: &IndexMap<String, StepStatus>)
                         -> Option<String> {
        step.depends_on().iter().find_map(|d| match statuses.get(*d) {
                                    Some(StepStatus::Failed) | Some(StepStatus::Blocked) => {
                                        Some(d.to_string())
                                    }
                                    _ => None,
                                })
    }
}
