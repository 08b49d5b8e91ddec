use super::*;
use crate::convergence;
use crate::decomposition::*;
use crate::error::*;
use crate::grid::Fields;
use crate::sink::RecordSink;
use crate::util::*;
use std::time::{Duration, Instant};

/// Everything needed to set up a run.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SolverParameters {
    /// Rows
    pub nx: usize,

    /// Columns
    pub ny: usize,

    /// Number of time steps
    pub nt: usize,

    pub engine: Engine,

    pub backend: Backend,

    /// Worker count for parallel stages, 0 for available parallelism.
    pub threads: usize,
}

impl std::default::Default for SolverParameters {
    fn default() -> Self {
        SolverParameters {
            nx: 10000,
            ny: 200,
            nt: 200,
            engine: Engine::default(),
            backend: Backend::default(),
            threads: 0,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SolverState {
    /// Fields initialized, no step taken.
    Init,

    /// Step `t` is the next one to run.
    Running { t: usize },

    /// All `nt` steps done.
    Done,
}

/// Outcome of a single step.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct StepReport {
    pub t: usize,
    pub records: usize,
}

/// Outcome of a whole run.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RunSummary {
    pub steps: usize,
    pub records: usize,
    pub elapsed: Duration,
}

/// Owns the fields for the duration of a run and drives the time loop.
pub struct Solver {
    fields: Fields,
    engine: Engine,
    decomposer: Decomposer,
    nt: usize,
    state: SolverState,
}

impl Solver {
    pub fn new(params: &SolverParameters) -> Result<Self> {
        let fields = Fields::initialize(params.nx, params.ny)?;
        let decomposer =
            Decomposer::new(resolve_workers(params.threads), params.backend);
        Ok(Self::from_fields(fields, params.engine, decomposer, params.nt))
    }

    /// Run over caller provided fields.
    pub fn from_fields(
        fields: Fields,
        engine: Engine,
        decomposer: Decomposer,
        nt: usize,
    ) -> Self {
        Solver {
            fields,
            engine,
            decomposer,
            nt,
            state: SolverState::Init,
        }
    }

    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    pub fn into_fields(self) -> Fields {
        self.fields
    }

    pub fn shape(&self) -> GridShape {
        self.fields.shape()
    }

    pub fn state(&self) -> SolverState {
        self.state
    }

    pub fn engine(&self) -> Engine {
        self.engine
    }

    pub fn decomposer(&self) -> &Decomposer {
        &self.decomposer
    }

    pub fn steps(&self) -> usize {
        self.nt
    }

    fn next_t(&self) -> Option<usize> {
        match self.state {
            SolverState::Init if self.nt > 0 => Some(0),
            SolverState::Running { t } => Some(t),
            _ => None,
        }
    }

    /// Run one time step, streaming its records into `sink`.
    /// Returns `None` once all steps have run.
    pub fn step<S: RecordSink + ?Sized>(
        &mut self,
        sink: &mut S,
    ) -> Result<Option<StepReport>> {
        let Some(t) = self.next_t() else {
            self.state = SolverState::Done;
            return Ok(None);
        };

        {
            profiling::scope!("solver: update");
            self.engine.update(&mut self.fields, &self.decomposer);
        }
        let records = convergence::report(
            t,
            &self.fields.current,
            &self.fields.next,
            sink,
        )?;
        self.engine.advance(&mut self.fields, &self.decomposer);

        tracing::debug!(t, records, "step done");
        self.state = if t + 1 < self.nt {
            SolverState::Running { t: t + 1 }
        } else {
            SolverState::Done
        };
        Ok(Some(StepReport { t, records }))
    }

    /// Run every remaining step, then flush `sink`.
    pub fn run<S: RecordSink + ?Sized>(
        &mut self,
        sink: &mut S,
    ) -> Result<RunSummary> {
        self.run_with(sink, |_| {})
    }

    /// Like [`Solver::run`], calling `on_step` after each step.
    pub fn run_with<S, F>(&mut self, sink: &mut S, mut on_step: F) -> Result<RunSummary>
    where
        S: RecordSink + ?Sized,
        F: FnMut(&StepReport),
    {
        tracing::info!(
            shape = %self.shape(),
            nt = self.nt,
            engine = ?self.engine,
            backend = ?self.decomposer.backend(),
            workers = self.decomposer.workers(),
            "run starting"
        );
        let start = Instant::now();
        let mut summary = RunSummary::default();
        while let Some(report) = self.step(sink)? {
            summary.steps += 1;
            summary.records += report.records;
            on_step(&report);
        }
        sink.finish()?;
        summary.elapsed = start.elapsed();
        tracing::info!(
            steps = summary.steps,
            records = summary.records,
            elapsed_ms = summary.elapsed.as_millis() as u64,
            "run finished"
        );
        Ok(summary)
    }
}
