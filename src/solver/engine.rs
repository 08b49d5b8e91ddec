use crate::decomposition::Decomposer;
use crate::grid::Fields;
use crate::par_slice;
use crate::stencil::*;
use clap::ValueEnum;

/// The three equivalent ways of running a step.
/// All of them produce bit identical fields.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum Engine {
    /// Classify every cell inside one pass, serial
    Naive,

    /// Interior pass then edge passes, serial
    Serial,

    /// Interior rows and averaging split across workers
    #[default]
    Parallel,
}

impl Engine {
    /// Decomposer actually used by this engine's stages.
    pub fn effective_decomposer(&self, decomposer: &Decomposer) -> Decomposer {
        match self {
            Engine::Naive | Engine::Serial => Decomposer::serial(),
            Engine::Parallel => *decomposer,
        }
    }

    /// Compute `next` from `current`. Corners of `next` are left alone.
    pub fn update(&self, fields: &mut Fields, decomposer: &Decomposer) {
        let (current, next) = fields.split_for_update();
        match self {
            Engine::Naive => naive_apply(current, next),
            Engine::Serial | Engine::Parallel => direct_apply(
                current,
                next,
                &self.effective_decomposer(decomposer),
            ),
        }
    }

    /// `current <- (current + next) * 0.5` over the whole grid.
    pub fn advance(&self, fields: &mut Fields, decomposer: &Decomposer) {
        profiling::scope!("engine: advance");
        let (current, next) = fields.split_for_advance();
        par_slice::average_into(
            current.buffer_mut(),
            next.buffer(),
            &self.effective_decomposer(decomposer),
        );
    }
}
