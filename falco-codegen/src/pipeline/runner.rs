//! Pipeline orchestrator.

use eyre::Result;
use tracing::info;

use super::{
    CrudContext, CrudRequest, Phase,
    phases::{
        CodePhase, FormatPhase, GuardPhase, MigratePhase, ResolvePhase, TemplatesPhase, UrlsPhase,
        ValidatePhase,
    },
};

/// The `crud` pipeline orchestrator.
///
/// Runs its phases in order over a [`CrudContext`], stopping at the first
/// error. Files written before a failure are left in place.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new()
///     .phase(ValidatePhase)
///     .phase(MyCustomPhase);
///
/// let ctx = pipeline.run(ctx)?;
/// ```
pub struct Pipeline {
    phases: Vec<Box<dyn Phase>>,
}

impl Pipeline {
    /// Create an empty pipeline.
    pub fn new() -> Self {
        Self { phases: Vec::new() }
    }

    /// The phases a `crud` request needs, in execution order.
    pub fn for_request(request: &CrudRequest) -> Self {
        let mut pipeline = Self::new()
            .phase(ValidatePhase)
            .phase(GuardPhase)
            .phase(ResolvePhase);
        if request.migrate {
            pipeline = pipeline.phase(MigratePhase);
        }
        if request.generates_python() {
            pipeline = pipeline.phase(CodePhase);
        }
        if request.generates_html() {
            pipeline = pipeline.phase(TemplatesPhase);
        }
        if request.generates_python() {
            pipeline = pipeline.phase(UrlsPhase);
        }
        pipeline.phase(FormatPhase)
    }

    /// Add a phase to run after the existing ones.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Names of the phases, in execution order.
    pub fn phase_names(&self) -> Vec<&'static str> {
        self.phases.iter().map(|phase| phase.name()).collect()
    }

    /// Run every phase on the context.
    ///
    /// # Errors
    ///
    /// Returns an error if any phase fails fatally.
    pub fn run<'a>(&self, mut ctx: CrudContext<'a>) -> Result<CrudContext<'a>> {
        for phase in &self.phases {
            let info = phase.info();
            info!(phase = info.name, "{}", info.description);
            phase.run(&mut ctx)?;
        }
        Ok(ctx)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
