use eyre::{Result, WrapErr};
use handlebars::{Handlebars, handlebars_helper};
use serde::Serialize;

handlebars_helper!(lower: |s: str| s.to_lowercase());

/// Handlebars renderer for blueprints.
///
/// Escaping is disabled since the output is source code and Django templates,
/// which do their own escaping at runtime.
pub struct Renderer {
    handlebars: Handlebars<'static>,
}

impl Renderer {
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.register_helper("lower", Box::new(lower));
        Self { handlebars }
    }

    /// Render a template string against a serializable context.
    pub fn render(&self, name: &str, template: &str, context: &impl Serialize) -> Result<String> {
        self.handlebars
            .render_template(template, context)
            .wrap_err_with(|| format!("failed to render blueprint '{}'", name))
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
