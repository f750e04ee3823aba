//! Upload form template.
//!
//! The form is compiled once at startup and rendered with an empty context on every
//! `GET /`.

use minijinja::{context, Environment, UndefinedBehavior};

const FORM_TEMPLATE_NAME: &str = "index.html";
const FORM_TEMPLATE_SOURCE: &str = include_str!("templates/index.html");

/// Compiled upload form.
pub struct FormTemplate {
    env: Environment<'static>,
}

impl FormTemplate {
    /// Compile the bundled upload form.
    pub fn new() -> Result<Self, minijinja::Error> {
        Self::from_source(FORM_TEMPLATE_SOURCE)
    }

    /// Compile a form from the given source.
    ///
    /// Undefined variables are errors: the form is static, so any variable reference
    /// is a template bug.
    pub fn from_source(source: &'static str) -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.add_template(FORM_TEMPLATE_NAME, source)?;
        Ok(Self { env })
    }

    pub fn render(&self) -> Result<String, minijinja::Error> {
        self.env.get_template(FORM_TEMPLATE_NAME)?.render(context! {})
    }
}
