//! Template rendering for provider and backend files.
//!
//! Templates are Jinja files loaded from a template directory. Rendering is
//! strict: referencing a variable that is not in the context is an error,
//! never an empty string.

use crate::component::{BackendVars, ProviderVars, ResolvedVariables};
use crate::error::{Error, Result};
use minijinja::{path_loader, AutoEscape, Environment, UndefinedBehavior, Value};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Provider template, rendered to `provider.tf`.
pub const PROVIDER_TEMPLATE: &str = "provider.tf.j2";

/// Backend template, rendered to `backend.tf`.
pub const BACKEND_TEMPLATE: &str = "backend.tf.j2";

/// Templates rendered only when present, with their output file names.
pub const OPTIONAL_TEMPLATES: &[(&str, &str)] = &[
    ("variables.tf.j2", "variables.tf"),
    ("outputs.tf.j2", "outputs.tf"),
];

/// Renders templates from one directory.
///
/// # Examples
///
/// ```no_run
/// use tfstack::render::TemplateRenderer;
/// use std::collections::BTreeMap;
///
/// let renderer = TemplateRenderer::new("templates");
/// let mut vars = BTreeMap::new();
/// vars.insert("region", "us-east-1");
/// let text = renderer.render_string("provider.tf.j2", &vars).unwrap();
/// println!("{text}");
/// ```
pub struct TemplateRenderer {
    template_dir: PathBuf,
    env: Environment<'static>,
}

impl TemplateRenderer {
    /// Create a renderer for templates under `template_dir`.
    #[must_use]
    pub fn new(template_dir: impl AsRef<Path>) -> Self {
        let template_dir = template_dir.as_ref().to_path_buf();

        let mut env = Environment::new();
        env.set_loader(path_loader(template_dir.clone()));
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        env.set_auto_escape_callback(|_| AutoEscape::None);

        Self { template_dir, env }
    }

    /// The directory templates are loaded from.
    #[must_use]
    pub fn template_dir(&self) -> &Path {
        &self.template_dir
    }

    /// Whether a template named `name` exists.
    #[must_use]
    pub fn has_template(&self, name: &str) -> bool {
        self.template_dir.join(name).is_file()
    }

    /// Render `name` with `context` to a string.
    ///
    /// # Errors
    ///
    /// Returns `Error::Render` if the template is missing, malformed, or
    /// references a variable that `context` does not define.
    pub fn render_string<S: Serialize>(&self, name: &str, context: &S) -> Result<String> {
        let render_error = |e: minijinja::Error| Error::Render {
            template: name.to_string(),
            message: format!("{e:#}"),
        };

        let template = self.env.get_template(name).map_err(render_error)?;
        template
            .render(Value::from_serialize(context))
            .map_err(render_error)
    }

    /// Render `name` with `context` and write the result to `target`.
    ///
    /// # Errors
    ///
    /// Same as [`TemplateRenderer::render_string`], plus `Error::Io` if the
    /// file cannot be written.
    pub fn render_file<S: Serialize>(
        &self,
        name: &str,
        context: &S,
        target: &Path,
    ) -> Result<PathBuf> {
        let content = self.render_string(name, context)?;
        fs::write(target, content)?;
        log::debug!("Rendered {name} to {}", target.display());
        Ok(target.to_path_buf())
    }
}

#[derive(Serialize)]
struct BackendContext<'a> {
    backend: &'a BackendVars,
}

#[derive(Serialize)]
struct CombinedContext<'a> {
    #[serde(flatten)]
    provider: &'a ProviderVars,
    backend: &'a BackendVars,
}

/// Render every template for a resolved component into `target_dir`.
///
/// - `provider.tf.j2` gets the provider variables
/// - `backend.tf.j2` gets `backend`
/// - `variables.tf.j2` and `outputs.tf.j2`, when present, get both
///
/// Returns the written files in render order.
///
/// # Errors
///
/// Returns `Error::NotFound` if `target_dir` does not exist, and any
/// rendering or I/O error from the individual templates.
pub fn render_component(
    resolved: &ResolvedVariables,
    renderer: &TemplateRenderer,
    target_dir: &Path,
) -> Result<Vec<PathBuf>> {
    if !target_dir.is_dir() {
        return Err(Error::NotFound {
            path: target_dir.to_path_buf(),
        });
    }

    let mut written = vec![
        renderer.render_file(
            PROVIDER_TEMPLATE,
            &resolved.provider,
            &target_dir.join("provider.tf"),
        )?,
        renderer.render_file(
            BACKEND_TEMPLATE,
            &BackendContext {
                backend: &resolved.backend,
            },
            &target_dir.join("backend.tf"),
        )?,
    ];

    let combined = CombinedContext {
        provider: &resolved.provider,
        backend: &resolved.backend,
    };
    for (template, output) in OPTIONAL_TEMPLATES {
        if renderer.has_template(template) {
            written.push(renderer.render_file(template, &combined, &target_dir.join(output))?);
        }
    }

    Ok(written)
}
