//! Template engine for the HTML pages using Jinja2 syntax.
//!
//! Templates are read once at startup from the configured directory and
//! kept in memory for the lifetime of the process.

use minijinja::Environment;
use serde::Serialize;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template '{0}' not found")]
    NotFound(String),

    #[error("Failed to render template: {0}")]
    RenderError(String),
}

/// Renders the `.jinja` page templates.
///
/// Names are paths relative to the template directory, e.g. `form.html.jinja`.
/// HTML auto-escaping applies to every `*.html.jinja` template.
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    /// Load every `.jinja` file under `dir`, recursively.
    ///
    /// A missing directory yields an empty renderer; rendering then fails
    /// with [`TemplateError::NotFound`] per request.
    pub fn from_dir(dir: &Path) -> Self {
        let mut env = Environment::new();

        if dir.exists() {
            load_templates_recursive(&mut env, dir, dir);
        } else {
            tracing::warn!("Template directory {} does not exist", dir.display());
        }

        Self { env }
    }

    /// Render a template with the given context.
    pub fn render<S: Serialize>(&self, template_name: &str, ctx: S) -> Result<String, TemplateError> {
        let template = self
            .env
            .get_template(template_name)
            .map_err(|_| TemplateError::NotFound(template_name.to_string()))?;

        template
            .render(ctx)
            .map_err(|e| TemplateError::RenderError(e.to_string()))
    }

    /// List all loaded templates
    pub fn template_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .env
            .templates()
            .map(|(name, _)| name.to_string())
            .collect();
        names.sort();
        names
    }
}

/// Recursively load all .jinja templates from a directory
fn load_templates_recursive(env: &mut Environment<'static>, base_path: &Path, current_path: &Path) {
    if let Ok(entries) = std::fs::read_dir(current_path) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                load_templates_recursive(env, base_path, &path);
            } else if path.extension().is_some_and(|ext| ext == "jinja") {
                if let Ok(relative) = path.strip_prefix(base_path) {
                    // Forward slashes regardless of platform
                    let template_name = relative
                        .components()
                        .map(|c| c.as_os_str().to_string_lossy())
                        .collect::<Vec<_>>()
                        .join("/");
                    if let Ok(content) = std::fs::read_to_string(&path) {
                        // Templates live for the whole process; leaking gives them a 'static lifetime
                        let static_name: &'static str =
                            Box::leak(template_name.clone().into_boxed_str());
                        let static_content: &'static str = Box::leak(content.into_boxed_str());
                        if let Err(e) = env.add_template(static_name, static_content) {
                            tracing::warn!("Failed to load template {}: {}", template_name, e);
                        } else {
                            tracing::debug!("Loaded template: {}", template_name);
                        }
                    }
                }
            }
        }
    }
}
