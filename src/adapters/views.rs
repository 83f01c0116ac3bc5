//! HTML page rendering with Minijinja.

use include_dir::{Dir, include_dir};
use minijinja::{Environment, Value};

use crate::domain::AppError;

static PAGES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/pages");

/// Page templates embedded in the binary.
///
/// Templates ending in `.html` are auto-escaped; trusted fragments are
/// marked with the `safe` filter inside the template.
#[derive(Debug)]
pub struct Views {
    env: Environment<'static>,
}

impl Views {
    pub fn new() -> Result<Self, AppError> {
        let mut env = Environment::new();

        for file in PAGES_DIR.files() {
            let name = file.path().to_str().ok_or_else(|| AppError::TemplateRender {
                template: file.path().display().to_string(),
                reason: "template name is not valid UTF-8".to_string(),
            })?;
            let source = file.contents_utf8().ok_or_else(|| AppError::TemplateRender {
                template: name.to_string(),
                reason: "template is not valid UTF-8".to_string(),
            })?;

            env.add_template(name, source)
                .map_err(|e| template_error(name, e))?;
        }

        Ok(Self { env })
    }

    pub fn render(&self, template_name: &str, ctx: Value) -> Result<String, AppError> {
        let template =
            self.env.get_template(template_name).map_err(|e| template_error(template_name, e))?;

        template.render(ctx).map_err(|e| template_error(template_name, e))
    }
}

fn template_error(template_name: &str, err: impl std::fmt::Display) -> AppError {
    AppError::TemplateRender { template: template_name.to_string(), reason: err.to_string() }
}
