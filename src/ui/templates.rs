//! HTML templates embedded in the binary

use minijinja::Environment;
use rust_embed::RustEmbed;

use crate::error::{Error, Result};

#[derive(RustEmbed)]
#[folder = "templates/"]
struct Templates;

/// Build a template environment holding every embedded template.
/// `.html` templates are auto-escaped.
pub fn environment() -> Result<Environment<'static>> {
    let mut env = Environment::new();

    for name in Templates::iter() {
        let file = Templates::get(&name)
            .ok_or_else(|| Error::Other(format!("Embedded template '{}' vanished", name)))?;
        let source = String::from_utf8(file.data.into_owned())
            .map_err(|e| Error::Other(format!("Template '{}' is not UTF-8: {}", name, e)))?;
        env.add_template_owned(name.into_owned(), source)?;
    }

    tracing::debug!("Loaded {} templates", env.templates().count());
    Ok(env)
}
