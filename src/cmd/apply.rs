//! Apply template command module

use some_templates::{Keywords, Result, TemplateEngine};

/// Copy the template into the current directory.
///
/// Never fails: copy problems are logged by the engine and the command
/// still exits successfully.
pub fn run(engine: &TemplateEngine, keywords: &Keywords) -> Result<()> {
    engine.apply(keywords);
    Ok(())
}
