//! Add template command module

use some_templates::{Keywords, Result, TemplateEngine};

pub fn run(engine: &TemplateEngine, keywords: &Keywords) -> Result<()> {
    println!("Adding template: {}", keywords.name());
    engine.add(keywords)?;
    Ok(())
}
