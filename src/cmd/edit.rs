use some_templates::{Keywords, Result, TemplateEngine};

pub fn run(engine: &TemplateEngine, keywords: &Keywords) -> Result<()> {
    engine.edit(keywords)?;
    Ok(())
}
