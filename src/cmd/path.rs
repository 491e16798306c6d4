//! Resolve template path command module

use some_templates::{Keywords, Result, TemplateEngine};

pub fn run(engine: &TemplateEngine, keywords: &Keywords, json: bool) -> Result<()> {
    let location = engine.locate(keywords);
    if json {
        println!("{}", serde_json::to_string_pretty(&location)?);
    } else {
        // Output full path for shell pipeline compatibility
        println!("{}", location.path.display());
    }
    Ok(())
}
