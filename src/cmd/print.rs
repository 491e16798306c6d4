//! Print template command module

use std::io::{self, Write};

use some_templates::constants::EMPTY_TEMPLATE_MESSAGE;
use some_templates::{Keywords, Result, TemplateEngine};

pub fn run(engine: &TemplateEngine, keywords: &Keywords) -> Result<()> {
    let content = engine.read(keywords)?;
    if content.is_empty() {
        println!("{}", EMPTY_TEMPLATE_MESSAGE);
        return Ok(());
    }

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(&content)
        .and_then(|_| stdout.flush())
        .map_err(|e| some_templates::Error::io("failed to write template", "<stdout>", e))
}
