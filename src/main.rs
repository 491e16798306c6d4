use clap::Parser;
use some_templates::config::{default_config_path, Config};
use some_templates::{Cli, Keywords, Operation, TemplateEngine};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> some_templates::Result<()> {
    let keywords = Keywords::new(cli.keywords.iter().cloned())?;
    let config = Config::load(default_config_path().as_deref()).with_overrides(cli.root.clone(), None, None);
    let engine = TemplateEngine::new(config);

    match cli.operation() {
        Operation::Add => cmd::add::run(&engine, &keywords),
        Operation::View => cmd::view::run(&engine, &keywords),
        Operation::Edit => cmd::edit::run(&engine, &keywords),
        Operation::Print => cmd::print::run(&engine, &keywords),
        Operation::Path => cmd::path::run(&engine, &keywords, cli.json),
        Operation::Apply => cmd::apply::run(&engine, &keywords),
    }
}

mod cmd {
    pub mod add;
    pub mod apply;
    pub mod edit;
    pub mod path;
    pub mod print;
    pub mod view;
}
