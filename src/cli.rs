use std::path::PathBuf;

use clap::Parser;

use crate::engine::Operation;

/// some - keyword-addressed boilerplate templates
///
/// # Quick Reference
///
/// ```bash
/// some -a go http server      # Create templates/http/server.go and edit it
/// some -e go http server      # Edit an existing template
/// some -v go http server      # Page through a template
/// some go http server         # Copy the template to ./server.go
/// some -p python script       # Print templates/script.py to stdout
/// some --path java spring Kafka   # Show where a template lives
/// ```
///
/// ## Keywords
///
/// The first keyword is the language (java, python and go map to
/// .java, .py and .go; anything else adds no extension). The last keyword
/// is the template name. Keywords in between are category folders.
///
/// ## Configuration
///
/// `~/.somerc` (or `$SOME_CONFIG`), one `key = value` per line:
///
/// - `template_root`: directory holding `templates/` (default: .)
/// - `editor`: program used by --add and --edit (default: vim)
/// - `pager`: program used by --view (default: less)
///
/// ## Environment Variables
///
/// - `SOME_TEMPLATE_ROOT`, `SOME_EDITOR`, `SOME_PAGER` override the config file
/// - `RUST_LOG` controls diagnostics (default: warn)
#[derive(Parser, Debug)]
#[command(name = "some")]
#[command(version)]
#[command(about = "Store and reuse boilerplate templates addressed by keywords")]
pub struct Cli {
    /// Create a new template, then open it in the editor
    #[arg(short, long)]
    pub add: bool,

    /// Open an existing template in the pager
    #[arg(short, long)]
    pub view: bool,

    /// Open an existing template in the editor
    #[arg(short, long)]
    pub edit: bool,

    /// Print the template to stdout
    #[arg(short, long)]
    pub print: bool,

    /// Print the resolved template path
    #[arg(long)]
    pub path: bool,

    /// Output in JSON format (with --path)
    #[arg(long)]
    pub json: bool,

    /// Template root directory (overrides config and $SOME_TEMPLATE_ROOT)
    #[arg(long, value_name = "PATH")]
    pub root: Option<PathBuf>,

    /// LANGUAGE [CATEGORY...] NAME
    #[arg(required = true, value_name = "KEYWORDS")]
    pub keywords: Vec<String>,
}

impl Cli {
    pub fn operation(&self) -> Operation {
        Operation::from_flags(self.add, self.view, self.edit, self.print, self.path)
    }
}
