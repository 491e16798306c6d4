//! Constants for some-templates
//!
//! File names, environment variables and program defaults shared by the
//! library and the `some` binary.

// === File and Directory Names ===

/// Config file looked up in the user's home directory
pub const CONFIG_FILENAME: &str = ".somerc";

/// Subdirectory of the template root holding the keyword tree
pub const TEMPLATES_SUBDIR: &str = "templates";

/// Template root used when nothing else is configured
pub const DEFAULT_TEMPLATE_ROOT: &str = ".";

// === Config Keys ===

pub const KEY_TEMPLATE_ROOT: &str = "template_root";
pub const KEY_EDITOR: &str = "editor";
pub const KEY_PAGER: &str = "pager";

/// Comment marker in the config file
pub const COMMENT_PREFIX: char = '#';

// === Environment Variables ===

/// Path of the config file (overrides ~/.somerc)
pub const ENV_CONFIG: &str = "SOME_CONFIG";
pub const ENV_TEMPLATE_ROOT: &str = "SOME_TEMPLATE_ROOT";
pub const ENV_EDITOR: &str = "SOME_EDITOR";
pub const ENV_PAGER: &str = "SOME_PAGER";

// === External Programs ===

pub const DEFAULT_EDITOR: &str = "vim";
pub const DEFAULT_PAGER: &str = "less";

// === Messages ===

/// Printed by print mode when the template has no content
pub const EMPTY_TEMPLATE_MESSAGE: &str = "Template is empty";
