//! Template engine - the operations behind the `some` command
//!
//! Every operation resolves its keywords against the configured template
//! root first. Invocations take no locks: two processes working on the same
//! template race, and the last writer wins.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::keywords::Keywords;
use crate::launch::{run_interactive, Launcher, SystemLauncher};
use crate::resolve::TemplateLocation;
use crate::util::join_relative;

/// Operation picked from the command line flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Create the template, then open it in the editor
    Add,
    /// Open the template in the pager
    View,
    /// Open the template in the editor
    Edit,
    /// Write the template to stdout
    Print,
    /// Show where the template lives
    Path,
    /// Copy the template into the working directory
    Apply,
}

impl Operation {
    /// Pick the operation from flags. Flags are not exclusive: the first set
    /// flag in the order add, view, edit, print, path wins; none means apply.
    pub fn from_flags(add: bool, view: bool, edit: bool, print: bool, path: bool) -> Self {
        if add {
            Operation::Add
        } else if view {
            Operation::View
        } else if edit {
            Operation::Edit
        } else if print {
            Operation::Print
        } else if path {
            Operation::Path
        } else {
            Operation::Apply
        }
    }
}

/// Runs template operations against one configuration
pub struct TemplateEngine<L: Launcher = SystemLauncher> {
    config: Config,
    work_dir: PathBuf,
    launcher: L,
}

impl TemplateEngine<SystemLauncher> {
    /// Engine applying into the current directory and launching real programs
    pub fn new(config: Config) -> Self {
        Self::with_launcher(config, PathBuf::from("."), SystemLauncher)
    }
}

impl<L: Launcher> TemplateEngine<L> {
    pub fn with_launcher(config: Config, work_dir: PathBuf, launcher: L) -> Self {
        Self {
            config,
            work_dir,
            launcher,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    pub fn locate(&self, keywords: &Keywords) -> TemplateLocation {
        let location = TemplateLocation::resolve(&self.config.template_root, keywords);
        log::debug!("resolved {:?} to {}", keywords.as_slice(), location.path.display());
        location
    }

    /// Create the folder tree and an empty template file (truncating an
    /// existing one)
    pub fn create_template(&self, keywords: &Keywords) -> Result<PathBuf> {
        let location = self.locate(keywords);
        fs::create_dir_all(&location.folder)
            .map_err(|e| Error::io("failed to create template folder", &location.folder, e))?;
        File::create(&location.path)
            .map_err(|e| Error::io("failed to create template", &location.path, e))?;
        Ok(location.path)
    }

    /// Create the template and open it in the editor
    pub fn add(&self, keywords: &Keywords) -> Result<PathBuf> {
        let path = self.create_template(keywords)?;
        run_interactive(&self.launcher, &self.config.editor, &path)?;
        Ok(path)
    }

    /// Open the template in the pager
    pub fn view(&self, keywords: &Keywords) -> Result<PathBuf> {
        let path = self.locate(keywords).path;
        run_interactive(&self.launcher, &self.config.pager, &path)?;
        Ok(path)
    }

    /// Open the template in the editor
    pub fn edit(&self, keywords: &Keywords) -> Result<PathBuf> {
        let path = self.locate(keywords).path;
        run_interactive(&self.launcher, &self.config.editor, &path)?;
        Ok(path)
    }

    /// Template content
    pub fn read(&self, keywords: &Keywords) -> Result<Vec<u8>> {
        let path = self.locate(keywords).path;
        fs::read(&path).map_err(|e| Error::io("failed to read template", &path, e))
    }

    /// Copy the template into the working directory as `<name><ext>`.
    ///
    /// Copy failures are logged and swallowed, see [`best_effort_copy`].
    pub fn apply(&self, keywords: &Keywords) -> PathBuf {
        let source = self.locate(keywords).path;
        let destination = join_relative(&self.work_dir, &keywords.file_name());
        best_effort_copy(&source, &destination);
        destination
    }
}

/// Copy `source` over `destination` and sync it to disk.
///
/// Failures are only logged; the first one stops the copy. Returns whether
/// the copy completed. To make apply failures fatal, propagate
/// [`copy_file`]'s error instead of calling this.
pub fn best_effort_copy(source: &Path, destination: &Path) -> bool {
    match copy_file(source, destination) {
        Ok(bytes) => {
            log::debug!("copied {} bytes to {}", bytes, destination.display());
            true
        }
        Err(e) => {
            log::warn!("{}", e);
            false
        }
    }
}

/// Copy all bytes and flush them to stable storage
pub fn copy_file(source: &Path, destination: &Path) -> Result<u64> {
    let mut reader =
        File::open(source).map_err(|e| Error::io("failed to open source file", source, e))?;
    let mut writer = File::create(destination)
        .map_err(|e| Error::io("failed to create destination file", destination, e))?;
    let bytes = io::copy(&mut reader, &mut writer)
        .map_err(|e| Error::io("failed to copy file content to", destination, e))?;
    writer
        .sync_all()
        .map_err(|e| Error::io("failed to sync destination file", destination, e))?;
    Ok(bytes)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::os::unix::process::ExitStatusExt;
    use std::process::ExitStatus;
    use tempfile::TempDir;

    /// Records launches instead of running anything
    #[derive(Default)]
    struct RecordingLauncher {
        calls: RefCell<Vec<(String, PathBuf, bool)>>,
        exit_code: i32,
    }

    impl Launcher for RecordingLauncher {
        fn launch(&self, program: &str, path: &Path) -> Result<ExitStatus> {
            self.calls
                .borrow_mut()
                .push((program.to_string(), path.to_path_buf(), path.exists()));
            // raw wait status: exit code lives in the second byte
            Ok(ExitStatus::from_raw(self.exit_code << 8))
        }
    }

    struct FailingLauncher;

    impl Launcher for FailingLauncher {
        fn launch(&self, program: &str, _path: &Path) -> Result<ExitStatus> {
            Err(Error::Launch {
                program: program.to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "not found"),
            })
        }
    }

    fn kw(words: &[&str]) -> Keywords {
        Keywords::new(words.iter().copied()).unwrap()
    }

    fn setup() -> (TempDir, TempDir, TemplateEngine<RecordingLauncher>) {
        let root = TempDir::new().unwrap();
        let work = TempDir::new().unwrap();
        let config = Config {
            template_root: root.path().to_path_buf(),
            ..Config::default()
        };
        let engine = TemplateEngine::with_launcher(
            config,
            work.path().to_path_buf(),
            RecordingLauncher::default(),
        );
        (root, work, engine)
    }

    #[test]
    fn test_operation_priority() {
        assert_eq!(Operation::from_flags(false, false, false, false, false), Operation::Apply);
        assert_eq!(Operation::from_flags(true, true, true, true, true), Operation::Add);
        assert_eq!(Operation::from_flags(false, true, true, false, false), Operation::View);
        assert_eq!(Operation::from_flags(false, false, true, true, false), Operation::Edit);
        assert_eq!(Operation::from_flags(false, false, false, true, true), Operation::Print);
        assert_eq!(Operation::from_flags(false, false, false, false, true), Operation::Path);
    }

    #[test]
    fn test_add_creates_template_before_editor() {
        let (root, _work, engine) = setup();
        let path = engine.add(&kw(&["go", "http", "server"])).unwrap();

        assert_eq!(path, root.path().join("templates/http/server.go"));
        assert!(path.is_file());
        assert_eq!(fs::read(&path).unwrap(), b"");

        let calls = engine.launcher().calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], ("vim".to_string(), path.clone(), true));
    }

    #[test]
    fn test_add_truncates_existing_template() {
        let (root, _work, engine) = setup();
        let folder = root.path().join("templates");
        fs::create_dir_all(&folder).unwrap();
        fs::write(folder.join("script.py"), "old").unwrap();

        let path = engine.add(&kw(&["python", "script"])).unwrap();
        assert_eq!(fs::read(path).unwrap(), b"");
    }

    #[test]
    fn test_add_fails_when_folder_cannot_be_created() {
        let (root, _work, engine) = setup();
        // a file where the templates directory should be
        fs::write(root.path().join("templates"), "blocker").unwrap();

        let err = engine.add(&kw(&["go", "http", "server"])).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert!(engine.launcher().calls.borrow().is_empty());
    }

    #[test]
    fn test_add_with_absolute_name_stays_under_root() {
        let (root, _work, engine) = setup();
        let outside = TempDir::new().unwrap();
        let victim = outside.path().join("victim");
        fs::write(&victim, "precious").unwrap();

        let path = engine.add(&kw(&["rust", victim.to_str().unwrap()])).unwrap();

        assert!(path.starts_with(root.path().join("templates")));
        assert!(path.is_file());
        assert_eq!(fs::read_to_string(&victim).unwrap(), "precious");
    }

    #[test]
    fn test_apply_with_absolute_name_stays_in_work_dir() {
        let (root, work, engine) = setup();
        let outside = TempDir::new().unwrap();
        let victim = outside.path().join("victim");
        fs::write(&victim, "precious").unwrap();

        let keywords = kw(&["rust", victim.to_str().unwrap()]);
        let template = engine.create_template(&keywords).unwrap();
        fs::write(&template, "template body").unwrap();
        assert!(template.starts_with(root.path()));

        let destination = engine.apply(&keywords);
        assert!(destination.starts_with(work.path()));
        assert_eq!(fs::read_to_string(&victim).unwrap(), "precious");
    }

    #[test]
    fn test_view_uses_pager_without_creating() {
        let (root, _work, engine) = setup();
        let path = engine.view(&kw(&["java", "spring", "KafkaConsumer"])).unwrap();

        assert_eq!(path, root.path().join("templates/spring/KafkaConsumer.java"));
        assert!(!path.exists());
        let calls = engine.launcher().calls.borrow();
        assert_eq!(calls[0].0, "less");
    }

    #[test]
    fn test_edit_uses_configured_editor() {
        let root = TempDir::new().unwrap();
        let config = Config {
            template_root: root.path().to_path_buf(),
            editor: "nano".to_string(),
            ..Config::default()
        };
        let engine = TemplateEngine::with_launcher(
            config,
            root.path().to_path_buf(),
            RecordingLauncher::default(),
        );

        engine.edit(&kw(&["go", "main"])).unwrap();
        let calls = engine.launcher().calls.borrow();
        assert_eq!(calls[0].0, "nano");
        assert_eq!(calls[0].1, root.path().join("templates/main.go"));
    }

    #[test]
    fn test_editor_failure_exit_is_not_fatal() {
        let root = TempDir::new().unwrap();
        let config = Config {
            template_root: root.path().to_path_buf(),
            ..Config::default()
        };
        let launcher = RecordingLauncher {
            exit_code: 1,
            ..RecordingLauncher::default()
        };
        let engine = TemplateEngine::with_launcher(config, root.path().to_path_buf(), launcher);

        assert!(engine.edit(&kw(&["go", "main"])).is_ok());
    }

    #[test]
    fn test_launch_failure_is_fatal() {
        let root = TempDir::new().unwrap();
        let config = Config {
            template_root: root.path().to_path_buf(),
            ..Config::default()
        };
        let engine = TemplateEngine::with_launcher(config, root.path().to_path_buf(), FailingLauncher);

        let err = engine.add(&kw(&["go", "main"])).unwrap_err();
        assert!(matches!(err, Error::Launch { .. }));
        // the template exists even though the editor never started
        assert!(root.path().join("templates/main.go").exists());
    }

    #[test]
    fn test_apply_copies_exact_bytes() {
        let (root, work, engine) = setup();
        let folder = root.path().join("templates");
        fs::create_dir_all(&folder).unwrap();
        fs::write(folder.join("script.py"), "print(1)").unwrap();

        let destination = engine.apply(&kw(&["python", "script"]));
        assert_eq!(destination, work.path().join("script.py"));
        assert_eq!(fs::read(&destination).unwrap(), b"print(1)");
    }

    #[test]
    fn test_apply_is_idempotent_and_overwrites() {
        let (root, work, engine) = setup();
        let folder = root.path().join("templates/http");
        fs::create_dir_all(&folder).unwrap();
        fs::write(folder.join("server.go"), "package main\n").unwrap();
        fs::write(work.path().join("server.go"), "a much longer stale destination").unwrap();

        let keywords = kw(&["go", "http", "server"]);
        engine.apply(&keywords);
        engine.apply(&keywords);
        assert_eq!(
            fs::read_to_string(work.path().join("server.go")).unwrap(),
            "package main\n"
        );
    }

    #[test]
    fn test_add_then_apply_is_identical() {
        let (_root, work, engine) = setup();
        let keywords = kw(&["java", "spring", "Service"]);
        let template = engine.add(&keywords).unwrap();
        let destination = engine.apply(&keywords);

        assert_eq!(destination, work.path().join("Service.java"));
        assert_eq!(fs::read(template).unwrap(), fs::read(destination).unwrap());
    }

    #[test]
    fn test_apply_missing_template_is_not_fatal() {
        let (_root, work, engine) = setup();
        let destination = engine.apply(&kw(&["go", "missing"]));
        // open fails first, so no destination is created
        assert!(!destination.exists());
        assert!(!work.path().join("missing.go").exists());
    }

    #[test]
    fn test_best_effort_copy_reports_failure() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("src.txt");
        fs::write(&source, "x").unwrap();

        assert!(best_effort_copy(&source, &temp.path().join("dst.txt")));
        assert!(!best_effort_copy(&temp.path().join("nope"), &temp.path().join("dst2.txt")));
        assert!(!best_effort_copy(&source, &temp.path().join("no/such/dir/dst.txt")));
    }

    #[test]
    fn test_copy_file_errors_name_the_step() {
        let temp = TempDir::new().unwrap();
        let err = copy_file(&temp.path().join("nope"), &temp.path().join("dst")).unwrap_err();
        match err {
            Error::Io { context, .. } => assert_eq!(context, "failed to open source file"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_read_template() {
        let (root, _work, engine) = setup();
        let folder = root.path().join("templates");
        fs::create_dir_all(&folder).unwrap();
        fs::write(folder.join("main.go"), "package main").unwrap();

        assert_eq!(engine.read(&kw(&["go", "main"])).unwrap(), b"package main");
        assert!(engine.read(&kw(&["go", "other"])).is_err());
    }
}
