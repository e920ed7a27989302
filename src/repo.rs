//! Upstream icon repository sync.
//!
//! Cloning and pulling are delegated to the `git` command-line client.
//! [`RepoSync`] is the seam between the pipelines and that client.

use std::path::Path;
use std::process::{Command, Output};

use crate::error::{IconError, Result};
use crate::output::{display_path, Printer};

/// Default upstream repository for the SVG icon set.
pub const DEFAULT_SVG_URL: &str = "https://github.com/dreadl0ck/material-icons.git";

/// Default upstream repository for the PNG icon set.
pub const DEFAULT_PNG_URL: &str = "https://github.com/dreadl0ck/material-icons-png.git";

/// Result of a pull on an existing checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PullStatus {
    Updated,
    UpToDate,
}

/// What [`sync_repository`] ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    Cloned,
    Updated,
    UpToDate,
}

/// Version-control operations the pipelines need.
pub trait RepoSync {
    fn clone_repo(&self, url: &str, path: &Path) -> Result<()>;

    /// Pull into an existing checkout. "Already up to date" must come back
    /// as `Ok(PullStatus::UpToDate)`, not as an error.
    fn pull(&self, path: &Path) -> Result<PullStatus>;
}

/// Whether `path` already holds a local checkout.
pub fn is_repository(path: &Path) -> bool {
    path.join(".git").exists()
}

/// Clone `url` into `path`, or pull when a checkout is already there.
pub fn sync_repository(
    sync: &dyn RepoSync,
    path: &Path,
    url: &str,
    printer: &Printer,
) -> Result<SyncOutcome> {
    if is_repository(path) {
        printer.info("Pulling", &format!("icon repository exists at {}", display_path(path)));
        return Ok(match sync.pull(path)? {
            PullStatus::Updated => SyncOutcome::Updated,
            PullStatus::UpToDate => {
                printer.info("Fresh", "already up to date");
                SyncOutcome::UpToDate
            }
        });
    }

    printer.status("Cloning", url);
    sync.clone_repo(url, path)?;
    printer.status("Cloned", &format!("icon repository to {}", display_path(path)));
    Ok(SyncOutcome::Cloned)
}

/// [`RepoSync`] backed by the `git` executable on `PATH`.
#[derive(Debug, Clone, Default)]
pub struct GitCli;

impl GitCli {
    pub fn new() -> Self {
        Self
    }

    fn run(&self, path: &Path, command: &mut Command) -> Result<Output> {
        command.output().map_err(|e| IconError::Sync {
            path: path.to_path_buf(),
            message: format!("Failed to run git: {}", e),
            help: Some("Make sure git is installed and on PATH".to_string()),
        })
    }
}

impl RepoSync for GitCli {
    fn clone_repo(&self, url: &str, path: &Path) -> Result<()> {
        let output = self.run(path, Command::new("git").arg("clone").arg(url).arg(path))?;

        if !output.status.success() {
            return Err(IconError::Sync {
                path: path.to_path_buf(),
                message: format!(
                    "clone of {} failed: {}",
                    url,
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
                help: None,
            });
        }

        Ok(())
    }

    fn pull(&self, path: &Path) -> Result<PullStatus> {
        let output = self.run(path, Command::new("git").arg("pull").current_dir(path))?;
        classify_pull(
            path,
            output.status.success(),
            &String::from_utf8_lossy(&output.stdout),
            &String::from_utf8_lossy(&output.stderr),
        )
    }
}

/// Interpret the outcome of a `git pull`.
pub fn classify_pull(
    path: &Path,
    success: bool,
    stdout: &str,
    stderr: &str,
) -> Result<PullStatus> {
    let up_to_date = |s: &str| s.contains("Already up to date") || s.contains("Already up-to-date");

    if up_to_date(stdout) || up_to_date(stderr) {
        return Ok(PullStatus::UpToDate);
    }

    if success {
        Ok(PullStatus::Updated)
    } else {
        Err(IconError::Sync {
            path: path.to_path_buf(),
            message: format!("pull failed: {}", stderr.trim()),
            help: Some("Remove the local checkout to force a fresh clone".to_string()),
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::fs;
    use tempfile::tempdir;

    /// Records calls instead of talking to git. Cloning creates `.git`.
    pub(crate) struct FakeSync {
        pub calls: RefCell<Vec<String>>,
        pub pull_status: PullStatus,
    }

    impl FakeSync {
        pub fn new() -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                pull_status: PullStatus::UpToDate,
            }
        }
    }

    impl RepoSync for FakeSync {
        fn clone_repo(&self, url: &str, path: &Path) -> Result<()> {
            self.calls.borrow_mut().push(format!("clone {}", url));
            fs::create_dir_all(path.join(".git")).map_err(|e| IconError::io(path, e))?;
            Ok(())
        }

        fn pull(&self, _path: &Path) -> Result<PullStatus> {
            self.calls.borrow_mut().push("pull".to_string());
            Ok(self.pull_status)
        }
    }

    #[test]
    fn test_sync_clones_fresh_path() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("material-icons");
        let sync = FakeSync::new();

        let outcome = sync_repository(&sync, &root, DEFAULT_SVG_URL, &Printer::new()).unwrap();

        assert_eq!(outcome, SyncOutcome::Cloned);
        assert_eq!(*sync.calls.borrow(), vec![format!("clone {}", DEFAULT_SVG_URL)]);
    }

    #[test]
    fn test_sync_pulls_existing_checkout() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        let sync = FakeSync::new();

        let outcome = sync_repository(&sync, dir.path(), DEFAULT_PNG_URL, &Printer::new()).unwrap();

        assert_eq!(outcome, SyncOutcome::UpToDate);
        assert_eq!(*sync.calls.borrow(), vec!["pull".to_string()]);
    }

    #[test]
    fn test_sync_twice_pulls_second_time() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("icons");
        let sync = FakeSync {
            calls: RefCell::new(Vec::new()),
            pull_status: PullStatus::Updated,
        };
        let printer = Printer::new();

        sync_repository(&sync, &root, "file:///upstream.git", &printer).unwrap();
        let second = sync_repository(&sync, &root, "file:///upstream.git", &printer).unwrap();

        assert_eq!(second, SyncOutcome::Updated);
        assert_eq!(sync.calls.borrow().last().map(String::as_str), Some("pull"));
    }

    #[test]
    fn test_sync_clone_failure_is_io_error() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("icons");
        fs::write(&blocker, "not a directory").unwrap();
        let sync = FakeSync::new();

        let err = sync_repository(&sync, &blocker, DEFAULT_SVG_URL, &Printer::new()).unwrap_err();

        assert!(matches!(err, IconError::Io { .. }));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_classify_pull_up_to_date_is_not_error() {
        let path = Path::new("/tmp/icons");
        assert_eq!(
            classify_pull(path, true, "Already up to date.\n", "").unwrap(),
            PullStatus::UpToDate
        );
        assert_eq!(
            classify_pull(path, true, "Already up-to-date.\n", "").unwrap(),
            PullStatus::UpToDate
        );
    }

    #[test]
    fn test_classify_pull_updated_and_failed() {
        let path = Path::new("/tmp/icons");
        assert_eq!(
            classify_pull(path, true, "Fast-forward\n svg/home/twotone.svg | 2 +-\n", "").unwrap(),
            PullStatus::Updated
        );

        let err = classify_pull(path, false, "", "fatal: not a git repository").unwrap_err();
        assert!(matches!(err, IconError::Sync { .. }));
    }
}
