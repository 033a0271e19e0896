//! Local mirror of the events repository.
//!
//! The mirror is a plain git clone. It is only ever written to by `git`
//! itself; everything else reads from `MirrorSync::events_dir()`.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::EventsConfig;
use crate::error::{EventsError, EventsResult};

const EVENTS_SUBDIR: &str = "events";

/// Keeps a local directory in step with the remote events collection.
pub trait MirrorSync {
    /// Root of the local mirror (may not exist yet)
    fn root(&self) -> &Path;

    /// Directory holding the record files
    fn events_dir(&self) -> PathBuf {
        self.root().join(EVENTS_SUBDIR)
    }

    /// Clone the mirror if it doesn't exist yet and return its root.
    fn ensure_local_mirror(&self) -> EventsResult<PathBuf>;

    /// Fetch the latest events into an existing (or freshly cloned) mirror.
    fn refresh_local_mirror(&self) -> EventsResult<()>;
}

/// A mirror kept up to date with the `git` binary.
#[derive(Debug, Clone)]
pub struct GitMirror {
    root: PathBuf,
    remote_url: String,
}

impl GitMirror {
    pub fn new(root: PathBuf, remote_url: impl Into<String>) -> Self {
        GitMirror {
            root,
            remote_url: remote_url.into(),
        }
    }

    pub fn from_config(config: &EventsConfig) -> EventsResult<Self> {
        Ok(Self::new(config.mirror_root()?, config.remote_url.clone()))
    }

    pub fn exists(&self) -> bool {
        self.root.exists()
    }

    fn clone_command(&self, git: &Path) -> Command {
        let mut command = Command::new(git);
        command.arg("clone").arg(&self.remote_url).arg(&self.root);
        command
    }

    fn pull_command(&self, git: &Path) -> Command {
        let mut command = Command::new(git);
        command.arg("-C").arg(&self.root).args(["pull", "--ff-only"]);
        command
    }

    fn clone_repo(&self) -> EventsResult<()> {
        run_git(self.clone_command(&find_git()?))
    }

    fn pull(&self) -> EventsResult<()> {
        run_git(self.pull_command(&find_git()?))
    }
}

impl MirrorSync for GitMirror {
    fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_local_mirror(&self) -> EventsResult<PathBuf> {
        if !self.exists() {
            self.clone_repo()?;
        }
        Ok(self.root.clone())
    }

    fn refresh_local_mirror(&self) -> EventsResult<()> {
        if self.exists() {
            self.pull()
        } else {
            self.clone_repo()
        }
    }
}

fn find_git() -> EventsResult<PathBuf> {
    which::which("git").map_err(|_| EventsError::GitNotInstalled)
}

/// Run git with inherited stdio so clone/pull progress is visible.
fn run_git(mut command: Command) -> EventsResult<()> {
    tracing::debug!("Running {:?}", command);

    let status = command.status()?;

    if !status.success() {
        return Err(EventsError::Sync(format!("{:?} exited with {}", command, status)));
    }

    Ok(())
}
