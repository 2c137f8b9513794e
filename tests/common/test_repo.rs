//! TestRepo helper for integration tests.
//!
//! Provides a temporary git repository for testing the pipeline, with
//! deterministic commit authors and timestamps.

use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// A temporary git repository for testing.
///
/// The repository is automatically cleaned up when the TestRepo is dropped.
pub struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    /// Create a new git repository in a temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");

        let output = Command::new("git")
            .args(["init", "--initial-branch=main"])
            .current_dir(dir.path())
            .output()
            .expect("Failed to execute git init");

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            panic!("git init failed: {}", stderr);
        }

        let repo = Self { dir };
        repo.git(&["config", "user.name", "Test User"]);
        repo.git(&["config", "user.email", "test@example.com"]);
        repo
    }

    /// Get the path to the repository root.
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Execute a git command in this repository.
    ///
    /// # Panics
    ///
    /// Panics if the command fails to execute or returns a non-zero exit code.
    pub fn git(&self, args: &[&str]) -> String {
        self.git_with_env(args, &[])
    }

    /// Execute a git command with extra environment variables set.
    pub fn git_with_env(&self, args: &[&str], envs: &[(&str, &str)]) -> String {
        let mut cmd = Command::new("git");
        cmd.args(args).current_dir(self.path());
        for (key, value) in envs {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute git command");

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            panic!(
                "git {:?} failed with exit code {:?}:\n{}",
                args,
                output.status.code(),
                stderr
            );
        }

        String::from_utf8_lossy(&output.stdout).into_owned()
    }

    /// Write a file in the repository.
    pub fn write_file(&self, name: &str, content: &str) {
        let path = self.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(&path, content).expect("Failed to write file");
    }

    /// Stage everything and commit with a fixed author and timestamp.
    ///
    /// `epoch` becomes both the author and committer date, so extracted
    /// log entries carry exactly this timestamp.
    pub fn commit_all(&self, message: &str, author: &str, epoch: i64) {
        self.git(&["add", "-A"]);
        let date = format!("{epoch} +0000");
        self.git_with_env(
            &["commit", "--allow-empty", "-m", message],
            &[
                ("GIT_AUTHOR_NAME", author),
                ("GIT_AUTHOR_EMAIL", "author@example.com"),
                ("GIT_AUTHOR_DATE", &date),
                ("GIT_COMMITTER_NAME", author),
                ("GIT_COMMITTER_EMAIL", "author@example.com"),
                ("GIT_COMMITTER_DATE", &date),
            ],
        );
    }

    /// Register another repository as a submodule at the given path.
    ///
    /// The registration is left staged; follow with [`commit_all`] to
    /// record it.
    ///
    /// [`commit_all`]: TestRepo::commit_all
    pub fn add_submodule(&self, child: &TestRepo, path: &str) {
        let url = child.path();
        let url = url.to_str().expect("child path is not valid UTF-8");
        // file:// transport for submodules is disabled by default since
        // git 2.38
        self.git(&[
            "-c",
            "protocol.file.allow=always",
            "submodule",
            "add",
            url,
            path,
        ]);
    }
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}
