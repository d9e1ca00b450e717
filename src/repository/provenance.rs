use std::path::Path;
use std::process::{Command, Stdio};
use chrono::{DateTime, TimeZone, Utc};
use log::debug;
use crate::error::{Error, Result};

/// Source of version control history for files in the repository
pub trait Provenance {
    /// Identifier of the most recent revision that touched `path`
    fn latest_revision(&self, root: &Path, path: &Path) -> Result<String>;

    /// Commit time of `revision`
    fn revision_timestamp(&self, root: &Path, revision: &str) -> Result<DateTime<Utc>>;
}

/// History queries answered by the `git` binary
#[derive(Debug, Clone)]
pub struct Git {
    program: String,
}

impl Default for Git {
    fn default() -> Self {
        Self::new("git")
    }
}

impl Git {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn run(&self, root: &Path, args: &[&str]) -> Result<String> {
        debug!("Running {} -C {} {}", self.program, root.display(), args.join(" "));

        let output = Command::new(&self.program)
            .arg("-C")
            .arg(root)
            .args(args)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .map_err(|e| Error::Provenance(format!("failed to run {}: {}", self.program, e)))?;

        if !output.status.success() {
            return Err(Error::Provenance(format!(
                "{} {} exited with {}",
                self.program,
                args.join(" "),
                output.status
            )));
        }

        String::from_utf8(output.stdout)
            .map(|stdout| stdout.trim().to_string())
            .map_err(|_| Error::Provenance(format!("{} {} produced non UTF-8 output", self.program, args.join(" "))))
    }
}

/// Path of `path` relative to `root`, with `/` separators as git expects
fn repository_relative(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

impl Provenance for Git {
    fn latest_revision(&self, root: &Path, path: &Path) -> Result<String> {
        let relative = repository_relative(root, path);
        let commit = self.run(root, &["rev-list", "-1", "HEAD", "--", &relative])?;
        if commit.is_empty() {
            return Err(Error::Provenance(format!("no commit touches {}", relative)));
        }
        Ok(commit)
    }

    fn revision_timestamp(&self, root: &Path, revision: &str) -> Result<DateTime<Utc>> {
        let stdout = self.run(root, &["show", "--quiet", "--format=%ct", revision])?;
        let seconds: i64 = stdout
            .parse()
            .map_err(|_| Error::Provenance(format!("unexpected commit time '{}' for {}", stdout, revision)))?;
        Utc.timestamp_opt(seconds, 0)
            .single()
            .ok_or_else(|| Error::Provenance(format!("commit time {} out of range for {}", seconds, revision)))
    }
}
