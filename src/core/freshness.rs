//! Local-versus-remote freshness.
//!
//! Compares the working file's modification time with the latest commit
//! touching its artifact, both at one-second resolution. Content is not
//! inspected here; callers diff before applying anything.

use chrono::{DateTime, Utc};

/// Which side changed last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// The working file was modified after the latest commit.
    LocalNewer,
    /// The latest commit is at least as recent as the working file.
    RemoteNewerOrEqual,
}

/// Classify two Unix timestamps; ties go to the remote.
pub fn classify(local: i64, remote: i64) -> Freshness {
    if local > remote {
        Freshness::LocalNewer
    } else {
        Freshness::RemoteNewerOrEqual
    }
}

/// Result of comparing a working file with its artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison {
    local: i64,
    remote: i64,
}

impl Comparison {
    /// Build from the working file mtime and the artifact commit time.
    pub fn new(local: i64, remote: i64) -> Self {
        Self { local, remote }
    }

    /// Working file modification time (Unix seconds).
    pub fn local(&self) -> i64 {
        self.local
    }

    /// Latest commit time of the artifact (Unix seconds).
    pub fn remote(&self) -> i64 {
        self.remote
    }

    pub fn freshness(&self) -> Freshness {
        classify(self.local, self.remote)
    }

    /// Both timestamps as UTC datetimes, for display.
    pub fn times(&self) -> (Option<DateTime<Utc>>, Option<DateTime<Utc>>) {
        (
            DateTime::from_timestamp(self.local, 0),
            DateTime::from_timestamp(self.remote, 0),
        )
    }

    /// Human-readable "modified ..., committed ..." summary.
    pub fn describe(&self) -> String {
        let (local, remote) = self.times();
        format!("modified {}, committed {}", stamp(local), stamp(remote))
    }
}

fn stamp(time: Option<DateTime<Utc>>) -> String {
    time.map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| "at an unknown time".to_string())
}
