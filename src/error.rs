//! Error types.
//!
//! Each concern gets its own enum; they are aggregated into [`Error`] so
//! callers can use `?` everywhere and `main` can pick a hint per variant.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Sync(#[from] SyncError),

    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    Git(#[from] GitError),

    #[error(transparent)]
    Remote(#[from] RemoteError),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Settings, recipient list and working-location errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("no recipients configured (looked in {local} and {global})")]
    NoRecipients { local: PathBuf, global: PathBuf },

    #[error("not at the root of a git working tree: {0}")]
    NotProjectRoot(PathBuf),

    #[error("mirror not initialized: {0} does not exist")]
    NotInitialized(PathBuf),

    #[error("mirror already exists: {0}")]
    AlreadyInitialized(PathBuf),

    #[error("private key not found: {0}")]
    KeyNotFound(PathBuf),

    #[error("unable to determine home directory")]
    NoHomeDir,

    #[error("invalid file name: {0}")]
    InvalidFileName(String),

    #[error("failed to read config: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// File synchronization errors.
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("not tracked in mirror history: {0}")]
    NotTracked(PathBuf),

    #[error("unchanged {0}")]
    Unchanged(String),
}

/// Encryption and key errors.
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("decryption failed: {0}")]
    DecryptionFailed(String),

    #[error("invalid recipient: {0}")]
    InvalidRecipient(String),

    #[error("invalid identity in {path}: {reason}")]
    InvalidIdentity { path: PathBuf, reason: String },
}

/// Local git failures.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("git not found in PATH")]
    NotInstalled,

    #[error("git {command} failed: {stderr}")]
    CommandFailed { command: String, stderr: String },
}

/// Failures talking to the shared remote.
#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("clone of {url} failed: {stderr}")]
    Clone { url: String, stderr: String },

    #[error("pull failed: {0}")]
    Pull(String),

    #[error("push failed, the local commit exists in {mirror} but the remote may not have it: {stderr}")]
    Push { mirror: PathBuf, stderr: String },
}

pub type Result<T> = std::result::Result<T, Error>;
