//! Constants used throughout envsync.
//!
//! Centralizes magic strings and default values.

/// Tool home directory relative to HOME (~/.envsync).
pub const HOME_DIR: &str = ".envsync";

/// Settings file name inside the tool home.
pub const CONFIG_FILE: &str = "config.toml";

/// Mirror checkout directory inside the tool home.
pub const MIRROR_DIR: &str = "repo";

/// User-global recipient list inside the tool home.
pub const GLOBAL_RECIPIENTS_FILE: &str = "recipients";

/// Project-local recipient list, relative to the project root.
pub const RECIPIENTS_FILE: &str = ".envsync.recipients";

/// Extension appended to every ciphertext artifact.
pub const ARTIFACT_EXT: &str = "age";

/// Forge used for key lookups until `envsync forge` changes it.
pub const DEFAULT_FORGE: &str = "github.com";

/// Private key used when none has been linked, relative to HOME.
pub const DEFAULT_PRIVKEY: &str = ".ssh/id_ed25519";

/// First-line directive that overrides the project name.
pub const REPO_DIRECTIVE: &str = "# repo=";

/// Prefixes of tokens that are already public keys.
pub const KEY_PREFIXES: &[&str] = &[
    "age1",
    "ssh-ed25519 ",
    "ssh-rsa ",
    "ecdsa-sha2-",
    "sk-ssh-ed25519@",
    "sk-ecdsa-sha2-",
];
