//! Envsync - share encrypted `.env` files with your team through git.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── init          # Clone the mirror repository
//! │   ├── privkey       # Choose the decryption key
//! │   ├── forge         # Choose the key host
//! │   ├── addkeys       # Add recipients
//! │   ├── update        # Pull encrypted files into the project
//! │   ├── commit        # Encrypt, commit and push a file
//! │   ├── log           # Show a file's history
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── config        # ~/.envsync layout and config.toml
//!     ├── cipher/       # Encryption backends
//!     │   ├── mod       # Encryptor trait
//!     │   └── age       # age implementation (x25519 and ssh keys)
//!     ├── recipients    # Recipient lists and token resolution
//!     ├── forge         # Public key download
//!     ├── git           # VersionControl trait and git CLI backend
//!     ├── mirror        # Artifact layout inside the mirror
//!     ├── project       # Project root and mirror directory name
//!     ├── freshness     # Local vs remote timestamp policy
//!     ├── diff          # Content diffs
//!     ├── confirm       # Overwrite confirmation
//!     └── engine/       # SyncEngine: encrypt, decrypt, update, commit
//! ```

pub mod cli;
pub mod core;
pub mod error;
