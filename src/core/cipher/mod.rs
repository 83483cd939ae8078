//! Encryption of working files.
//!
//! The engine only talks to the [`Encryptor`] trait; [`Age`] is the
//! production implementation and produces files readable by the `age`
//! command-line tool.

use std::path::Path;

use zeroize::Zeroizing;

use crate::error::Result;

mod age;

pub use self::age::Age;

/// Encryption backend.
pub trait Encryptor {
    /// Encrypt `plaintext` to every key line in `recipients`.
    ///
    /// # Errors
    ///
    /// Returns `CipherError` if a recipient is malformed, none is usable,
    /// or encryption fails.
    fn encrypt(&self, plaintext: &[u8], recipients: &[&str]) -> Result<Vec<u8>>;

    /// Decrypt `ciphertext` with the private key stored at `identity`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::KeyNotFound` if the key file is missing, or
    /// `CipherError` if it cannot be parsed or does not match.
    fn decrypt(&self, ciphertext: &[u8], identity: &Path) -> Result<Zeroizing<Vec<u8>>>;

    /// Backend name for logs.
    fn name(&self) -> &'static str;
}
