//! Age encryption backend.
//!
//! Recipients may be native x25519 keys (`age1...`) or SSH public keys,
//! the format forges publish. Identities may be age key files or
//! unencrypted OpenSSH private keys.

use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use ::age::x25519;
use tracing::{trace, warn};
use zeroize::Zeroizing;

use super::Encryptor;
use crate::error::{CipherError, ConfigError, Result};

/// Age-based encryptor writing the binary age format.
pub struct Age;

impl Encryptor for Age {
    fn encrypt(&self, plaintext: &[u8], recipients: &[&str]) -> Result<Vec<u8>> {
        trace!(
            recipients = recipients.len(),
            plaintext_len = plaintext.len(),
            "encrypting"
        );

        let mut parsed = Vec::new();
        for line in recipients {
            if let Some(recipient) = parse_recipient(line)? {
                parsed.push(recipient);
            }
        }
        if parsed.is_empty() {
            return Err(CipherError::EncryptionFailed("no usable recipients".to_string()).into());
        }

        let encryptor =
            ::age::Encryptor::with_recipients(parsed.iter().map(|r| &**r as &dyn ::age::Recipient))
                .map_err(|e| CipherError::EncryptionFailed(format!("{}", e)))?;

        let mut encrypted = Vec::new();
        let mut writer = encryptor
            .wrap_output(&mut encrypted)
            .map_err(|e| CipherError::EncryptionFailed(format!("{}", e)))?;
        writer.write_all(plaintext)?;
        writer
            .finish()
            .map_err(|e| CipherError::EncryptionFailed(format!("{}", e)))?;

        trace!(ciphertext_len = encrypted.len(), "encrypted");
        Ok(encrypted)
    }

    fn decrypt(&self, ciphertext: &[u8], identity: &Path) -> Result<Zeroizing<Vec<u8>>> {
        trace!(ciphertext_len = ciphertext.len(), "decrypting");

        let identities = load_identities(identity)?;

        let decryptor = ::age::Decryptor::new(ciphertext)
            .map_err(|e| CipherError::DecryptionFailed(format!("{}", e)))?;
        let mut reader = decryptor
            .decrypt(identities.iter().map(|i| &**i as &dyn ::age::Identity))
            .map_err(|e| CipherError::DecryptionFailed(format!("{}", e)))?;

        let mut decrypted = Zeroizing::new(Vec::new());
        reader.read_to_end(&mut *decrypted)?;

        trace!(plaintext_len = decrypted.len(), "decrypted");
        Ok(decrypted)
    }

    fn name(&self) -> &'static str {
        "age"
    }
}

/// Parse one recipient line.
///
/// SSH key types age cannot encrypt to (ECDSA, security keys) are skipped
/// with a warning and yield `None`; forges commonly list them alongside
/// usable keys.
///
/// # Errors
///
/// Returns `CipherError::InvalidRecipient` if the line is not a key.
pub fn parse_recipient(line: &str) -> Result<Option<Box<dyn ::age::Recipient>>> {
    let line = line.trim();

    if line.starts_with("age1") {
        let recipient: x25519::Recipient = line
            .parse()
            .map_err(|e: &str| CipherError::InvalidRecipient(format!("{}: {}", line, e)))?;
        return Ok(Some(Box::new(recipient)));
    }

    match line.parse::<::age::ssh::Recipient>() {
        Ok(recipient) => Ok(Some(Box::new(recipient))),
        Err(::age::ssh::ParseRecipientKeyError::Unsupported(kind)) => {
            warn!(kind = %kind, "skipping unsupported ssh key");
            Ok(None)
        }
        Err(e) => Err(CipherError::InvalidRecipient(format!("{}: {:?}", line, e)).into()),
    }
}

/// Load every identity in the key file at `path`.
///
/// # Errors
///
/// Returns `ConfigError::KeyNotFound` if the file is missing and
/// `CipherError::InvalidIdentity` if it holds no usable key.
pub fn load_identities(path: &Path) -> Result<Vec<Box<dyn ::age::Identity>>> {
    if !path.is_file() {
        return Err(ConfigError::KeyNotFound(path.to_path_buf()).into());
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if let Ok(metadata) = fs::metadata(path) {
            let mode = metadata.permissions().mode() & 0o777;
            if mode & 0o077 != 0 {
                warn!(
                    path = %path.display(),
                    mode = %format!("{:o}", mode),
                    "insecure key file permissions"
                );
            }
        }
    }

    let contents = Zeroizing::new(fs::read_to_string(path)?);
    let invalid = |reason: &str| CipherError::InvalidIdentity {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    };

    if contents.trim_start().starts_with("-----BEGIN") {
        let identity = ::age::ssh::Identity::from_buffer(
            contents.as_bytes(),
            Some(path.display().to_string()),
        )
        .map_err(|e| invalid(&e.to_string()))?;

        return match identity {
            ::age::ssh::Identity::Unencrypted(_) => {
                Ok(vec![Box::new(identity) as Box<dyn ::age::Identity>])
            }
            ::age::ssh::Identity::Encrypted(_) => {
                Err(invalid("passphrase-protected ssh keys are not supported").into())
            }
            ::age::ssh::Identity::Unsupported(_) => Err(invalid("unsupported ssh key type").into()),
        };
    }

    let mut identities: Vec<Box<dyn ::age::Identity>> = Vec::new();
    for line in contents.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let identity: x25519::Identity = line.parse().map_err(|e: &str| invalid(e))?;
        identities.push(Box::new(identity));
    }

    if identities.is_empty() {
        return Err(invalid("no identities found").into());
    }
    Ok(identities)
}
