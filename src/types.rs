//! Common type definitions for Seal3D.
//!
//! - [`ProcessorMode`]: distinguishes encryption from decryption
//! - [`Processing`]: the same choice phrased as an operation in progress
//! - [`FileInfo`]: a discovered file shown in interactive mode

use std::path::PathBuf;

use strum::{Display, VariantArray};

/// Represents the type of file operation to perform.
///
/// Used to filter files during discovery and determine output path generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, VariantArray)]
pub enum ProcessorMode {
    /// Encrypt the file, producing a `.encrypted` output.
    Encrypt,

    /// Decrypt the file, stripping the `.encrypted` suffix.
    Decrypt,
}

impl ProcessorMode {
    /// Returns a human-readable label for the mode.
    #[inline]
    pub fn label(self) -> &'static str {
        match self {
            Self::Encrypt => "Encrypt",
            Self::Decrypt => "Decrypt",
        }
    }

    /// Past-tense verb used in status messages.
    #[inline]
    pub fn past_tense(self) -> &'static str {
        match self {
            Self::Encrypt => "encrypted",
            Self::Decrypt => "decrypted",
        }
    }
}

/// An operation in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Processing {
    #[strum(to_string = "Encrypting...")]
    Encryption,

    #[strum(to_string = "Decrypting...")]
    Decryption,
}

impl From<ProcessorMode> for Processing {
    fn from(mode: ProcessorMode) -> Self {
        match mode {
            ProcessorMode::Encrypt => Self::Encryption,
            ProcessorMode::Decrypt => Self::Decryption,
        }
    }
}

/// A file listed in interactive mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    pub path: PathBuf,
    pub size: u64,
    pub is_encrypted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(ProcessorMode::Encrypt.to_string(), "Encrypt");
        assert_eq!(Processing::Decryption.to_string(), "Decrypting...");
    }

    #[test]
    fn test_mode_conversion() {
        for &mode in ProcessorMode::VARIANTS {
            let expected = match mode {
                ProcessorMode::Encrypt => Processing::Encryption,
                ProcessorMode::Decrypt => Processing::Decryption,
            };
            assert_eq!(Processing::from(mode), expected);
        }
    }
}
