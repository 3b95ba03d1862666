//! Global Configuration Constants
//!
//! Fixed parameters of the container format and of the command-line front end.
//! The container has exactly one layout, so every size below is part of the
//! on-disk format: changing any of them makes existing artifacts unreadable.

/// Application name used in user interfaces.
pub const APP_NAME: &str = "Seal3D";

/// Suffix appended to encrypted files.
pub const FILE_EXTENSION: &str = ".encrypted";

/// Suffix appended on decryption when the input does not carry [`FILE_EXTENSION`].
pub const DECRYPTED_EXTENSION: &str = ".decrypted";

/// Environment variable consulted for the password before prompting.
pub const PASSWORD_ENV: &str = "SEAL3D_PASSWORD";

// === Key Derivation Parameters ===

/// PBKDF2 work factor.
///
/// Tuned to make offline guessing expensive while a single interactive
/// derivation stays well under a second on commodity hardware.
pub const PBKDF2_ITERATIONS: u32 = 100_000;

/// Length of the per-encryption salt in bytes.
pub const SALT_SIZE: usize = 16;

/// Length of the derived AES-256 key in bytes.
pub const KEY_SIZE: usize = 32;

// === AES-256-GCM Parameters ===

/// Size of the AES-GCM nonce in bytes.
pub const NONCE_SIZE: usize = 12;

/// Size of the GCM authentication tag appended to every ciphertext.
pub const TAG_SIZE: usize = 16;

// === Container Layout ===

/// Offset of the nonce inside a container.
pub const NONCE_OFFSET: usize = SALT_SIZE;

/// Offset of the ciphertext inside a container.
pub const CIPHERTEXT_OFFSET: usize = SALT_SIZE + NONCE_SIZE;

/// Shortest byte string that can be split into salt and nonce.
///
/// Anything shorter is rejected before key derivation.
pub const MIN_CONTAINER_SIZE: usize = CIPHERTEXT_OFFSET;

/// Size of a container holding an empty plaintext.
///
/// Containers between [`MIN_CONTAINER_SIZE`] and this size parse, but can
/// never authenticate.
pub const MIN_AUTHENTIC_CONTAINER_SIZE: usize = CIPHERTEXT_OFFSET + TAG_SIZE;

// === File Discovery ===

/// Patterns skipped by interactive file discovery.
pub const EXCLUDED_PATTERNS: &[&str] = &[
    "target",       // Rust build artifacts
    "vendor",       // vendored dependencies
    "node_modules", // Node.js dependencies
    ".git",         // Git repository metadata
    ".github",      // GitHub workflows and metadata
    ".config",      // User configuration files
    ".local",       // Local user data
    ".cache",       // Application cache files
    ".ssh",         // SSH keys and configuration
    ".gnupg",       // GPG keys and configuration
];
