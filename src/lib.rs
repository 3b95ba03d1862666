//! Seal3D - password-protected files with AES-256-GCM.
//!
//! Everything runs locally:
//! - PBKDF2-HMAC-SHA256 (100 000 iterations) for key derivation
//! - AES-256-GCM for authenticated encryption
//! - a flat `salt || nonce || ciphertext || tag` container
//!
//! ```no_run
//! use seal3d::{Password, decrypt, encrypt};
//!
//! let password = Password::new("correct horse");
//! let container = encrypt(b"hello world", &password)?;
//! assert_eq!(decrypt(&container, &password)?, b"hello world");
//! # Ok::<(), seal3d::Error>(())
//! ```

pub mod app;
pub mod cipher;
pub mod config;
pub mod container;
pub mod error;
pub mod file;
pub mod processor;
pub mod secret;
pub mod types;
pub mod ui;

pub use container::Container;
pub use error::{Error, Result};
pub use processor::{Processor, decrypt, encrypt};
pub use secret::Password;
