//! bcrypt password hashing.
//!
//! bcrypt is a password hashing function designed by Niels Provos and David
//! Mazières, based on the Blowfish cipher, and presented in 1999 at the Usenix
//! Security Symposium. Its expensive key schedule is repeated `2^cost` times,
//! so the work factor can grow with hardware.
//!
//! Hashes use the modular crypt format
//! `$<version>$<cost>$<22 salt chars><31 digest chars>` and are compatible
//! with other bcrypt implementations, including the `$2x$` sign-extension
//! variant.
//!
//! ```
//! let hashed = bcrypt_hash::hash("correct horse", 4)?;
//! assert!(bcrypt_hash::verify("correct horse", &hashed)?);
//! assert!(!bcrypt_hash::verify("battery staple", &hashed)?);
//! # Ok::<(), bcrypt_hash::BCryptError>(())
//! ```

mod bcrypt;
mod blowfish;
mod eks;
mod engine;
mod error;
mod format;

pub mod radix64;

pub use crate::bcrypt::{
    generate_salt, generate_salt_with, generate_settings, hash, hash_with_settings, verify, BCrypt,
};
pub use crate::engine::MAX_KEY_LEN;
pub use crate::error::{BCryptError, Result};
pub use crate::format::{
    Cost, HashParts, Version, DEFAULT_COST, DIGEST_LEN, MAX_COST, MIN_COST, SALT_LEN,
};
