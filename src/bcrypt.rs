use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;

use crate::engine;
use crate::error::{BCryptError, Result};
use crate::format::{Cost, HashParts, Version, DIGEST_LEN, SALT_LEN};

/// A configured bcrypt hasher: cost factor plus the version tag written into
/// new hashes.
///
/// ```
/// use bcrypt_hash::{BCrypt, Version};
///
/// let bcrypt = BCrypt::new(4)?.with_version(Version::TwoA);
/// let hashed = bcrypt.hash("hunter2")?;
/// assert!(hashed.starts_with("$2a$04$"));
/// assert!(bcrypt_hash::verify("hunter2", &hashed)?);
/// # Ok::<(), bcrypt_hash::BCryptError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BCrypt {
    cost: Cost,
    version: Version,
}

impl BCrypt {
    pub fn new(cost: u32) -> Result<Self> {
        Ok(BCrypt {
            cost: Cost::new(cost)?,
            version: Version::default(),
        })
    }

    pub fn with_version(mut self, version: Version) -> Self {
        self.version = version;
        self
    }

    pub fn cost(&self) -> Cost {
        self.cost
    }

    pub fn version(&self) -> Version {
        self.version
    }

    /// Hashes `password` under a fresh salt from the operating system.
    pub fn hash(&self, password: impl AsRef<[u8]>) -> Result<String> {
        self.hash_with_rng(password, &mut OsRng)
    }

    /// Hashes `password` under a fresh salt drawn from `rng`.
    pub fn hash_with_rng<R>(&self, password: impl AsRef<[u8]>, rng: &mut R) -> Result<String>
    where
        R: RngCore + CryptoRng,
    {
        let salt = generate_salt_with(rng)?;
        Ok(self.hash_with_salt(password, salt))
    }

    /// Hashes `password` under a caller-chosen salt. Never reuse a salt for
    /// unrelated passwords.
    pub fn hash_with_salt(&self, password: impl AsRef<[u8]>, salt: [u8; SALT_LEN]) -> String {
        let settings = HashParts::new(self.version, self.cost, salt, None);
        compute(&settings, password.as_ref()).to_string()
    }

    /// Produces a settings string (`$<version>$<cost>$<salt>`) with a fresh
    /// salt, for later use with [`hash_with_settings`].
    pub fn generate_settings_with<R>(&self, rng: &mut R) -> Result<String>
    where
        R: RngCore + CryptoRng,
    {
        let salt = generate_salt_with(rng)?;
        Ok(HashParts::new(self.version, self.cost, salt, None).settings())
    }
}

/// Hashes `password` at `cost` with the default version and an OS salt.
pub fn hash(password: impl AsRef<[u8]>, cost: u32) -> Result<String> {
    BCrypt::new(cost)?.hash(password)
}

/// Re-derives a hash from the version, cost and salt embedded in `settings`,
/// which may be a settings string or a complete hash (its digest is ignored).
pub fn hash_with_settings(password: impl AsRef<[u8]>, settings: &str) -> Result<String> {
    let parts = HashParts::parse(settings)?;
    Ok(compute(&parts, password.as_ref()).to_string())
}

/// Checks `password` against a stored hash.
///
/// `Ok(false)` means the password does not match; an error means `stored`
/// is not a usable bcrypt hash.
pub fn verify(password: impl AsRef<[u8]>, stored: &str) -> Result<bool> {
    let parts = HashParts::parse(stored).map_err(|e| {
        log::debug!("rejecting stored hash: {}", e);
        e
    })?;
    if parts.digest().is_none() {
        return Err(BCryptError::MalformedHash(
            "stored hash has no digest".to_string(),
        ));
    }

    let expected = parts.to_string();
    let computed = compute(&parts, password.as_ref()).to_string();

    Ok(expected.as_bytes().ct_eq(computed.as_bytes()).into())
}

/// Generates a settings string at `cost` with the default version.
pub fn generate_settings(cost: u32) -> Result<String> {
    BCrypt::new(cost)?.generate_settings_with(&mut OsRng)
}

// Helper function to generate a random salt
pub fn generate_salt() -> Result<[u8; SALT_LEN]> {
    generate_salt_with(&mut OsRng)
}

pub fn generate_salt_with<R>(rng: &mut R) -> Result<[u8; SALT_LEN]>
where
    R: RngCore + CryptoRng,
{
    let mut salt = [0u8; SALT_LEN];
    rng.try_fill_bytes(&mut salt)
        .map_err(|e| BCryptError::SaltGenerationFailed(e.to_string()))?;
    Ok(salt)
}

fn compute(parts: &HashParts, password: &[u8]) -> HashParts {
    let version = parts.version();
    log::debug!("computing bcrypt ${}$ hash at cost {}", version, parts.cost());
    if version.sign_extends_key() {
        log::warn!("using the sign-extension compatible $2x$ variant");
    }

    let raw = engine::digest(parts.cost(), parts.salt(), password, version);

    // The 24th byte is not part of the encoding.
    let mut digest = [0u8; DIGEST_LEN];
    digest.copy_from_slice(&raw[..DIGEST_LEN]);

    HashParts::new(version, parts.cost(), *parts.salt(), Some(digest))
}
