use zeroize::Zeroizing;

use crate::eks;
use crate::format::{Cost, Version, SALT_LEN};

/// Bytes of password that take part in hashing, terminator included.
pub const MAX_KEY_LEN: usize = 72;

pub(crate) const RAW_DIGEST_LEN: usize = 24;

const ENCRYPTION_PASSES: usize = 64;

// "OrpheanBeholderScryDoubt" as three 64-bit blocks
const MAGIC: [u32; 6] = [
    0x4f727068, 0x65616e42, 0x65686f6c, 0x64657253, 0x63727944, 0x6f756274,
];

/// Computes the raw 24-byte bcrypt output. Only the first 23 bytes end up in
/// an encoded hash.
pub(crate) fn digest(
    cost: Cost,
    salt: &[u8; SALT_LEN],
    password: &[u8],
    version: Version,
) -> [u8; RAW_DIGEST_LEN] {
    let key = prepare_key(password);
    let state = eks::setup(cost, salt, &key, version.sign_extends_key());

    let mut ctext = MAGIC;
    for _ in 0..ENCRYPTION_PASSES {
        for block in ctext.chunks_exact_mut(2) {
            let (l, r) = state.encrypt_block(block[0], block[1]);
            block[0] = l;
            block[1] = r;
        }
    }

    let mut output = [0u8; RAW_DIGEST_LEN];
    for (bytes, word) in output.chunks_exact_mut(4).zip(ctext) {
        bytes.copy_from_slice(&word.to_be_bytes());
    }
    output
}

/// Appends the NUL terminator and keeps at most [`MAX_KEY_LEN`] bytes. A
/// password of 72 bytes or more loses its terminator. The key is never empty.
fn prepare_key(password: &[u8]) -> Zeroizing<Vec<u8>> {
    let mut key = Zeroizing::new(Vec::with_capacity(MAX_KEY_LEN + 1));
    key.extend_from_slice(&password[..password.len().min(MAX_KEY_LEN)]);
    key.push(0);

    if key.len() > MAX_KEY_LEN {
        log::debug!(
            "password of length {} is truncated to {} bytes",
            password.len(),
            MAX_KEY_LEN
        );
        key.truncate(MAX_KEY_LEN);
    }
    key
}
