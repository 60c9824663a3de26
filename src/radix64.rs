//! bcrypt's radix-64 encoding.
//!
//! Same bit packing as standard base64 (6 bits per symbol, most significant
//! bits first, no padding) but over a different alphabet: index 0 is `.` and
//! index 1 is `/`. Unused tail bits of the final symbol are always zero.

use thiserror::Error;

const BCRYPT_BASE64: &[u8; 64] = b"./ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

const INVALID: u8 = 0xff;

const DECODE_TABLE: [u8; 256] = {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < BCRYPT_BASE64.len() {
        table[BCRYPT_BASE64[i] as usize] = i as u8;
        i += 1;
    }
    table
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("invalid radix-64 character {ch:?} at offset {offset}")]
    InvalidCharacter { ch: char, offset: usize },
}

/// Number of symbols [`encode`] emits for `len` input bytes.
pub const fn encoded_len(len: usize) -> usize {
    (len * 8 + 5) / 6
}

/// Encodes `input`: 3 bytes become 4 symbols, a trailing pair becomes 3 and a
/// trailing single byte becomes 2. The output is exactly
/// [`encoded_len`]`(input.len())` symbols long.
pub fn encode(input: &[u8]) -> String {
    let symbols = encoded_len(input.len());
    let mut output = String::with_capacity(symbols);

    for group in input.chunks(3) {
        let mut packed = [0u8; 3];
        packed[..group.len()].copy_from_slice(group);
        let bits = u32::from_be_bytes([0, packed[0], packed[1], packed[2]]);

        // n bytes of a group fill n + 1 symbols
        for shift in [18, 12, 6, 0].into_iter().take(group.len() + 1) {
            output.push(BCRYPT_BASE64[(bits >> shift & 0x3f) as usize] as char);
        }
    }

    debug_assert_eq!(output.len(), symbols);
    output
}

/// Decodes at most `max_len` bytes from `input`.
///
/// Decoding stops as soon as `max_len` bytes are produced or the input runs
/// out; symbols past that point are not inspected. Leftover bits in the
/// last symbol are dropped.
pub fn decode(input: &str, max_len: usize) -> Result<Vec<u8>, DecodeError> {
    let mut result = Vec::with_capacity(max_len);
    let mut buf = 0u32;
    let mut num_bits = 0;

    for (offset, c) in input.char_indices() {
        if result.len() >= max_len {
            break;
        }

        let val = u8::try_from(c)
            .ok()
            .map(|b| DECODE_TABLE[b as usize])
            .filter(|&v| v != INVALID)
            .ok_or(DecodeError::InvalidCharacter { ch: c, offset })?;

        buf = (buf << 6) | (val as u32);
        num_bits += 6;

        if num_bits >= 8 {
            num_bits -= 8;
            result.push((buf >> num_bits) as u8);
            buf &= (1 << num_bits) - 1;
        }
    }

    Ok(result)
}
