//! The Blowfish cipher, reduced to what bcrypt needs: the initial state, the
//! 64-bit block encryption and the two key-expansion steps.

mod tables;

use zeroize::Zeroize;

const ROUNDS: usize = 16;

/// Key-dependent Blowfish state. Each hashing operation owns its own copy.
pub(crate) struct Blowfish {
    p: [u32; ROUNDS + 2],
    s: [[u32; 256]; 4],
}

impl Drop for Blowfish {
    fn drop(&mut self) {
        self.p.zeroize();
        self.s.zeroize();
    }
}

impl Blowfish {
    /// State before any keying: the digits of pi.
    pub(crate) fn init_state() -> Self {
        Blowfish {
            p: tables::P_INIT,
            s: tables::S_INIT,
        }
    }

    pub(crate) fn encrypt_block(&self, mut left: u32, mut right: u32) -> (u32, u32) {
        for i in 0..ROUNDS {
            left ^= self.p[i];
            right ^= self.f(left);
            std::mem::swap(&mut left, &mut right);
        }
        std::mem::swap(&mut left, &mut right);

        right ^= self.p[ROUNDS];
        left ^= self.p[ROUNDS + 1];

        (left, right)
    }

    /// Standard Blowfish key schedule: mixes `key` into the P-array, then
    /// rewrites P and S with successive encryptions of an all-zero block.
    pub(crate) fn expand_key(&mut self, key: &[u8], sign_extend: bool) {
        self.mix_key(key, sign_extend);
        self.regenerate(|| (0, 0));
    }

    /// Like [`Blowfish::expand_key`], but each block is XORed with the next
    /// 8 bytes of `salt` (cycling) before it is encrypted.
    ///
    /// Only the key is subject to `sign_extend`; salt words are always read
    /// as unsigned bytes.
    pub(crate) fn expand_state(&mut self, salt: &[u8], key: &[u8], sign_extend: bool) {
        self.mix_key(key, sign_extend);

        let mut offset = 0;
        self.regenerate(|| {
            let l = stream_to_word(salt, &mut offset, false);
            let r = stream_to_word(salt, &mut offset, false);
            (l, r)
        });
    }

    fn mix_key(&mut self, key: &[u8], sign_extend: bool) {
        let mut offset = 0;
        for p in self.p.iter_mut() {
            *p ^= stream_to_word(key, &mut offset, sign_extend);
        }
    }

    /// Runs the chained encryption that overwrites P then S, XORing the
    /// running block with `tweak()` before every encryption.
    fn regenerate(&mut self, mut tweak: impl FnMut() -> (u32, u32)) {
        let (mut l, mut r) = (0u32, 0u32);

        for i in (0..ROUNDS + 2).step_by(2) {
            let (tl, tr) = tweak();
            (l, r) = self.encrypt_block(l ^ tl, r ^ tr);
            self.p[i] = l;
            self.p[i + 1] = r;
        }

        for sbox in 0..4 {
            for i in (0..256).step_by(2) {
                let (tl, tr) = tweak();
                (l, r) = self.encrypt_block(l ^ tl, r ^ tr);
                self.s[sbox][i] = l;
                self.s[sbox][i + 1] = r;
            }
        }
    }

    fn f(&self, x: u32) -> u32 {
        let [a, b, c, d] = x.to_be_bytes();

        let h = self.s[0][a as usize].wrapping_add(self.s[1][b as usize]);
        (h ^ self.s[2][c as usize]).wrapping_add(self.s[3][d as usize])
    }
}

/// Reads the next big-endian word from `data`, wrapping around at the end.
/// Empty `data` reads as zero words.
///
/// With `sign_extend` every byte is widened as a signed `i8`, which lets a
/// byte >= 0x80 smear ones over the bits already collected. That is the
/// `$2x$` defect and is kept for verifying such hashes.
fn stream_to_word(data: &[u8], offset: &mut usize, sign_extend: bool) -> u32 {
    if data.is_empty() {
        return 0;
    }

    let mut word = 0u32;
    for _ in 0..4 {
        let byte = data[*offset];
        let widened = if sign_extend {
            byte as i8 as i32 as u32
        } else {
            byte as u32
        };
        word = (word << 8) | widened;
        *offset = (*offset + 1) % data.len();
    }
    word
}
