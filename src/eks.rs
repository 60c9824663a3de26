//! The expensive key schedule (EksBlowfishSetup).

use crate::blowfish::Blowfish;
use crate::format::{Cost, SALT_LEN};

/// Derives the Blowfish state for `key` and `salt`, repeating the
/// password/salt re-keying `2^cost` times.
///
/// `key` is the already prepared password (truncated, NUL-terminated).
/// `sign_extend` applies to password expansions only.
pub(crate) fn setup(
    cost: Cost,
    salt: &[u8; SALT_LEN],
    key: &[u8],
    sign_extend: bool,
) -> Blowfish {
    let mut state = Blowfish::init_state();

    state.expand_state(salt, key, sign_extend);

    for _ in 0..cost.rounds() {
        state.expand_key(key, sign_extend);
        state.expand_key(salt, false);
    }

    state
}
