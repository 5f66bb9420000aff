//! The ten-sided die every resolver draws from.
//!
//! Faces are read as printed, `0..=9`. Face `0` is the die's "ten" face:
//! it is the botch face on the opening draw of a stressed roll and on botch
//! dice, and scores 10 everywhere else.

use arsroller_core::rng::DeterministicRng;

/// Lowest printed face.
pub const MIN_FACE: u32 = 0;

/// Highest printed face.
pub const MAX_FACE: u32 = 9;

/// The face that botches a stressed roll and counts on a botch die.
pub const BOTCH_FACE: u32 = 0;

/// The face that makes a stressed roll explode.
pub const EXPLODE_FACE: u32 = 1;

/// Draws one face of a ten-sided die.
pub fn roll_die(rng: &mut dyn DeterministicRng) -> u32 {
    rng.next_u32_range(MIN_FACE, MAX_FACE)
}

/// Scores a face that cannot botch: the zero face counts as 10.
#[must_use]
pub fn scored_value(face: u32) -> i64 {
    if face == BOTCH_FACE {
        10
    } else {
        i64::from(face)
    }
}
