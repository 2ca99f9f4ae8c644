//! Seed hashing for reproducible display series
//!
//! A seed is the sum of the character codes of an identifier. It is not a
//! hash in any cryptographic sense: short distinct ids usually differ, and the
//! same id always yields the same series.

use super::models::STATS_DAYS;

/// Step added per day before reducing into the value band
const STEP: u64 = 17;
/// Width of the value band
const BAND: u64 = 50;
/// Smallest value a series can hold
const FLOOR: u64 = 10;

/// Sum of the character codes of `id`
pub fn seed_from(id: &str) -> u64 {
    id.chars().map(|ch| ch as u64).sum()
}

/// 7-day statistics series derived from a place id
///
/// Every entry lies in `[10, 59]`.
pub fn stats_from_pid(pid: &str) -> [u32; STATS_DAYS] {
    let seed = seed_from(pid);
    std::array::from_fn(|i| ((seed + i as u64 * STEP) % BAND + FLOOR) as u32)
}
