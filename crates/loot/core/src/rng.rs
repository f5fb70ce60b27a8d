//! Seedable random-draw abstraction.
//!
//! Every table sample and value roll is an independent trial, so the oracle
//! is stateless: each draw derives its value from an explicit seed instead
//! of advancing shared generator state. Given the same
//! seed, every implementation must return the same value, which makes both
//! engines testable without a simulated-dice subsystem.

/// Context value for weighted table-entry picks.
pub const CONTEXT_TABLE_PICK: u32 = 0;
/// Context value for per-item value multiplier rolls.
pub const CONTEXT_VALUE_ROLL: u32 = 1;

/// Stateless random oracle keyed by an explicit seed.
///
/// Implementations must be deterministic: the same seed always produces the
/// same output.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Roll a die with N sides (1-N inclusive).
    fn roll_die(&self, seed: u64, sides: u32) -> u32 {
        if sides == 0 {
            return 1;
        }
        (self.next_u32(seed) % sides) + 1
    }

    /// Random value in `[0, bound)`. Returns 0 for an empty bound.
    ///
    /// Used for cumulative-weight walks over table entries.
    fn roll_below(&self, seed: u64, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        self.next_u32(seed) % bound
    }
}

/// SplitMix64-based random oracle.
///
/// SplitMix64 is a tiny, fast mixing function with full 64-bit avalanche;
/// each output is a pure function of the seed, which matches the stateless
/// oracle contract exactly.
///
/// # References
///
/// - Steele, Lea, Flood: "Fast Splittable Pseudorandom Number Generators"
#[derive(Clone, Copy, Debug, Default)]
pub struct SplitMixRng;

impl SplitMixRng {
    /// Weyl-sequence increment (golden-ratio constant).
    const GAMMA: u64 = 0x9e3779b97f4a7c15;

    /// Finalizing mix: two multiply-xorshift rounds.
    #[inline]
    fn mix(mut z: u64) -> u64 {
        z ^= z >> 30;
        z = z.wrapping_mul(0xbf58476d1ce4e5b9);
        z ^= z >> 27;
        z = z.wrapping_mul(0x94d049bb133111eb);
        z ^ (z >> 31)
    }
}

impl RngOracle for SplitMixRng {
    fn next_u32(&self, seed: u64) -> u32 {
        // Upper half of the mixed word has the strongest avalanche.
        (Self::mix(seed.wrapping_add(Self::GAMMA)) >> 32) as u32
    }
}

/// Compute a per-draw seed from session-level entropy sources.
///
/// # Arguments
///
/// * `session_seed` - Base seed fixed for one session (replay/determinism)
/// * `nonce` - Draw sequence number (increments once per draw)
/// * `context` - Distinguishes multiple independent rolls for the same draw
///
/// # Context Values
///
/// Use different context values when one draw needs several independent
/// random rolls:
///
/// - [`CONTEXT_TABLE_PICK`]: which table entry the draw lands on
/// - [`CONTEXT_VALUE_ROLL`]: the value multiplier for the resolved item
pub fn compute_seed(session_seed: u64, nonce: u64, context: u32) -> u64 {
    let mut hash = session_seed;

    // Mix in the draw sequence number
    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);

    // Mix in the roll context
    hash ^= (context as u64).wrapping_mul(0x517cc1b727220a95);

    // Final avalanche step
    hash ^= hash >> 32;
    hash = hash.wrapping_mul(0xd6e8feb86659fd93);
    hash ^= hash >> 32;

    hash
}
