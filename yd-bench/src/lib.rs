//! yd-bench: shared inputs for the criterion benches.

use yd_core::Dice;

/// `n` pseudo-random hands from a fixed xorshift64 stream, so every bench run sees
/// the same inputs.
pub fn gen_dice_samples(n: usize) -> Vec<Dice> {
    let mut x: u64 = 0x1234_5678_9ABC_DEF0;
    let mut out = Vec::with_capacity(n);
    for _ in 0..n {
        let mut d = [0u8; 5];
        for v in &mut d {
            x ^= x << 13;
            x ^= x >> 7;
            x ^= x << 17;
            *v = (x % 6) as u8 + 1;
        }
        out.push(Dice::new(d).expect("xorshift faces are in 1..=6"));
    }
    out
}
