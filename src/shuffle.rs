use rand::Rng;
use rand::seq::SliceRandom;

/// Returns a uniformly random permutation of `options` (Fisher–Yates).
///
/// The input is left untouched; the random source is supplied by the caller
/// so sessions and tests can use a seeded generator.
pub fn shuffle<R: Rng + ?Sized>(rng: &mut R, options: &[String]) -> Vec<String> {
    let mut shuffled = options.to_vec();
    shuffled.shuffle(rng);
    shuffled
}
