//! Random tree generation and bracket serialization.
//!
//! A tree is emitted as `{id child child}` where each child is either
//! another bracketed tree or nothing at all (a pruned subtree leaves no
//! trace in the output). Ids are assigned in pre-order starting at 1,
//! scoped to a single [`generate`] call.

use rand::Rng;

/// Serialize one randomly shaped binary tree of at most `height` levels
/// below the root.
///
/// `density` is the probability in `[0, 1]` that a non-root node (and
/// with it its entire subtree) is kept. The caller owns the random
/// stream: both trees of a test case must draw from the same `rng` in
/// call order, so reordering calls changes the output for a given seed.
///
/// Parameters are assumed validated (`density` in range); the routine
/// itself cannot fail.
pub fn generate<R: Rng>(height: u32, density: f64, rng: &mut R) -> String {
    let mut out = String::new();
    let mut counter: u64 = 0;
    visit(0, height, density, rng, &mut counter, &mut out);
    out
}

fn visit<R: Rng>(
    depth: u32,
    height: u32,
    density: f64,
    rng: &mut R,
    counter: &mut u64,
    out: &mut String,
) {
    // Exactly one draw per non-root visit, pruned or not. The `depth > 0`
    // guard must come first: the root never consumes a draw and is never
    // pruned.
    if depth > 0 && rng.gen::<f64>() > density {
        return;
    }

    out.push('{');
    *counter += 1;
    out.push_str(&counter.to_string());

    if depth < height {
        for _ in 0..2 {
            visit(depth + 1, height, density, rng, counter, out);
        }
    }

    out.push('}');
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_height_zero_is_root_only() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        assert_eq!(generate(0, 0.5, &mut rng), "{1}");
    }

    #[test]
    fn test_height_one_full_density() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        assert_eq!(generate(1, 1.0, &mut rng), "{1{2}{3}}");
    }

    #[test]
    fn test_height_one_zero_density_prunes_both_children() {
        for seed in 0..16 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            assert_eq!(generate(1, 0.0, &mut rng), "{1}", "seed {}", seed);
        }
    }

    #[test]
    fn test_root_survives_any_density() {
        for seed in 0..16 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let tree = generate(4, 0.1, &mut rng);
            assert!(tree.starts_with("{1"), "seed {}: {}", seed, tree);
        }
    }
}
