//! Display-name generation for bases.
//!
//! Names are opaque labels as far as the rules core is concerned; this
//! module exists so callers have a ready-made source of readable,
//! reasonably-unique slugs.

use rand::Rng;

const ADJECTIVES: &[&str] = &[
    "amber", "bold", "broken", "crimson", "distant", "drifting", "dusty", "eager", "fallow",
    "frozen", "gilded", "hollow", "iron", "jagged", "keen", "lonely", "lucid", "mellow", "noble",
    "ochre", "pale", "quiet", "restless", "rust", "silent", "sombre", "sterling", "swift",
    "tranquil", "umber", "vivid", "wandering",
];

const NOUNS: &[&str] = &[
    "anchor", "badger", "beacon", "bulwark", "citadel", "comet", "condor", "crucible", "falcon",
    "garrison", "harbor", "haven", "heron", "keep", "lantern", "marrow", "meridian", "monolith",
    "obelisk", "osprey", "perch", "pillar", "quarry", "rampart", "ridge", "sentinel", "spire",
    "summit", "talon", "vanguard", "vault", "warden",
];

/// Generate a two-word slug such as `quiet-sentinel`.
#[must_use]
pub fn slug<R: Rng>(rng: &mut R) -> String {
    let adjective = ADJECTIVES[rng.gen_range(0..ADJECTIVES.len())];
    let noun = NOUNS[rng.gen_range(0..NOUNS.len())];
    format!("{adjective}-{noun}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_slug_shape() {
        let mut rng = SmallRng::seed_from_u64(42);
        let name = slug(&mut rng);
        assert!(name.contains('-'), "slug should be two hyphenated words");
        assert!(!name.is_empty());
    }

    #[test]
    fn test_slug_deterministic() {
        let mut rng1 = SmallRng::seed_from_u64(123);
        let mut rng2 = SmallRng::seed_from_u64(123);
        assert_eq!(slug(&mut rng1), slug(&mut rng2));
    }
}
