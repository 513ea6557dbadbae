use rand::Rng;

use crate::core::constraints::ConstraintSet;
use crate::models::Participant;

/// Pick a receiver for `giver` out of the unclaimed `pool`
///
/// Returns `None`, leaving `pool` untouched, when nobody left in the pool is
/// admissible. Otherwise draws uniformly from the pool until an admissible
/// candidate turns up, removes it from the pool and returns it.
///
/// The draw loop always ends because the check above guarantees at least
/// one admissible candidate.
pub fn select_receiver<'a, R: Rng>(
    giver: &Participant,
    pool: &mut Vec<&'a Participant>,
    constraints: &ConstraintSet,
    rng: &mut R,
) -> Option<&'a Participant> {
    if !pool.iter().any(|candidate| constraints.is_admissible(giver, candidate)) {
        tracing::trace!("No admissible receiver left for {}", giver.name);
        return None;
    }

    let mut draws = 0u32;
    loop {
        draws += 1;
        let idx = rng.random_range(0..pool.len());
        if constraints.is_admissible(giver, pool[idx]) {
            tracing::trace!("Picked receiver for {} after {} draw(s)", giver.name, draws);
            return Some(pool.swap_remove(idx));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Couple;
    use rand::{rngs::StdRng, SeedableRng};

    fn people(names: &[&str]) -> Vec<Participant> {
        names
            .iter()
            .map(|n| Participant::new(*n, format!("{}@example.com", n.to_lowercase())))
            .collect()
    }

    #[test]
    fn test_picks_only_admissible_receiver() {
        let roster = people(&["A", "B", "C"]);
        let constraints = ConstraintSet::new().with_couple(Couple::new("A", "B"));
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let mut pool: Vec<&Participant> = roster.iter().collect();
            let picked = select_receiver(&roster[0], &mut pool, &constraints, &mut rng);

            assert_eq!(picked.map(|p| p.name.as_str()), Some("C"));
            assert_eq!(pool.len(), 2);
            assert!(pool.iter().all(|p| p.name != "C"));
        }
    }

    #[test]
    fn test_none_leaves_pool_untouched() {
        let roster = people(&["A", "B", "C"]);
        let constraints = ConstraintSet::new().with_couple(Couple::new("A", "B"));
        let mut rng = StdRng::seed_from_u64(7);

        // Only A itself and its partner remain
        let mut pool: Vec<&Participant> = vec![&roster[0], &roster[1]];
        let before = pool.clone();

        let picked = select_receiver(&roster[0], &mut pool, &constraints, &mut rng);

        assert!(picked.is_none());
        assert_eq!(pool, before);
    }

    #[test]
    fn test_empty_pool_returns_none() {
        let roster = people(&["A"]);
        let constraints = ConstraintSet::new();
        let mut rng = StdRng::seed_from_u64(1);
        let mut pool: Vec<&Participant> = Vec::new();

        assert!(select_receiver(&roster[0], &mut pool, &constraints, &mut rng).is_none());
    }

    #[test]
    fn test_draws_every_admissible_candidate_eventually() {
        let roster = people(&["A", "B", "C", "D"]);
        let constraints = ConstraintSet::new();
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();

        for _ in 0..200 {
            let mut pool: Vec<&Participant> = roster.iter().collect();
            if let Some(p) = select_receiver(&roster[0], &mut pool, &constraints, &mut rng) {
                seen.insert(p.name.clone());
            }
        }

        let expected: std::collections::HashSet<String> =
            ["B", "C", "D"].iter().map(|s| s.to_string()).collect();
        assert_eq!(seen, expected);
    }
}
