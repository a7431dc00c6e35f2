//! Matchup scheduling.
//!
//! All-vs-all plans every unordered pair up front and orders them so that
//! consecutive rounds avoid sharing a debater. Quick mode picks each pair on
//! the fly, only steering away from the pair that just debated.

use super::QUICK_MIN_PLAYERS;
use crate::rng::GameRng;
use crate::types::*;

/// Every unordered pair of players, in roster order
pub fn all_pairs(player_ids: &[PlayerId]) -> Vec<Matchup> {
    let mut pairs = Vec::with_capacity(player_ids.len() * player_ids.len().saturating_sub(1) / 2);
    for (i, defender) in player_ids.iter().enumerate() {
        for opponent in &player_ids[i + 1..] {
            pairs.push(Matchup::new(defender.clone(), opponent.clone()));
        }
    }
    pairs
}

/// Flip a coin per matchup for who defends, so roster order doesn't decide
/// the sides
pub fn randomize_sides(matchups: &mut [Matchup], rng: &mut GameRng) {
    for matchup in matchups {
        if rng.coin_flip() {
            matchup.swap_sides();
        }
    }
}

/// Reorder matchups so no two neighbours share a player where possible.
///
/// Each step picks uniformly among the remaining matchups disjoint from the
/// previous pick. When none is left, it picks uniformly from everything
/// remaining.
pub fn shuffle_avoiding_back_to_back(matchups: Vec<Matchup>, rng: &mut GameRng) -> Vec<Matchup> {
    let mut pool = matchups;
    let mut result: Vec<Matchup> = Vec::with_capacity(pool.len());

    while !pool.is_empty() {
        let mut candidates: Vec<usize> = match result.last() {
            Some(last) => pool
                .iter()
                .enumerate()
                .filter(|(_, m)| !m.shares_player(last))
                .map(|(i, _)| i)
                .collect(),
            None => Vec::new(),
        };
        if candidates.is_empty() {
            candidates = (0..pool.len()).collect();
        }

        let pick = candidates[rng.index(candidates.len())];
        result.push(pool.remove(pick));
    }

    result
}

/// Quick mode needs enough players to rotate; below that it plays all-vs-all
pub fn effective_mode(mode: GameMode, player_count: usize) -> GameMode {
    match mode {
        GameMode::Quick if player_count < QUICK_MIN_PLAYERS => GameMode::AllVsAll,
        other => other,
    }
}

/// Number of rounds a game with this many players will last.
/// Saturates at `u32::MAX` for absurd rosters.
pub fn planned_rounds(mode: GameMode, player_count: usize) -> u32 {
    let n = u64::try_from(player_count).unwrap_or(u64::MAX);
    let rounds = match mode {
        GameMode::AllVsAll => n.saturating_mul(n.saturating_sub(1)) / 2,
        GameMode::Quick => n.div_ceil(2),
    };
    u32::try_from(rounds).unwrap_or(u32::MAX)
}

/// Pick the next quick-mode pair.
///
/// With three or more players the previous pair sits out, unless that leaves
/// fewer than two candidates. The remaining candidates are shuffled and the
/// first two become defender and opponent. Returns `None` with fewer than two
/// players.
pub fn pick_quick_pair(
    roster: &[PlayerId],
    last_pair: Option<&Matchup>,
    rng: &mut GameRng,
) -> Option<Matchup> {
    if roster.len() < 2 {
        return None;
    }

    let mut candidates: Vec<&PlayerId> = roster.iter().collect();
    if let Some(last) = last_pair {
        if roster.len() >= 3 {
            let rested: Vec<&PlayerId> = roster.iter().filter(|id| !last.involves(id)).collect();
            if rested.len() >= 2 {
                candidates = rested;
            }
        }
    }

    rng.shuffle(&mut candidates);
    Some(Matchup::new(candidates[0].clone(), candidates[1].clone()))
}

/// Everyone except the two debaters, in roster order
pub fn judges_for(roster: &[PlayerId], matchup: &Matchup) -> Vec<PlayerId> {
    roster
        .iter()
        .filter(|id| !matchup.involves(id))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn ids(n: usize) -> Vec<PlayerId> {
        (0..n).map(|i| format!("p{}", i)).collect()
    }

    fn pair_key(m: &Matchup) -> (String, String) {
        if m.defender_id < m.opponent_id {
            (m.defender_id.clone(), m.opponent_id.clone())
        } else {
            (m.opponent_id.clone(), m.defender_id.clone())
        }
    }

    #[test]
    fn test_all_pairs_count_and_uniqueness() {
        for n in 3..=9 {
            let pairs = all_pairs(&ids(n));
            assert_eq!(pairs.len(), n * (n - 1) / 2);

            let unique: HashSet<_> = pairs.iter().map(pair_key).collect();
            assert_eq!(unique.len(), pairs.len());
            assert!(pairs.iter().all(|m| m.defender_id != m.opponent_id));
        }
    }

    #[test]
    fn test_randomize_sides_spreads_roles() {
        let (mut defends, mut opposes) = (0, 0);
        for seed in 0..10 {
            let mut pairs = all_pairs(&ids(8));
            let before: HashSet<_> = pairs.iter().map(pair_key).collect();

            randomize_sides(&mut pairs, &mut GameRng::new(seed));

            let after: HashSet<_> = pairs.iter().map(pair_key).collect();
            assert_eq!(after, before);
            defends += pairs.iter().filter(|m| m.defender_id == "p0").count();
            opposes += pairs.iter().filter(|m| m.opponent_id == "p0").count();
        }
        // p0 is first in roster order, yet takes both sides
        assert_eq!(defends + opposes, 70);
        assert!(defends > 10 && opposes > 10);
    }

    #[test]
    fn test_randomize_sides_is_deterministic_for_seed() {
        let mut a = all_pairs(&ids(6));
        let mut b = all_pairs(&ids(6));
        randomize_sides(&mut a, &mut GameRng::new(4));
        randomize_sides(&mut b, &mut GameRng::new(4));
        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_keeps_every_pair_once() {
        let mut rng = GameRng::new(5);
        for n in 3..=8 {
            let pairs = all_pairs(&ids(n));
            let expected: HashSet<_> = pairs.iter().map(pair_key).collect();

            let shuffled = shuffle_avoiding_back_to_back(pairs, &mut rng);
            let got: HashSet<_> = shuffled.iter().map(pair_key).collect();

            assert_eq!(shuffled.len(), n * (n - 1) / 2);
            assert_eq!(got, expected);
        }
    }

    /// A neighbour may share a player only if, at that point, nothing
    /// disjoint from the previous pick was still available.
    fn assert_overlaps_were_forced(order: &[Matchup]) {
        for i in 1..order.len() {
            if order[i].shares_player(&order[i - 1]) {
                let remaining = &order[i..];
                assert!(
                    remaining.iter().all(|m| m.shares_player(&order[i - 1])),
                    "overlap at {} was avoidable",
                    i
                );
            }
        }
    }

    #[test]
    fn test_shuffle_avoids_back_to_back_when_possible() {
        for seed in 0..50 {
            let mut rng = GameRng::new(seed);
            for n in 4..=7 {
                let order = shuffle_avoiding_back_to_back(all_pairs(&ids(n)), &mut rng);
                assert_overlaps_were_forced(&order);
            }
        }
    }

    #[test]
    fn test_three_players_overlap_is_unavoidable() {
        // Every pair among three players shares someone with every other pair
        let mut rng = GameRng::new(1);
        let order = shuffle_avoiding_back_to_back(all_pairs(&ids(3)), &mut rng);

        assert_eq!(order.len(), 3);
        assert!(order[1].shares_player(&order[0]));
        assert!(order[2].shares_player(&order[1]));
        assert_overlaps_were_forced(&order);
    }

    #[test]
    fn test_shuffle_is_deterministic_for_seed() {
        let a = shuffle_avoiding_back_to_back(all_pairs(&ids(6)), &mut GameRng::new(77));
        let b = shuffle_avoiding_back_to_back(all_pairs(&ids(6)), &mut GameRng::new(77));
        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_empty_pool() {
        let order = shuffle_avoiding_back_to_back(Vec::new(), &mut GameRng::new(0));
        assert!(order.is_empty());
    }

    #[test]
    fn test_planned_rounds() {
        assert_eq!(planned_rounds(GameMode::AllVsAll, 3), 3);
        assert_eq!(planned_rounds(GameMode::AllVsAll, 5), 10);
        assert_eq!(planned_rounds(GameMode::Quick, 4), 2);
        assert_eq!(planned_rounds(GameMode::Quick, 5), 3);
        assert_eq!(planned_rounds(GameMode::Quick, 8), 4);
        assert_eq!(planned_rounds(GameMode::AllVsAll, 0), 0);
    }

    #[test]
    fn test_planned_rounds_saturate() {
        assert_eq!(planned_rounds(GameMode::AllVsAll, 100_000), u32::MAX);
        assert_eq!(planned_rounds(GameMode::AllVsAll, usize::MAX), u32::MAX);
        assert_eq!(planned_rounds(GameMode::Quick, 100_000), 50_000);
        // Largest roster that still fits exactly
        assert_eq!(planned_rounds(GameMode::AllVsAll, 92_681), 4_294_837_540);
    }

    #[test]
    fn test_effective_mode() {
        assert_eq!(effective_mode(GameMode::Quick, 3), GameMode::AllVsAll);
        assert_eq!(effective_mode(GameMode::Quick, 4), GameMode::Quick);
        assert_eq!(effective_mode(GameMode::AllVsAll, 10), GameMode::AllVsAll);
    }

    #[test]
    fn test_quick_pair_is_two_distinct_roster_members() {
        let roster = ids(6);
        let mut rng = GameRng::new(8);
        for _ in 0..30 {
            let m = pick_quick_pair(&roster, None, &mut rng).unwrap();
            assert_ne!(m.defender_id, m.opponent_id);
            assert!(roster.contains(&m.defender_id));
            assert!(roster.contains(&m.opponent_id));
        }
    }

    #[test]
    fn test_quick_pair_rests_previous_pair() {
        let roster = ids(4);
        let mut rng = GameRng::new(21);
        let mut last = pick_quick_pair(&roster, None, &mut rng).unwrap();
        for _ in 0..30 {
            let next = pick_quick_pair(&roster, Some(&last), &mut rng).unwrap();
            assert!(!next.shares_player(&last));
            last = next;
        }
    }

    #[test]
    fn test_quick_pair_falls_back_to_full_roster() {
        // With three players resting two leaves one candidate
        let roster = ids(3);
        let last = Matchup::new("p0".into(), "p1".into());
        let mut rng = GameRng::new(2);
        for _ in 0..20 {
            let m = pick_quick_pair(&roster, Some(&last), &mut rng).unwrap();
            assert_ne!(m.defender_id, m.opponent_id);
        }
    }

    #[test]
    fn test_quick_pair_needs_two_players() {
        let mut rng = GameRng::new(0);
        assert!(pick_quick_pair(&ids(1), None, &mut rng).is_none());
        assert!(pick_quick_pair(&[], None, &mut rng).is_none());
    }

    #[test]
    fn test_judges_are_everyone_else_in_order() {
        let roster = ids(5);
        let m = Matchup::new("p3".into(), "p1".into());
        assert_eq!(judges_for(&roster, &m), vec!["p0", "p2", "p4"]);
    }
}
