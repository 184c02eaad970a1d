//! The swipe engine — directed judgments and mutual-match detection.
//!
//! Swipes are immutable once created and the collection is append-only.
//! Matches are never stored: they are recomputed from the swipe collection
//! on demand, which is cheap at demo scale.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

// ─── Types ───────────────────────────────────────────────────────────────────

/// A one-time, one-directional judgment of one user by another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Swipe {
  /// Who swiped.
  pub visitor_id: String,
  /// Who was swiped on.
  pub target_id:  String,
  pub liked:      bool,
  pub timestamp:  DateTime<Utc>,
}

impl Swipe {
  /// Create a swipe stamped with the current time.
  pub fn new(visitor_id: &str, target_id: &str, liked: bool) -> Self {
    Self {
      visitor_id: visitor_id.to_string(),
      target_id:  target_id.to_string(),
      liked,
      timestamp:  Utc::now(),
    }
  }
}

/// A pair of users with reciprocal liked swipes. Derived, never primary
/// state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
  pub user_a:     String,
  pub user_b:     String,
  pub matched_at: DateTime<Utc>,
}

// ─── Queries ─────────────────────────────────────────────────────────────────

/// The first swipe from `from` to `to`, if any. Sessions are not expected to
/// hold duplicates for an ordered pair, but if they do, the first one found
/// wins; duplicates are deliberately not deduplicated.
pub fn find_swipe<'a>(
  swipes: &'a [Swipe],
  from: &str,
  to: &str,
) -> Option<&'a Swipe> {
  swipes
    .iter()
    .find(|s| s.visitor_id == from && s.target_id == to)
}

/// True iff a liked swipe exists in each direction between `a` and `b`.
/// Symmetric by construction. With duplicate swipes, any `liked = true`
/// entry for a direction satisfies that direction.
pub fn is_match(swipes: &[Swipe], a: &str, b: &str) -> bool {
  let liked = |from: &str, to: &str| {
    swipes
      .iter()
      .any(|s| s.visitor_id == from && s.target_id == to && s.liked)
  };
  liked(a, b) && liked(b, a)
}

/// Build the derived [`Match`] for `a` and `b` if their swipes are mutual,
/// stamped at detection time.
pub fn mutual_match(swipes: &[Swipe], a: &str, b: &str) -> Option<Match> {
  is_match(swipes, a, b).then(|| Match {
    user_a:     a.to_string(),
    user_b:     b.to_string(),
    matched_at: Utc::now(),
  })
}

// ─── Mock generation ─────────────────────────────────────────────────────────

/// The roster position whose mock swipe is always a like.
pub const GUARANTEED_LIKE_INDEX: usize = 2;

/// Generate one incoming swipe per visitor, all directed at `target_id`.
///
/// The visitor at `guaranteed_index` always likes the target regardless of
/// the RNG, so the demo can always produce at least one mutual match; every
/// other visitor flips a fair coin. Timestamps are back-dated a random
/// amount within the past 24 hours for display variety only.
pub fn generate_mock_swipes<I, S, R>(
  rng: &mut R,
  visitor_ids: I,
  target_id: &str,
  guaranteed_index: usize,
) -> Vec<Swipe>
where
  I: IntoIterator<Item = S>,
  S: AsRef<str>,
  R: Rng,
{
  visitor_ids
    .into_iter()
    .enumerate()
    .map(|(index, visitor_id)| {
      let liked = index == guaranteed_index || rng.gen_bool(0.5);
      let backdate = Duration::seconds(rng.gen_range(0..86_400));
      Swipe {
        visitor_id: visitor_id.as_ref().to_string(),
        target_id:  target_id.to_string(),
        liked,
        timestamp:  Utc::now() - backdate,
      }
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use rand::{SeedableRng, rngs::StdRng};

  use super::*;

  #[test]
  fn find_swipe_matches_direction() {
    let swipes = vec![Swipe::new("a", "b", true), Swipe::new("b", "a", false)];

    assert!(find_swipe(&swipes, "a", "b").unwrap().liked);
    assert!(!find_swipe(&swipes, "b", "a").unwrap().liked);
    assert!(find_swipe(&swipes, "a", "c").is_none());
  }

  #[test]
  fn is_match_requires_both_directions() {
    let mut swipes = vec![Swipe::new("a", "b", true)];
    assert!(!is_match(&swipes, "a", "b"));

    swipes.push(Swipe::new("b", "a", false));
    assert!(!is_match(&swipes, "a", "b"));

    swipes.push(Swipe::new("b", "a", true));
    assert!(is_match(&swipes, "a", "b"));
  }

  #[test]
  fn is_match_is_symmetric() {
    let swipes = vec![Swipe::new("a", "b", true), Swipe::new("b", "a", true)];
    assert_eq!(is_match(&swipes, "a", "b"), is_match(&swipes, "b", "a"));

    let one_sided = vec![Swipe::new("a", "b", true)];
    assert_eq!(
      is_match(&one_sided, "a", "b"),
      is_match(&one_sided, "b", "a")
    );
  }

  #[test]
  fn duplicate_swipes_any_like_counts() {
    // Permissive duplicate handling: a later dislike does not cancel an
    // earlier like.
    let swipes = vec![
      Swipe::new("a", "b", true),
      Swipe::new("a", "b", false),
      Swipe::new("b", "a", true),
    ];
    assert!(is_match(&swipes, "a", "b"));
  }

  #[test]
  fn mutual_match_pairs_ids() {
    let swipes = vec![Swipe::new("a", "b", true), Swipe::new("b", "a", true)];
    let m = mutual_match(&swipes, "a", "b").unwrap();
    assert_eq!(m.user_a, "a");
    assert_eq!(m.user_b, "b");

    assert!(mutual_match(&swipes, "a", "c").is_none());
  }

  #[test]
  fn mock_swipes_cover_all_visitors() {
    let mut rng = StdRng::seed_from_u64(7);
    let swipes =
      generate_mock_swipes(&mut rng, ["u1", "u2", "u3", "u4"], "me", 2);

    assert_eq!(swipes.len(), 4);
    assert!(swipes.iter().all(|s| s.target_id == "me"));
    let visitors: Vec<&str> =
      swipes.iter().map(|s| s.visitor_id.as_str()).collect();
    assert_eq!(visitors, vec!["u1", "u2", "u3", "u4"]);
  }

  #[test]
  fn guaranteed_index_always_likes() {
    // The guarantee must hold for every seed, not just a lucky one.
    for seed in 0..64 {
      let mut rng = StdRng::seed_from_u64(seed);
      let swipes =
        generate_mock_swipes(&mut rng, ["u1", "u2", "u3"], "me", 2);
      assert!(swipes[2].liked, "seed {seed}");
    }
  }

  #[test]
  fn guaranteed_like_completes_a_match() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut swipes =
      generate_mock_swipes(&mut rng, ["u1", "u2", "u3"], "me", 2);

    swipes.push(Swipe::new("me", "u3", true));
    assert!(is_match(&swipes, "me", "u3"));
  }

  #[test]
  fn non_guaranteed_likes_vary_with_seed() {
    // Statistical sanity check on the coin flips. With 64 seeds and three
    // free slots each, all-likes or all-dislikes would mean the RNG is not
    // actually consulted.
    let mut likes = 0usize;
    let mut total = 0usize;
    for seed in 0..64 {
      let mut rng = StdRng::seed_from_u64(seed);
      let swipes =
        generate_mock_swipes(&mut rng, ["u1", "u2", "u3", "u4"], "me", 3);
      likes += swipes[..3].iter().filter(|s| s.liked).count();
      total += 3;
    }
    assert!(likes > 0 && likes < total);
  }

  #[test]
  fn mock_timestamps_are_backdated_within_a_day() {
    let mut rng = StdRng::seed_from_u64(1);
    let before = Utc::now();
    let swipes = generate_mock_swipes(&mut rng, ["u1", "u2"], "me", 0);

    for swipe in &swipes {
      assert!(swipe.timestamp <= before + Duration::seconds(1));
      assert!(swipe.timestamp >= before - Duration::days(1));
    }
  }
}
