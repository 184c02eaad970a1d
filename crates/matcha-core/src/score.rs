//! The scoring engine — similarity, preference matching, and the matrices
//! the demo is built to visualize.
//!
//! Naming follows the lecture material: U is the interest matrix (one 0/1
//! row per user), S = U·Uᵀ is the similarity matrix, A and P are the feature
//! and preference matrices, and M = A·Pᵀ is the match matrix. All functions
//! are pure; the caller owns the pool and the index → user mapping.

use serde::{Deserialize, Serialize};

use crate::{
  catalog::Catalog,
  user::User,
  vector::{dot, interest_vector, preference_vector},
};

// ─── Similarity ──────────────────────────────────────────────────────────────

/// One row of the per-subject multiplication worksheet shown in the UI.
/// Rows appear in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationStep {
  pub subject_id: String,
  pub a_value:    u8,
  pub b_value:    u8,
  pub product:    u8,
}

/// Detailed shared-interest similarity between two users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Similarity {
  /// Number of subjects both users are interested in.
  pub score:           u32,
  /// Ids of those shared subjects, in catalog order.
  pub common_subjects: Vec<String>,
  /// The full worksheet, one step per catalog subject.
  pub steps:           Vec<CalculationStep>,
}

/// Compute the shared-interest similarity of `a` and `b` in a single catalog
/// pass. Symmetric in `score` and `common_subjects`; only the worksheet's
/// value columns depend on argument order.
pub fn similarity(a: &User, b: &User, catalog: &Catalog) -> Similarity {
  let mut score = 0;
  let mut common_subjects = Vec::new();
  let mut steps = Vec::with_capacity(catalog.subjects.len());

  for subject in &catalog.subjects {
    let a_value = u8::from(a.interests.iter().any(|id| *id == subject.id));
    let b_value = u8::from(b.interests.iter().any(|id| *id == subject.id));
    let product = a_value * b_value;

    if product == 1 {
      score += 1;
      common_subjects.push(subject.id.clone());
    }
    steps.push(CalculationStep {
      subject_id: subject.id.clone(),
      a_value,
      b_value,
      product,
    });
  }

  Similarity { score, common_subjects, steps }
}

// ─── Preference scoring ──────────────────────────────────────────────────────

/// How well `features_of`'s interests satisfy `preferences_of`'s stated
/// preferences. Asymmetric: swapping the arguments asks a different question.
pub fn match_score(
  features_of: &User,
  preferences_of: &User,
  catalog: &Catalog,
) -> u32 {
  dot(
    &interest_vector(features_of, catalog),
    &preference_vector(preferences_of, catalog),
  )
}

/// Both directions of the preference score plus their mean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bidirectional {
  pub a_to_b: u32,
  pub b_to_a: u32,
  pub mutual: f64,
}

/// `a_to_b` = how well a's features satisfy b's preferences, and vice versa.
pub fn bidirectional_match(
  a: &User,
  b: &User,
  catalog: &Catalog,
) -> Bidirectional {
  let a_to_b = match_score(a, b, catalog);
  let b_to_a = match_score(b, a, catalog);
  Bidirectional {
    a_to_b,
    b_to_a,
    mutual: f64::from(a_to_b + b_to_a) / 2.0,
  }
}

// ─── Matrices ────────────────────────────────────────────────────────────────

/// S = U·Uᵀ over the pool, with one deliberate display convention: the
/// diagonal holds the user's own interest count rather than the (numerically
/// identical) self dot-product. Row/column order follows `users`; the caller
/// keeps the index → user mapping.
pub fn similarity_matrix(users: &[User], catalog: &Catalog) -> Vec<Vec<u32>> {
  let vectors: Vec<Vec<u8>> =
    users.iter().map(|u| interest_vector(u, catalog)).collect();

  users
    .iter()
    .enumerate()
    .map(|(i, user)| {
      (0..users.len())
        .map(|j| {
          if i == j {
            user.interests.len() as u32
          } else {
            dot(&vectors[i], &vectors[j])
          }
        })
        .collect()
    })
    .collect()
}

/// The feature matrix A, preference matrix P, and match matrix M = A·Pᵀ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matrices {
  /// `a[i]` = interest vector of `users[i]`.
  pub a: Vec<Vec<u8>>,
  /// `p[i]` = preference vector of `users[i]`.
  pub p: Vec<Vec<u8>>,
  /// `m[i][j]` = how well user i's features satisfy user j's preferences.
  pub m: Vec<Vec<u32>>,
}

/// Build A, P, and M for the pool. The diagonal of M is computed like any
/// other entry (self features against self preferences); suppressing it is a
/// rendering decision, not a scoring one.
pub fn feature_preference_matrices(
  users: &[User],
  catalog: &Catalog,
) -> Matrices {
  let a: Vec<Vec<u8>> =
    users.iter().map(|u| interest_vector(u, catalog)).collect();
  let p: Vec<Vec<u8>> =
    users.iter().map(|u| preference_vector(u, catalog)).collect();

  let m = a
    .iter()
    .map(|row| p.iter().map(|col| dot(row, col)).collect())
    .collect();

  Matrices { a, p, m }
}

// ─── Ranking ─────────────────────────────────────────────────────────────────

/// A candidate paired with their similarity to the current user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedMatch {
  pub user:       User,
  pub similarity: Similarity,
}

/// Rank the pool against `current` by shared-interest similarity, best
/// first. `current` is excluded by id. The sort is stable: candidates with
/// equal scores keep their pool order, which decides who is shown next, so
/// stability is a correctness property here.
pub fn rank_by_similarity(
  current: &User,
  pool: &[User],
  catalog: &Catalog,
) -> Vec<RankedMatch> {
  let mut ranked: Vec<RankedMatch> = pool
    .iter()
    .filter(|u| u.id != current.id)
    .map(|u| RankedMatch {
      user:       u.clone(),
      similarity: similarity(current, u, catalog),
    })
    .collect();

  ranked.sort_by(|l, r| r.similarity.score.cmp(&l.similarity.score));
  ranked
}

/// A candidate paired with how well their features satisfy the current
/// user's preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferenceRank {
  pub user:        User,
  pub match_score: u32,
}

/// Rank the pool by `match_score(other, current)` — "how well does each
/// candidate satisfy what I am looking for" — best first, stable, self
/// excluded.
pub fn rank_by_preference(
  current: &User,
  pool: &[User],
  catalog: &Catalog,
) -> Vec<PreferenceRank> {
  let mut ranked: Vec<PreferenceRank> = pool
    .iter()
    .filter(|u| u.id != current.id)
    .map(|u| PreferenceRank {
      user:        u.clone(),
      match_score: match_score(u, current, catalog),
    })
    .collect();

  ranked.sort_by(|l, r| r.match_score.cmp(&l.match_score));
  ranked
}

#[cfg(test)]
mod tests {
  use chrono::Utc;

  use super::*;
  use crate::catalog::{Avatar, Subject};

  fn xyz_catalog() -> Catalog {
    Catalog {
      subjects: ["x", "y", "z"]
        .iter()
        .map(|id| Subject {
          id:    id.to_string(),
          name:  id.to_uppercase(),
          emoji: "⭐".into(),
        })
        .collect(),
      avatars:  vec![Avatar {
        id:    "a".into(),
        emoji: "👤".into(),
        label: "A".into(),
      }],
    }
  }

  fn user(id: &str, interests: &[&str], preferences: &[&str]) -> User {
    User {
      id:          id.into(),
      name:        id.to_uppercase(),
      avatar:      "a".into(),
      interests:   interests.iter().map(|s| s.to_string()).collect(),
      preferences: preferences.iter().map(|s| s.to_string()).collect(),
      created_at:  Utc::now(),
    }
  }

  // ── Similarity ────────────────────────────────────────────────────────────

  #[test]
  fn similarity_counts_shared_interests() {
    let catalog = xyz_catalog();
    let a = user("a", &["x", "y"], &[]);
    let b = user("b", &["y", "z"], &[]);

    let sim = similarity(&a, &b, &catalog);
    assert_eq!(sim.score, 1);
    assert_eq!(sim.common_subjects, vec!["y"]);
  }

  #[test]
  fn similarity_worksheet_covers_catalog_in_order() {
    let catalog = xyz_catalog();
    let a = user("a", &["x", "y"], &[]);
    let b = user("b", &["y", "z"], &[]);

    let sim = similarity(&a, &b, &catalog);
    let ids: Vec<&str> =
      sim.steps.iter().map(|s| s.subject_id.as_str()).collect();
    assert_eq!(ids, vec!["x", "y", "z"]);
    assert_eq!(sim.steps[0].a_value, 1);
    assert_eq!(sim.steps[0].b_value, 0);
    assert_eq!(sim.steps[0].product, 0);
    assert_eq!(sim.steps[1].product, 1);
  }

  #[test]
  fn similarity_score_is_symmetric() {
    let catalog = xyz_catalog();
    let a = user("a", &["x", "y"], &[]);
    let b = user("b", &["y", "z"], &[]);
    assert_eq!(
      similarity(&a, &b, &catalog).score,
      similarity(&b, &a, &catalog).score
    );
  }

  // ── Preference scoring ────────────────────────────────────────────────────

  #[test]
  fn match_score_is_asymmetric() {
    let catalog = xyz_catalog();
    // A has X, seeks Y. B has Y, seeks nothing.
    let a = user("a", &["x"], &["y"]);
    let b = user("b", &["y"], &[]);

    // B's feature Y satisfies A's preference Y.
    assert_eq!(match_score(&b, &a, &catalog), 1);
    // A's feature X satisfies nothing in B's empty preference set.
    assert_eq!(match_score(&a, &b, &catalog), 0);
  }

  #[test]
  fn bidirectional_match_averages_both_directions() {
    let catalog = xyz_catalog();
    let a = user("a", &["x"], &["y"]);
    let b = user("b", &["y"], &["x"]);

    let bi = bidirectional_match(&a, &b, &catalog);
    assert_eq!(bi.a_to_b, 1);
    assert_eq!(bi.b_to_a, 1);
    assert_eq!(bi.mutual, 1.0);

    let c = user("c", &["y"], &[]);
    let bi = bidirectional_match(&a, &c, &catalog);
    assert_eq!(bi.a_to_b, 0);
    assert_eq!(bi.b_to_a, 1);
    assert_eq!(bi.mutual, 0.5);
  }

  // ── Matrices ──────────────────────────────────────────────────────────────

  #[test]
  fn similarity_matrix_diagonal_is_interest_count() {
    let catalog = xyz_catalog();
    let pool = vec![
      user("a", &["x", "y"], &[]),
      user("b", &["y", "z"], &[]),
      user("c", &["z"], &[]),
    ];

    let s = similarity_matrix(&pool, &catalog);
    assert_eq!(s[0], vec![2, 1, 0]);
    assert_eq!(s[1], vec![1, 2, 1]);
    assert_eq!(s[2], vec![0, 1, 1]);
  }

  #[test]
  fn similarity_matrix_is_symmetric_off_diagonal() {
    let catalog = Catalog::demo();
    let pool = crate::user::demo_roster();
    let s = similarity_matrix(&pool, &catalog);

    for i in 0..pool.len() {
      for j in 0..pool.len() {
        if i != j {
          assert_eq!(s[i][j], s[j][i]);
        }
      }
    }
  }

  #[test]
  fn match_matrix_is_a_times_p_transposed() {
    let catalog = xyz_catalog();
    let pool = vec![user("a", &["x"], &["y"]), user("b", &["y"], &["x"])];

    let matrices = feature_preference_matrices(&pool, &catalog);
    assert_eq!(matrices.a, vec![vec![1, 0, 0], vec![0, 1, 0]]);
    assert_eq!(matrices.p, vec![vec![0, 1, 0], vec![1, 0, 0]]);
    // m[i][j] = a[i] · p[j]; diagonal computed normally.
    assert_eq!(matrices.m, vec![vec![0, 1], vec![1, 0]]);
  }

  #[test]
  fn match_matrix_diagonal_is_not_special_cased() {
    let catalog = xyz_catalog();
    // Self-compatible on Y: interested in it and seeking it.
    let pool = vec![user("a", &["y"], &["y"])];
    let matrices = feature_preference_matrices(&pool, &catalog);
    assert_eq!(matrices.m[0][0], 1);
  }

  // ── Ranking ───────────────────────────────────────────────────────────────

  #[test]
  fn rank_by_similarity_excludes_self_and_sorts_descending() {
    let catalog = xyz_catalog();
    let me = user("me", &["x", "y", "z"], &[]);
    let pool = vec![
      user("none", &[], &[]),
      me.clone(),
      user("two", &["x", "y"], &[]),
      user("one", &["z"], &[]),
    ];

    let ranked = rank_by_similarity(&me, &pool, &catalog);
    let ids: Vec<&str> =
      ranked.iter().map(|r| r.user.id.as_str()).collect();
    assert_eq!(ids, vec!["two", "one", "none"]);

    let scores: Vec<u32> =
      ranked.iter().map(|r| r.similarity.score).collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));
  }

  #[test]
  fn rank_by_similarity_ties_keep_pool_order() {
    let catalog = xyz_catalog();
    let me = user("me", &["x"], &[]);
    let pool = vec![
      user("first", &["x"], &[]),
      user("second", &["x", "y"], &[]),
      user("third", &["x", "z"], &[]),
    ];

    let ranked = rank_by_similarity(&me, &pool, &catalog);
    // second and third tie at 1; pool order between them must survive.
    let ids: Vec<&str> =
      ranked.iter().map(|r| r.user.id.as_str()).collect();
    assert_eq!(ids, vec!["first", "second", "third"]);
  }

  #[test]
  fn rank_by_similarity_empty_pool_yields_empty() {
    let catalog = xyz_catalog();
    let me = user("me", &["x"], &[]);
    assert!(rank_by_similarity(&me, &[me.clone()], &catalog).is_empty());
    assert!(rank_by_similarity(&me, &[], &catalog).is_empty());
  }

  #[test]
  fn rank_by_preference_uses_my_preferences() {
    let catalog = xyz_catalog();
    let me = user("me", &["z"], &["x", "y"]);
    let pool = vec![
      user("neither", &["z"], &["x"]),
      user("both", &["x", "y"], &[]),
      user("one", &["y"], &[]),
    ];

    let ranked = rank_by_preference(&me, &pool, &catalog);
    let ids: Vec<&str> =
      ranked.iter().map(|r| r.user.id.as_str()).collect();
    assert_eq!(ids, vec!["both", "one", "neither"]);
    assert_eq!(ranked[0].match_score, 2);
    assert_eq!(ranked[2].match_score, 0);
  }
}
