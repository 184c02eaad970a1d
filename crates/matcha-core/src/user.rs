//! User — a registered participant in the matching pool.
//!
//! Users are immutable after registration. The demo flow replaces a user
//! rather than editing one, so nothing here exposes mutation.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result, catalog::Catalog};

/// A participant: who they are, what they are interested in, and what they
/// seek in a partner. `interests` and `preferences` are order-irrelevant sets
/// of subject ids aligned to the catalog at scoring time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
  pub id:          String,
  pub name:        String,
  /// References an [`Avatar`](crate::catalog::Avatar) by id.
  pub avatar:      String,
  pub interests:   Vec<String>,
  /// Subjects sought in a partner. Absent during early registration; an
  /// empty vec means "no stated preferences".
  #[serde(default)]
  pub preferences: Vec<String>,
  pub created_at:  DateTime<Utc>,
}

impl User {
  /// Register a new user against `catalog`.
  ///
  /// The name must be non-empty after trimming and the avatar id must exist.
  /// Unknown subject ids in `interests`/`preferences` are silently dropped —
  /// stale data should degrade to "no such interest", not an error.
  pub fn register(
    name: &str,
    avatar: &str,
    interests: Vec<String>,
    preferences: Vec<String>,
    catalog: &Catalog,
  ) -> Result<Self> {
    let name = name.trim();
    if name.is_empty() {
      return Err(Error::EmptyName);
    }
    if catalog.avatar(avatar).is_none() {
      return Err(Error::UnknownAvatar(avatar.to_string()));
    }

    let keep_known =
      |ids: Vec<String>| -> Vec<String> {
        ids
          .into_iter()
          .filter(|id| catalog.subject(id).is_some())
          .collect()
      };

    Ok(Self {
      id:          format!("user-{}", Uuid::new_v4()),
      name:        name.to_string(),
      avatar:      avatar.to_string(),
      interests:   keep_known(interests),
      preferences: keep_known(preferences),
      created_at:  Utc::now(),
    })
  }
}

// ─── Demo roster ─────────────────────────────────────────────────────────────

/// The fixed six-user demo pool. Ids are stable slugs so the guaranteed
/// mock-swipe match (roster index 2) is reproducible across runs.
pub fn demo_roster() -> Vec<User> {
  fn member(
    id: &str,
    name: &str,
    avatar: &str,
    interests: &[&str],
    preferences: &[&str],
    days_ago: i64,
  ) -> User {
    User {
      id:          id.into(),
      name:        name.into(),
      avatar:      avatar.into(),
      interests:   interests.iter().map(|s| s.to_string()).collect(),
      preferences: preferences.iter().map(|s| s.to_string()).collect(),
      created_at:  Utc::now() - Duration::days(days_ago),
    }
  }

  vec![
    member(
      "demo-ania",
      "Ania",
      "woman-1",
      &["math", "intro-psych", "english", "psych-tech"],
      &["intro-cs", "tech-debates", "math"],
      5,
    ),
    member(
      "demo-andrzej",
      "Andrzej",
      "man-1",
      &["intro-cs", "math", "tech-debates"],
      &["intro-psych", "psych-tech", "intro-social-psych"],
      4,
    ),
    member(
      "demo-maja",
      "Maja",
      "woman-2",
      &["intro-psych", "intro-social-psych", "study-skills"],
      &["english", "study-skills", "intro-psych"],
      3,
    ),
    member(
      "demo-tomek",
      "Tomek",
      "man-2",
      &["intro-cs", "tech-debates", "math", "english"],
      &["psych-tech", "intro-social-psych", "tech-debates"],
      2,
    ),
    member(
      "demo-monika",
      "Monika",
      "woman-3",
      &["psych-tech", "intro-social-psych", "study-skills"],
      &["math", "intro-cs", "english"],
      1,
    ),
    member(
      "demo-michal",
      "Michał",
      "man-3",
      &["math", "intro-cs", "english", "tech-debates", "psych-tech"],
      &["intro-psych", "intro-social-psych", "study-skills"],
      0,
    ),
  ]
}
