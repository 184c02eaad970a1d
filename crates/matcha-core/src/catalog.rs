//! The subject and avatar catalogs — static reference data.
//!
//! Catalog order is load-bearing: the position of a subject in
//! `Catalog::subjects` is its index in every interest/preference vector, and
//! therefore its row/column in every matrix. All scoring calls within a
//! session must receive the same catalog value; reordering it invalidates
//! previously computed matrices.

use serde::{Deserialize, Serialize};

// ─── Entries ─────────────────────────────────────────────────────────────────

/// A study subject a user can be interested in (or seek in a partner).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
  pub id:    String,
  pub name:  String,
  pub emoji: String,
}

/// A selectable profile avatar. Lives in its own id namespace, independent of
/// subjects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Avatar {
  pub id:    String,
  /// Shown when no image asset is available for the avatar.
  pub emoji: String,
  pub label: String,
}

// ─── Catalog ─────────────────────────────────────────────────────────────────

/// Immutable reference data, injected into the scoring engine rather than
/// held as a global, so tests can run against synthetic catalogs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
  pub subjects: Vec<Subject>,
  pub avatars:  Vec<Avatar>,
}

impl Catalog {
  /// The reference demo data: eight first-year subjects and six avatars.
  pub fn demo() -> Self {
    fn subject(id: &str, name: &str, emoji: &str) -> Subject {
      Subject {
        id:    id.into(),
        name:  name.into(),
        emoji: emoji.into(),
      }
    }
    fn avatar(id: &str, emoji: &str, label: &str) -> Avatar {
      Avatar {
        id:    id.into(),
        emoji: emoji.into(),
        label: label.into(),
      }
    }

    Self {
      subjects: vec![
        subject("tech-debates", "Current debates in technology", "💬"),
        subject("english", "English language", "🇬🇧"),
        subject("math", "Mathematics", "📐"),
        subject("psych-tech", "Psychology and technology", "🧠"),
        subject("study-skills", "Academic study skills", "📚"),
        subject("intro-cs", "Introduction to computer science", "💻"),
        subject("intro-psych", "Introduction to psychology", "🔮"),
        subject("intro-social-psych", "Introduction to social psychology", "👥"),
      ],
      avatars:  vec![
        avatar("woman-1", "👩", "Woman 1"),
        avatar("woman-2", "👩‍🦰", "Woman 2"),
        avatar("woman-3", "👱‍♀️", "Woman 3"),
        avatar("man-1", "👨", "Man 1"),
        avatar("man-2", "👨‍🦱", "Man 2"),
        avatar("man-3", "🧔", "Man 3"),
      ],
    }
  }

  // ── Lookups ───────────────────────────────────────────────────────────────

  /// Find a subject by id.
  pub fn subject(&self, id: &str) -> Option<&Subject> {
    self.subjects.iter().find(|s| s.id == id)
  }

  /// Find an avatar by id.
  pub fn avatar(&self, id: &str) -> Option<&Avatar> {
    self.avatars.iter().find(|a| a.id == id)
  }

  /// Display names for a list of subject ids. Unknown ids are skipped, not
  /// errors — stale or hand-edited data must not break rendering.
  pub fn subject_names<'a>(
    &'a self,
    ids: impl IntoIterator<Item = &'a str>,
  ) -> Vec<&'a str> {
    ids
      .into_iter()
      .filter_map(|id| self.subject(id).map(|s| s.name.as_str()))
      .collect()
  }

  /// Emoji for an avatar id, falling back to a generic silhouette.
  pub fn avatar_emoji(&self, id: &str) -> &str {
    self.avatar(id).map(|a| a.emoji.as_str()).unwrap_or("👤")
  }
}
