//! Binary subject vectors — the bridge between users and matrices.
//!
//! A vector has one slot per catalog subject, in catalog order, holding 1 if
//! the corresponding id is present in the user's set. All matrix math in
//! [`crate::score`] is built on these.

use crate::{catalog::Catalog, user::User};

/// Build a 0/1 vector of length `catalog.subjects.len()` from a set of
/// subject ids. Ids that match no catalog entry are ignored; they never grow
/// the vector.
pub fn subject_vector<S: AsRef<str>>(ids: &[S], catalog: &Catalog) -> Vec<u8> {
  catalog
    .subjects
    .iter()
    .map(|subject| {
      u8::from(ids.iter().any(|id| id.as_ref() == subject.id))
    })
    .collect()
}

/// The user's feature vector: what they have.
pub fn interest_vector(user: &User, catalog: &Catalog) -> Vec<u8> {
  subject_vector(&user.interests, catalog)
}

/// The user's preference vector: what they seek. All zeros when the user
/// stated no preferences.
pub fn preference_vector(user: &User, catalog: &Catalog) -> Vec<u8> {
  subject_vector(&user.preferences, catalog)
}

/// Dot product of two equal-length 0/1 vectors.
///
/// Both operands are always derived from the same catalog, so a length
/// mismatch means catalog/vector misalignment. That is a programming error,
/// and silent truncation would corrupt every downstream score, so it panics.
pub fn dot(a: &[u8], b: &[u8]) -> u32 {
  assert_eq!(
    a.len(),
    b.len(),
    "dot product over vectors from different catalogs"
  );
  a.iter()
    .zip(b)
    .map(|(&x, &y)| u32::from(x) * u32::from(y))
    .sum()
}

#[cfg(test)]
mod tests {
  use chrono::Utc;

  use super::*;
  use crate::catalog::{Avatar, Subject};

  fn tiny_catalog() -> Catalog {
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

  #[test]
  fn vector_length_matches_catalog() {
    let catalog = tiny_catalog();
    let ids: Vec<String> = vec!["x".into()];
    assert_eq!(subject_vector(&ids, &catalog).len(), 3);
    assert_eq!(subject_vector::<String>(&[], &catalog).len(), 3);

    let demo = Catalog::demo();
    assert_eq!(subject_vector(&ids, &demo).len(), demo.subjects.len());
  }

  #[test]
  fn vector_follows_catalog_order() {
    let catalog = tiny_catalog();
    let ids: Vec<String> = vec!["z".into(), "x".into()];
    assert_eq!(subject_vector(&ids, &catalog), vec![1, 0, 1]);
  }

  #[test]
  fn unknown_ids_are_ignored() {
    let catalog = tiny_catalog();
    let ids: Vec<String> = vec!["x".into(), "quux".into()];
    assert_eq!(subject_vector(&ids, &catalog), vec![1, 0, 0]);
  }

  #[test]
  fn interest_and_preference_vectors() {
    let catalog = tiny_catalog();
    let u = user("u1", &["x", "y"], &["z"]);
    assert_eq!(interest_vector(&u, &catalog), vec![1, 1, 0]);
    assert_eq!(preference_vector(&u, &catalog), vec![0, 0, 1]);

    let bare = user("u2", &["y"], &[]);
    assert_eq!(preference_vector(&bare, &catalog), vec![0, 0, 0]);
  }

  #[test]
  fn dot_product_is_symmetric() {
    let a = [1, 0, 1, 1];
    let b = [1, 1, 0, 1];
    assert_eq!(dot(&a, &b), 2);
    assert_eq!(dot(&a, &b), dot(&b, &a));
  }

  #[test]
  #[should_panic(expected = "different catalogs")]
  fn dot_product_length_mismatch_panics() {
    dot(&[1, 0], &[1, 0, 1]);
  }
}
