//! Application state machine and event dispatcher.
//!
//! The flow mirrors the demo script: register → welcome → preferences →
//! swiping → finished. All scoring is delegated to `matcha-core`; this module
//! owns the only mutable session state (the current user and the swipe
//! collection) and mirrors both into the snapshot store on every change.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use matcha_core::{
  catalog::Catalog,
  score::{self, RankedMatch},
  swipe::{self, GUARANTEED_LIKE_INDEX, Match, Swipe},
  user::User,
};
use matcha_store::SnapshotStore;
use rand::rngs::StdRng;

/// Snapshot key holding the full user pool (roster + registered user).
pub const USERS_KEY: &str = "users";
/// Snapshot key holding the session's swipe collection.
pub const SWIPES_KEY: &str = "swipes";

// ─── Screen ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
  /// Registration form: name, avatar, interests.
  Register,
  /// Greets the new user and shows the similarity ranking worksheet.
  Welcome,
  /// Optional partner-preference picker.
  Preferences,
  /// One candidate at a time, like or pass.
  Swiping,
  /// No unswiped candidates remain.
  Finished,
}

/// Which part of the registration form has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterField {
  Name,
  Avatar,
  Interests,
}

// ─── App ──────────────────────────────────────────────────────────────────────

/// Top-level application state.
pub struct App {
  pub catalog: Catalog,
  /// The fixed demo pool. The registered user is appended last when the
  /// full pool is assembled.
  pub roster:  Vec<User>,
  pub store:   SnapshotStore,
  pub screen:  Screen,

  // ── Registration form ──────────────────────────────────────────────────
  pub field:              RegisterField,
  pub name_input:         String,
  pub avatar_cursor:      usize,
  pub interest_cursor:    usize,
  /// One flag per catalog subject, in catalog order.
  pub selected_interests: Vec<bool>,

  // ── Preference picker ──────────────────────────────────────────────────
  pub preference_cursor:    usize,
  pub selected_preferences: Vec<bool>,

  // ── Session ────────────────────────────────────────────────────────────
  pub current_user:  Option<User>,
  pub swipes:        Vec<Swipe>,
  /// Ranking frozen when swiping starts; order decides who is shown next.
  pub candidates:    Vec<RankedMatch>,
  /// Index into `candidates` of the next unswiped candidate.
  pub cursor:        usize,
  /// A freshly detected mutual match, shown as a dismissible modal.
  pub pending_match: Option<Match>,
  pub likes:         usize,
  pub passes:        usize,
  pub matches_seen:  usize,

  /// One-line status message shown in the status bar.
  pub status_msg: String,

  rng: StdRng,
}

impl App {
  /// Create the app, restoring a saved session if one exists.
  pub fn new(
    catalog: Catalog,
    roster: Vec<User>,
    store: SnapshotStore,
    rng: StdRng,
  ) -> Self {
    let subject_count = catalog.subjects.len();
    let mut app = Self {
      catalog,
      roster,
      store,
      screen: Screen::Register,
      field: RegisterField::Name,
      name_input: String::new(),
      avatar_cursor: 0,
      interest_cursor: 0,
      selected_interests: vec![false; subject_count],
      preference_cursor: 0,
      selected_preferences: vec![false; subject_count],
      current_user: None,
      swipes: Vec::new(),
      candidates: Vec::new(),
      cursor: 0,
      pending_match: None,
      likes: 0,
      passes: 0,
      matches_seen: 0,
      status_msg: String::new(),
      rng,
    };
    app.restore_session();
    app
  }

  /// Pick up a previously saved user and swipes, short-circuiting straight
  /// to the welcome screen.
  fn restore_session(&mut self) {
    let users: Vec<User> = self.store.get(USERS_KEY, Vec::new());
    let saved = users
      .into_iter()
      .find(|u| !self.roster.iter().any(|r| r.id == u.id));

    if let Some(user) = saved {
      self.status_msg = format!("Welcome back, {}!", user.name);
      for (i, flag) in self.selected_preferences.iter_mut().enumerate() {
        *flag = user
          .preferences
          .iter()
          .any(|id| *id == self.catalog.subjects[i].id);
      }
      self.current_user = Some(user);
      self.swipes = self.store.get(SWIPES_KEY, Vec::new());
      self.screen = Screen::Welcome;
    }
  }

  // ── Pool assembly ─────────────────────────────────────────────────────────

  /// Roster plus the registered user, registered user always last.
  pub fn pool(&self) -> Vec<User> {
    let mut pool = self.roster.clone();
    if let Some(user) = &self.current_user {
      pool.push(user.clone());
    }
    pool
  }

  /// The candidate currently offered for a decision.
  pub fn current_candidate(&self) -> Option<&RankedMatch> {
    self.candidates.get(self.cursor)
  }

  // ── Key handling ──────────────────────────────────────────────────────────

  /// Process a key event. Returns `true` to continue, `false` to quit.
  pub fn handle_key(&mut self, key: KeyEvent) -> bool {
    // Global: Ctrl-C quits from anywhere.
    if key.modifiers.contains(KeyModifiers::CONTROL)
      && key.code == KeyCode::Char('c')
    {
      return false;
    }

    // The match modal swallows all input until dismissed, on any screen.
    // A match on the final candidate lands on the finished screen with
    // the modal still up.
    if self.pending_match.is_some() {
      if matches!(
        key.code,
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')
      ) {
        self.pending_match = None;
      }
      return true;
    }

    match self.screen {
      Screen::Register => self.handle_register_key(key),
      Screen::Welcome => self.handle_welcome_key(key),
      Screen::Preferences => self.handle_preferences_key(key),
      Screen::Swiping => self.handle_swiping_key(key),
      Screen::Finished => self.handle_finished_key(key),
    }
  }

  fn handle_register_key(&mut self, key: KeyEvent) -> bool {
    match key.code {
      KeyCode::Esc => return false,

      KeyCode::Tab => {
        self.field = match self.field {
          RegisterField::Name => RegisterField::Avatar,
          RegisterField::Avatar => RegisterField::Interests,
          RegisterField::Interests => RegisterField::Name,
        };
      }
      KeyCode::Enter => self.submit_registration(),

      KeyCode::Backspace if self.field == RegisterField::Name => {
        self.name_input.pop();
      }
      KeyCode::Char(c) if self.field == RegisterField::Name => {
        self.name_input.push(c);
      }

      KeyCode::Left if self.field == RegisterField::Avatar => {
        let len = self.catalog.avatars.len();
        self.avatar_cursor = (self.avatar_cursor + len - 1) % len;
      }
      KeyCode::Right if self.field == RegisterField::Avatar => {
        self.avatar_cursor =
          (self.avatar_cursor + 1) % self.catalog.avatars.len();
      }

      KeyCode::Up if self.field == RegisterField::Interests => {
        self.interest_cursor = self.interest_cursor.saturating_sub(1);
      }
      KeyCode::Down if self.field == RegisterField::Interests => {
        if self.interest_cursor + 1 < self.catalog.subjects.len() {
          self.interest_cursor += 1;
        }
      }
      KeyCode::Char(' ') if self.field == RegisterField::Interests => {
        self.selected_interests[self.interest_cursor] =
          !self.selected_interests[self.interest_cursor];
      }

      _ => {}
    }
    true
  }

  fn handle_welcome_key(&mut self, key: KeyEvent) -> bool {
    match key.code {
      KeyCode::Char('q') => return false,
      KeyCode::Enter => {
        self.status_msg.clear();
        self.screen = Screen::Preferences;
      }
      _ => {}
    }
    true
  }

  fn handle_preferences_key(&mut self, key: KeyEvent) -> bool {
    match key.code {
      KeyCode::Char('q') => return false,

      KeyCode::Up => {
        self.preference_cursor = self.preference_cursor.saturating_sub(1);
      }
      KeyCode::Down => {
        if self.preference_cursor + 1 < self.catalog.subjects.len() {
          self.preference_cursor += 1;
        }
      }
      KeyCode::Char(' ') => {
        self.selected_preferences[self.preference_cursor] =
          !self.selected_preferences[self.preference_cursor];
      }
      KeyCode::Enter => {
        self.apply_preferences();
        self.start_swiping();
      }

      _ => {}
    }
    true
  }

  fn handle_swiping_key(&mut self, key: KeyEvent) -> bool {
    match key.code {
      KeyCode::Char('q') => return false,
      KeyCode::Right | KeyCode::Char('y') => self.decide(true),
      KeyCode::Left | KeyCode::Char('n') => self.decide(false),
      _ => {}
    }
    true
  }

  fn handle_finished_key(&mut self, key: KeyEvent) -> bool {
    match key.code {
      KeyCode::Char('q') | KeyCode::Esc => return false,
      KeyCode::Char('r') => self.reset(),
      _ => {}
    }
    true
  }

  // ── Transitions ───────────────────────────────────────────────────────────

  /// Validate the form and register the user. Errors land in the status bar.
  pub fn submit_registration(&mut self) {
    let avatar = match self.catalog.avatars.get(self.avatar_cursor) {
      Some(avatar) => avatar.id.clone(),
      None => return,
    };
    let interests = self.selected_ids(&self.selected_interests);

    let registered = User::register(
      &self.name_input,
      &avatar,
      interests,
      Vec::new(),
      &self.catalog,
    );
    match registered {
      Ok(user) => {
        self.status_msg = format!("Registered {}.", user.name);
        self.current_user = Some(user);
        self.persist_users();
        self.screen = Screen::Welcome;
      }
      Err(e) => {
        self.status_msg = format!("Error: {e}");
      }
    }
  }

  /// Replace the current user with one carrying the picked preferences.
  /// Users are immutable; a new value replaces the old one wholesale.
  pub fn apply_preferences(&mut self) {
    let Some(current) = self.current_user.take() else {
      return;
    };
    let preferences = self.selected_ids(&self.selected_preferences);
    self.current_user = Some(User { preferences, ..current });
    self.persist_users();
  }

  /// Freeze the candidate ranking and generate incoming mock swipes.
  ///
  /// Mock swipes are generated once per session; a restored session that
  /// already has swipes keeps them, and candidates the user already swiped
  /// on are skipped.
  pub fn start_swiping(&mut self) {
    let Some(current) = self.current_user.clone() else {
      return;
    };

    let pool = self.pool();
    self.candidates = score::rank_by_similarity(&current, &pool, &self.catalog);
    self.cursor = 0;

    if self.swipes.is_empty() {
      let visitor_ids: Vec<&str> =
        self.roster.iter().map(|u| u.id.as_str()).collect();
      self.swipes = swipe::generate_mock_swipes(
        &mut self.rng,
        visitor_ids,
        &current.id,
        GUARANTEED_LIKE_INDEX,
      );
      self.persist_swipes();
    }

    self.skip_already_swiped(&current.id);
    self.screen = if self.cursor < self.candidates.len() {
      Screen::Swiping
    } else {
      Screen::Finished
    };
  }

  /// Like or pass on the current candidate.
  pub fn decide(&mut self, liked: bool) {
    let Some(current) = self.current_user.clone() else {
      return;
    };
    let Some(candidate) = self.current_candidate() else {
      return;
    };
    let target_id = candidate.user.id.clone();

    self.swipes.push(Swipe::new(&current.id, &target_id, liked));
    self.persist_swipes();

    if liked {
      self.likes += 1;
      let mutual =
        swipe::mutual_match(&self.swipes, &current.id, &target_id);
      if let Some(m) = mutual {
        self.matches_seen += 1;
        self.pending_match = Some(m);
      }
    } else {
      self.passes += 1;
    }

    self.cursor += 1;
    self.skip_already_swiped(&current.id);
    if self.cursor >= self.candidates.len() {
      self.screen = Screen::Finished;
    }
  }

  /// Discard the session entirely and return to registration.
  pub fn reset(&mut self) {
    self.store.remove(USERS_KEY);
    self.store.remove(SWIPES_KEY);

    let subject_count = self.catalog.subjects.len();
    self.screen = Screen::Register;
    self.field = RegisterField::Name;
    self.name_input.clear();
    self.avatar_cursor = 0;
    self.interest_cursor = 0;
    self.selected_interests = vec![false; subject_count];
    self.preference_cursor = 0;
    self.selected_preferences = vec![false; subject_count];
    self.current_user = None;
    self.swipes.clear();
    self.candidates.clear();
    self.cursor = 0;
    self.pending_match = None;
    self.likes = 0;
    self.passes = 0;
    self.matches_seen = 0;
    self.status_msg = String::from("Session cleared.");
  }

  // ── Helpers ───────────────────────────────────────────────────────────────

  fn selected_ids(&self, flags: &[bool]) -> Vec<String> {
    self
      .catalog
      .subjects
      .iter()
      .zip(flags)
      .filter_map(|(subject, &on)| on.then(|| subject.id.clone()))
      .collect()
  }

  fn skip_already_swiped(&mut self, me: &str) {
    while let Some(candidate) = self.candidates.get(self.cursor) {
      if swipe::find_swipe(&self.swipes, me, &candidate.user.id).is_none() {
        break;
      }
      self.cursor += 1;
    }
  }

  fn persist_users(&mut self) {
    let pool = self.pool();
    if let Err(e) = self.store.set(USERS_KEY, &pool) {
      tracing::warn!(error = %e, "failed to persist users");
    }
  }

  fn persist_swipes(&mut self) {
    if let Err(e) = self.store.set(SWIPES_KEY, &self.swipes) {
      tracing::warn!(error = %e, "failed to persist swipes");
    }
  }
}
