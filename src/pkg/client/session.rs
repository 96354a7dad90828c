//! Client-side session state and its on-disk token store.
//!
//! The token, current page and current search are written next to each other
//! so `jobs --next` picks up where the previous invocation left off. Logout
//! wipes all of them.

use std::{collections::BTreeMap, fs, path::PathBuf};

use crate::prelude::Result;

pub const TOKEN_KEY: &str = "auth_token";
pub const PAGE_KEY: &str = "current_page";
pub const SEARCH_KEY: &str = "current_search";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub current_page: u32,
    pub current_search: String,
    pub limit: u32,
}

impl Session {
    pub fn new(limit: u32) -> Self {
        Session {
            token: None,
            current_page: 1,
            current_search: String::new(),
            limit: limit.max(1),
        }
    }

    pub fn restore(store: &SessionStore, limit: u32) -> Result<Self> {
        let mut entries = store.read()?;
        let mut s = Session::new(limit);
        s.token = entries.remove(TOKEN_KEY);
        s.current_search = entries.remove(SEARCH_KEY).unwrap_or_default();
        s.go_to(
            entries
                .get(PAGE_KEY)
                .and_then(|p| p.parse().ok())
                .unwrap_or(1),
        );
        Ok(s)
    }

    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }

    /// Trims the term and goes back to the first page.
    pub fn search(&mut self, term: &str) {
        self.current_search = term.trim().to_string();
        self.current_page = 1;
    }

    /// Moves by `delta` pages, never below page 1.
    pub fn change_page(&mut self, delta: i64) {
        let next = (self.current_page as i64).saturating_add(delta);
        self.current_page = next.clamp(1, u32::MAX as i64) as u32;
    }

    pub fn go_to(&mut self, page: u32) {
        self.current_page = page.max(1);
    }

    /// Drops the token and every piece of view state.
    pub fn clear(&mut self) {
        *self = Session::new(self.limit);
    }
}

/// JSON file holding string values under fixed keys.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SessionStore { path: path.into() }
    }

    fn read(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let data = fs::read_to_string(&self.path)?;
        if data.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&data)?)
    }

    fn write(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(entries)?)?;
        Ok(())
    }

    #[cfg(test)]
    pub fn token(&self) -> Result<Option<String>> {
        Ok(self.read()?.remove(TOKEN_KEY))
    }

    pub fn save_token(&self, token: &str) -> Result<()> {
        let mut entries = self.read()?;
        entries.insert(TOKEN_KEY.into(), token.into());
        self.write(&entries)
    }

    /// Persists page and search; the token entry is left as is.
    pub fn save_view(&self, session: &Session) -> Result<()> {
        let mut entries = self.read()?;
        entries.insert(PAGE_KEY.into(), session.current_page.to_string());
        entries.insert(SEARCH_KEY.into(), session.current_search.clone());
        self.write(&entries)
    }

    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{PAGE_KEY, Session, SessionStore, TOKEN_KEY};
    use crate::prelude::Result;

    #[test]
    fn search_resets_to_first_page() {
        let mut s = Session::new(10);
        s.go_to(4);
        s.search("  rust  ");
        assert_eq!(s.current_search, "rust");
        assert_eq!(s.current_page, 1);
    }

    #[test]
    fn page_never_drops_below_one() {
        let mut s = Session::new(10);
        s.change_page(-1);
        assert_eq!(s.current_page, 1);
        s.change_page(2);
        assert_eq!(s.current_page, 3);
        s.change_page(-10);
        assert_eq!(s.current_page, 1);
        s.go_to(0);
        assert_eq!(s.current_page, 1);
    }

    #[test]
    fn clear_keeps_only_the_page_size() {
        let mut s = Session::new(25);
        s.token = Some("t".into());
        s.search("x");
        s.change_page(1);
        s.clear();
        assert_eq!(s, Session::new(25));
        assert!(!s.is_logged_in());
    }

    #[test]
    fn token_round_trips_through_the_store() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let store = SessionStore::new(dir.path().join("nested").join("session.json"));
        assert_eq!(store.token()?, None);

        store.save_token("Bearer abc")?;
        let restored = Session::restore(&store, 10)?;
        assert_eq!(restored.token.as_deref(), Some("Bearer abc"));
        assert_eq!(restored.current_page, 1);

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(dir.path().join("nested/session.json"))?)?;
        assert_eq!(raw[TOKEN_KEY], "Bearer abc");

        store.clear()?;
        assert_eq!(store.token()?, None);
        Ok(())
    }

    #[test]
    fn view_state_is_restored_with_the_token() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let store = SessionStore::new(dir.path().join("session.json"));
        store.save_token("Bearer abc")?;

        let mut s = Session::restore(&store, 10)?;
        s.search("rust");
        s.change_page(2);
        store.save_view(&s)?;

        let restored = Session::restore(&store, 10)?;
        assert_eq!(restored.token.as_deref(), Some("Bearer abc"));
        assert_eq!(restored.current_search, "rust");
        assert_eq!(restored.current_page, 3);

        store.clear()?;
        assert_eq!(Session::restore(&store, 10)?, Session::new(10));
        Ok(())
    }

    #[test]
    fn garbage_page_falls_back_to_first() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("session.json");
        std::fs::write(&path, format!(r#"{{"{PAGE_KEY}": "zero"}}"#))?;
        assert_eq!(Session::restore(&SessionStore::new(&path), 10)?.current_page, 1);
        std::fs::write(&path, format!(r#"{{"{PAGE_KEY}": "0"}}"#))?;
        assert_eq!(Session::restore(&SessionStore::new(&path), 10)?.current_page, 1);
        Ok(())
    }

    #[test]
    fn clearing_a_missing_file_is_fine() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let store = SessionStore::new(dir.path().join("none.json"));
        store.clear()?;
        assert!(!dir.path().join("none.json").exists());
        Ok(())
    }
}
