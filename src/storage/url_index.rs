//! In-memory bidirectional alias <-> URL index
//!
//! Both directions live behind a single `RwLock`, so a reader always sees
//! either none or both halves of an insert. Multi-step sequences such as
//! "check the reverse map, then insert" go through [`UrlIndex::write`], which
//! holds the write lock for the lifetime of the returned [`IndexWriter`].
//!
//! URLs are kept as the raw request bytes; nothing requires them to be UTF-8.

use std::collections::HashMap;

use bytes::Bytes;
use parking_lot::{RwLock, RwLockWriteGuard};

#[derive(Debug, Default)]
struct IndexInner {
    /// alias -> URL
    forward: HashMap<String, Bytes>,
    /// URL -> alias
    reverse: HashMap<Bytes, String>,
}

impl IndexInner {
    fn insert(&mut self, alias: String, url: Bytes) {
        debug_assert!(!self.forward.contains_key(&alias), "alias already taken");
        debug_assert!(!self.reverse.contains_key(&url), "URL already shortened");

        self.reverse.insert(url.clone(), alias.clone());
        self.forward.insert(alias, url);
    }
}

/// Alias/URL store shared by every request
#[derive(Debug, Default)]
pub struct UrlIndex {
    inner: RwLock<IndexInner>,
}

impl UrlIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reverse lookup: the alias already assigned to `url`
    pub fn lookup_alias(&self, url: impl AsRef<[u8]>) -> Option<String> {
        self.inner.read().reverse.get(url.as_ref()).cloned()
    }

    /// Forward lookup: the URL stored under `alias`
    pub fn lookup_url(&self, alias: &str) -> Option<Bytes> {
        self.inner.read().forward.get(alias).cloned()
    }

    /// Insert both directions at once.
    ///
    /// The caller must already know that `alias` is free and `url` has no
    /// alias; nothing is re-checked here. Use [`UrlIndex::write`] when the
    /// check and the insert must be atomic.
    pub fn insert(&self, alias: String, url: impl Into<Bytes>) {
        self.inner.write().insert(alias, url.into());
    }

    /// Take the write lock for a check-then-insert sequence
    pub fn write(&self) -> IndexWriter<'_> {
        IndexWriter {
            guard: self.inner.write(),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.read().forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().forward.is_empty()
    }

    /// Snapshot of every `(alias, url)` pair
    pub fn entries(&self) -> Vec<(String, Bytes)> {
        self.inner
            .read()
            .forward
            .iter()
            .map(|(alias, url)| (alias.clone(), url.clone()))
            .collect()
    }
}

/// Exclusive write session over a [`UrlIndex`]
pub struct IndexWriter<'a> {
    guard: RwLockWriteGuard<'a, IndexInner>,
}

impl IndexWriter<'_> {
    pub fn lookup_alias(&self, url: &[u8]) -> Option<String> {
        self.guard.reverse.get(url).cloned()
    }

    pub fn contains_alias(&self, alias: &str) -> bool {
        self.guard.forward.contains_key(alias)
    }

    pub fn insert(&mut self, alias: String, url: Bytes) {
        self.guard.insert(alias, url);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_index_is_empty() {
        let index = UrlIndex::new();
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert_eq!(index.lookup_url("randstrI"), None);
        assert_eq!(index.lookup_alias("https://practicum.yandex.ru/"), None);
    }

    #[test]
    fn test_insert_sets_both_directions() {
        let index = UrlIndex::new();
        index.insert("randstrI".to_string(), "https://practicum.yandex.ru/");

        assert_eq!(
            index.lookup_url("randstrI").unwrap(),
            "https://practicum.yandex.ru/"
        );
        assert_eq!(
            index.lookup_alias("https://practicum.yandex.ru/").as_deref(),
            Some("randstrI")
        );
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_lookups_are_exact() {
        let index = UrlIndex::new();
        index.insert("abcdefgh".to_string(), "https://example.com");

        assert_eq!(index.lookup_url("ABCDEFGH"), None);
        assert_eq!(index.lookup_alias("https://example.com/"), None);
    }

    #[test]
    fn test_non_utf8_url_is_stored_verbatim() {
        let index = UrlIndex::new();
        index.insert("bytesAAA".to_string(), Bytes::from_static(b"h\xffx"));

        assert_eq!(index.lookup_url("bytesAAA").unwrap(), &b"h\xffx"[..]);
        assert_eq!(index.lookup_alias(b"h\xffx").as_deref(), Some("bytesAAA"));
        assert_eq!(index.lookup_alias(b"h\xfex"), None);
    }

    #[test]
    fn test_writer_sees_its_own_inserts() {
        let index = UrlIndex::new();
        {
            let mut writer = index.write();
            assert!(!writer.contains_alias("abcdefgh"));
            writer.insert(
                "abcdefgh".to_string(),
                Bytes::from_static(b"https://a.example"),
            );
            assert!(writer.contains_alias("abcdefgh"));
            assert_eq!(
                writer.lookup_alias(b"https://a.example").as_deref(),
                Some("abcdefgh")
            );
        }
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_entries_are_mutual_inverses() {
        let index = UrlIndex::new();
        for (alias, url) in [
            ("aaaaaaaa", "https://one.example"),
            ("bbbbbbbb", "https://two.example"),
            ("cccccccc", "https://three.example"),
        ] {
            index.insert(alias.to_string(), url);
        }

        let entries = index.entries();
        assert_eq!(entries.len(), 3);
        for (alias, url) in entries {
            assert_eq!(index.lookup_url(&alias).as_ref(), Some(&url));
            assert_eq!(index.lookup_alias(&url).as_deref(), Some(alias.as_str()));
        }
    }
}
