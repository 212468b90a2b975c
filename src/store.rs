use std::collections::HashMap;

use crate::post::Post;
use crate::seed::seed_posts;

/// The authoritative in-memory post collection for the process lifetime.
///
/// Records live in a map keyed by id; `order` keeps the ids newest-first so
/// listing preserves reverse-chronological insertion without re-sorting.
/// Callers synchronize access through the shared application state lock.
pub struct PostStore {
    posts: HashMap<String, Post>,
    order: Vec<String>,
}

impl PostStore {
    pub fn new() -> PostStore {
        PostStore {
            posts: Default::default(),
            order: Default::default(),
        }
    }

    /// A store pre-populated with the seed articles, as used on startup
    pub fn seeded() -> PostStore {
        let mut store = PostStore::new();
        for post in seed_posts().into_iter().rev() {
            store.insert(post);
        }
        store
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.posts.contains_key(id)
    }

    /// Full sequence, newest first
    pub fn list(&self) -> Vec<&Post> {
        self.order.iter()
            .filter_map(|id| self.posts.get(id))
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<&Post> {
        self.posts.get(id)
    }

    /// Prepends the record. The caller is responsible for the authorization
    /// decision and for the id being fresh; inserting a duplicate id
    /// replaces the old record.
    pub fn insert(&mut self, post: Post) {
        let id = post.id.clone();
        if self.posts.insert(id.clone(), post).is_none() {
            self.order.insert(0, id);
        }
    }

    /// Removes the record with the given id. Returns false when no record
    /// matched, leaving the collection untouched.
    pub fn remove(&mut self, id: &str) -> bool {
        if self.posts.remove(id).is_none() {
            return false;
        }
        self.order.retain(|x| x != id);
        true
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn make_post(id: &str, title: &str) -> Post {
        Post {
            id: id.to_string(),
            title: title.to_string(),
            content: format!("# {}\n", title),
            excerpt: "excerpt".to_string(),
            author: "tester".to_string(),
            created_at: Utc::now(),
            read_time: 4,
            tags: vec!["Testing".to_string()],
            image_url: "https://example.com/img.jpg".to_string(),
        }
    }

    #[test]
    fn test_insert_prepends() {
        let mut store = PostStore::new();
        store.insert(make_post("a", "First"));
        store.insert(make_post("b", "Second"));

        let listed = store.list();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, "b");
        assert_eq!(listed[1].id, "a");
    }

    #[test]
    fn test_get_and_remove() {
        let mut store = PostStore::new();
        store.insert(make_post("a", "First"));
        store.insert(make_post("b", "Second"));

        assert_eq!(store.get("a").unwrap().title, "First");
        assert!(store.remove("a"));
        assert!(store.get("a").is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_missing_leaves_store_unchanged() {
        let mut store = PostStore::new();
        store.insert(make_post("a", "First"));

        assert!(!store.remove("nope"));
        assert_eq!(store.len(), 1);
        assert!(store.contains("a"));
    }

    #[test]
    fn test_seeded_store() {
        let store = PostStore::seeded();
        assert_eq!(store.len(), 3);

        let listed = store.list();
        assert_eq!(listed[0].id, "1");
        assert_eq!(listed[2].id, "3");
        for pair in listed.windows(2) {
            assert!(pair[0].created_at > pair[1].created_at);
        }
    }
}
