use std::fmt;
use std::fmt::{Display, Formatter};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single blog article record. Every field is set at creation and kept
/// immutable afterwards: there is no update-in-place anywhere in the API.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    /// Estimated reading time in minutes
    pub read_time: u32,
    pub tags: Vec<String>,
    pub image_url: String,
}

impl Display for Post {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "id={}, date={}, author={}\ntitle={}\ntags={}",
               self.id,
               self.created_at,
               self.author,
               self.title,
               self.tags.join(" "),
        )
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn sample_post() -> Post {
        Post {
            id: "42".to_string(),
            title: "Borrow Checking in Anger".to_string(),
            content: "# Borrow Checking in Anger\n\nSome content.\n".to_string(),
            excerpt: "A short excerpt.".to_string(),
            author: "Jane Smith".to_string(),
            created_at: Utc.with_ymd_and_hms(2023, 9, 15, 10, 30, 0).unwrap(),
            read_time: 5,
            tags: vec!["Rust".to_string(), "Programming".to_string()],
            image_url: "https://example.com/cover.jpg".to_string(),
        }
    }

    #[test]
    fn test_wire_names_are_camel_case() {
        let json = serde_json::to_value(sample_post()).unwrap();
        assert_eq!(json["createdAt"], "2023-09-15T10:30:00Z");
        assert_eq!(json["readTime"], 5);
        assert_eq!(json["imageUrl"], "https://example.com/cover.jpg");
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn test_round_trips_through_json() {
        let post = sample_post();
        let json = serde_json::to_string(&post).unwrap();
        let back: Post = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, post.id);
        assert_eq!(back.created_at, post.created_at);
        assert_eq!(back.tags, post.tags);
    }
}
