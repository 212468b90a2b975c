use chrono::{TimeZone, Utc};

use crate::post::Post;

/// The posts every fresh process starts with. There is no persistence, so
/// a restart always comes back to exactly this list.
pub fn seed_posts() -> Vec<Post> {
    vec![
        Post {
            id: "1".to_string(),
            title: "Introduction to Server-Side Rendering".to_string(),
            content: r#"# Introduction to Server-Side Rendering

Server-side rendering produces the full HTML for a page on the server in
response to a request, instead of assembling it in the browser.

## Why render on the server?

- Faster first paint on slow devices
- Content is visible to crawlers without executing scripts
- A single source of truth for the initial page state

## Getting started

A minimal handler looks like this:

```rust
async fn index() -> HttpResponse {
    HttpResponse::Ok().body(render_page())
}
```

## Conclusion

Rendering on the server keeps the client simple and the first load fast,
at the cost of doing more work per request.
"#.to_string(),
            excerpt: "Learn the basics of server-side rendering and why it still matters for modern web applications.".to_string(),
            author: "Jane Smith".to_string(),
            created_at: Utc.with_ymd_and_hms(2023, 9, 15, 10, 30, 0).unwrap(),
            read_time: 5,
            tags: vec!["Rendering".to_string(), "Web Development".to_string(), "Backend".to_string()],
            image_url: "https://images.unsplash.com/photo-1593720213428-28a5b9e94613?auto=format&fit=crop&w=1470&q=80".to_string(),
        },
        Post {
            id: "2".to_string(),
            title: "Mastering CSS Grid Layout".to_string(),
            content: r#"# Mastering CSS Grid Layout

CSS Grid is a two-dimensional layout system that places items in rows and
columns at the same time.

## Basic concepts

- Grid container: the element with `display: grid`
- Grid items: its direct children
- Grid tracks: the rows and columns themselves

## Creating a grid

```css
.container {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  grid-gap: 10px;
}
```

This creates three equal-width columns with a 10px gap between items.

## Conclusion

Grid for two-dimensional layout, Flexbox for one-dimensional: together
they cover practically every layout you will need.
"#.to_string(),
            excerpt: "A practical guide to CSS Grid Layout for building responsive, complex web layouts.".to_string(),
            author: "John Doe".to_string(),
            created_at: Utc.with_ymd_and_hms(2023, 9, 10, 14, 20, 0).unwrap(),
            read_time: 8,
            tags: vec!["CSS".to_string(), "Web Design".to_string(), "Frontend".to_string()],
            image_url: "https://images.unsplash.com/photo-1555066931-4365d14bab8c?auto=format&fit=crop&w=1470&q=80".to_string(),
        },
        Post {
            id: "3".to_string(),
            title: "The Future of AI in Web Development".to_string(),
            content: r#"# The Future of AI in Web Development

Artificial intelligence is changing how web software gets built, from code
completion to automated testing.

## Current applications

- AI-assisted code completion
- Automated bug detection
- Content generation and summarisation

## Future trends

### No-code development

Describing an application in natural language and letting a model scaffold
it is already practical for small tools.

### Personalised experiences

Models can adapt a page to the reader in real time instead of serving one
static variant to everyone.

## Conclusion

AI will not replace developers, but it is steadily changing what the job
looks like day to day.
"#.to_string(),
            excerpt: "How artificial intelligence is reshaping web development, and what may come next.".to_string(),
            author: "Alex Johnson".to_string(),
            created_at: Utc.with_ymd_and_hms(2023, 9, 5, 9, 15, 0).unwrap(),
            read_time: 10,
            tags: vec!["AI".to_string(), "Web Development".to_string(), "Future Tech".to_string()],
            image_url: "https://images.unsplash.com/photo-1485827404703-89b55fcc595e?auto=format&fit=crop&w=1470&q=80".to_string(),
        },
    ]
}
