//! Built-in example bookmarks written to an empty store on first start.

use chrono::{TimeZone, Utc};

use crate::types::bookmark::Bookmark;

struct SeedEntry {
    id: &'static str,
    url: &'static str,
    title: &'static str,
    description: &'static str,
    tags: &'static [&'static str],
    day: u32,
}

const SEED: &[SeedEntry] = &[
    SeedEntry {
        id: "seed-1",
        url: "https://developer.mozilla.org/",
        title: "MDN Web Docs",
        description: "Reference and tutorials for web developers.",
        tags: &["docs", "web", "javascript"],
        day: 1,
    },
    SeedEntry {
        id: "seed-2",
        url: "https://react.dev/",
        title: "React",
        description: "Official React documentation and guides.",
        tags: &["react", "frontend"],
        day: 2,
    },
    SeedEntry {
        id: "seed-3",
        url: "https://expressjs.com/",
        title: "Express",
        description: "Fast, unopinionated, minimalist web framework for Node.js.",
        tags: &["node", "backend", "express"],
        day: 3,
    },
    SeedEntry {
        id: "seed-4",
        url: "https://vitejs.dev/",
        title: "Vite",
        description: "Next generation frontend tooling.",
        tags: &["tooling", "frontend"],
        day: 4,
    },
    SeedEntry {
        id: "seed-5",
        url: "https://developer.chrome.com/docs/",
        title: "Chrome Developers",
        description: "Guides and tools for building on the web.",
        tags: &["docs", "web"],
        day: 5,
    },
];

/// Returns the seed collection, in order. Timestamps are 10:00 UTC on 1–5 February 2026.
pub fn seed_bookmarks() -> Vec<Bookmark> {
    SEED.iter()
        .map(|entry| Bookmark {
            id: entry.id.to_string(),
            url: entry.url.to_string(),
            title: entry.title.to_string(),
            description: entry.description.to_string(),
            tags: entry.tags.iter().map(|t| t.to_string()).collect(),
            created_at: Utc
                .with_ymd_and_hms(2026, 2, entry.day, 10, 0, 0)
                .single()
                .unwrap_or_default(),
        })
        .collect()
}
