//! Free-text filtering over an already fetched bookmark list.

use crate::types::bookmark::Bookmark;

/// Keeps bookmarks whose title or URL contains `term`, ignoring case.
///
/// A blank term keeps everything.
pub fn filter_by_term<'a>(bookmarks: &'a [Bookmark], term: &str) -> Vec<&'a Bookmark> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return bookmarks.iter().collect();
    }

    bookmarks
        .iter()
        .filter(|b| format!("{} {}", b.title, b.url).to_lowercase().contains(&term))
        .collect()
}
