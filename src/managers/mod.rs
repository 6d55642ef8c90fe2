// Linkshelf managers
// Stateful components that own application data.

pub mod bookmark_manager;
pub mod seed;
