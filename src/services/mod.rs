// Linkshelf services
// Pure functions shared by the server and the client: validation, normalization, search.

pub mod normalizer;
pub mod search;
pub mod validator;
