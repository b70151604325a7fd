// ABOUTME: Client-side access to the favorites backend
// ABOUTME: Independent of the catalog and normalization paths

/// HTTP client for the favorites resource
pub mod favorites;

pub use favorites::FavoritesClient;
