//! Directory listing: retrieval cache, display ordering and the view model

mod cache;
mod sort;
mod view;

pub use cache::CacheKey;
pub use view::{FileManagerView, ListingBody, MAX_DISPLAYED_FILES};
