// Asset transport abstraction — HTTP backend plus a trait seam for tests.

pub mod http_source;
pub mod traits;

pub use http_source::HttpArtSource;
pub use traits::{ArtFetch, ArtSource};
