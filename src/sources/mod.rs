pub mod file;
pub mod http;
pub mod loader;
pub mod traits;

pub use file::FileSource;
pub use http::HttpSource;
pub use loader::{decode_payload, load_listings, ListingLoader};
pub use traits::ListingSource;
