pub mod url_index;

pub use url_index::{IndexWriter, UrlIndex};
