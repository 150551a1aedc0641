//! Read-only Ukrainian language resources
//!
//! Both resources are loaded once per process and injected into the
//! clustering pipeline rather than reached for as ambient globals:
//! - `dictionary` — surface form → dictionary form lookups
//! - `stopwords` — function words excluded from the vector space

pub mod dictionary;
pub mod stopwords;

pub use dictionary::MorphDict;
pub use stopwords::is_stop_word;
