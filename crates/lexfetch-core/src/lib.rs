pub mod client;
pub mod resolver;
pub mod types;

pub use client::{DictionaryApi, OxfordClient};
pub use resolver::Resolver;
pub use types::{ApiReply, GENERIC_ERROR, Lookup, STATUS_NO_DEFINITION};
