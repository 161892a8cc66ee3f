//! # Satchel
//!
//! A multi-token search and ranking engine for course resource collections.
//!
//! Resources (lecture notes, past exams) carry a title and a set of file
//! attachments. A free-text query is tokenized on whitespace, each token is
//! matched as a case-insensitive substring against the resource title and
//! attachment filenames, and matches are ranked and paginated with an
//! accurate total count.
//!
//! ## Features
//!
//! - All-tokens (AND) and any-token (OR) match modes
//! - Relevance, date, and name orderings with deterministic tie-breaks
//! - Pluggable resource stores behind a single trait
//! - In-memory store for embedding and tests
//!
//! ## Example
//!
//! ```
//! use satchel::resource::Resource;
//! use satchel::search::{SearchEngine, SearchRequest};
//! use satchel::store::MemoryResourceStore;
//!
//! # fn main() -> satchel::error::Result<()> {
//! let store = MemoryResourceStore::new();
//! store.insert(Resource::new("Operating Systems Notes"))?;
//! store.insert(Resource::new("Linear Algebra Exam 2024"))?;
//!
//! let engine = SearchEngine::new(store);
//! let page = engine.search(&SearchRequest::new("algebra"))?;
//! assert_eq!(page.total_items, 1);
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod error;
pub mod query;
pub mod resource;
pub mod search;
pub mod store;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
