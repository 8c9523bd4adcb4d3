#![cfg_attr(not(feature = "std"), no_std)]

//! Read and write the `poolId` query parameter of a page address.
//!
//! The address lives behind a [`Navigator`] handle. Reads parse its query
//! fresh; writes push a new address into session history without a reload.
//!
//! ```
//! use pool_param::{SessionHistory, clear_pool_id, get_pool_id, set_pool_id};
//!
//! let mut history = SessionHistory::parse("/app?foo=bar").unwrap();
//! set_pool_id(&mut history, "p1");
//! assert_eq!(history.location().href(), "/app?foo=bar&poolId=p1");
//! assert_eq!(get_pool_id(&history).as_deref(), Some("p1"));
//!
//! clear_pool_id(&mut history);
//! assert_eq!(history.location().href(), "/app?foo=bar");
//! assert_eq!(get_pool_id(&history), None);
//! ```

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod accessor;
mod encoding;
mod error;
mod helpers;
mod history;
mod location;
mod navigator;
mod search_params;
#[cfg(feature = "web")]
mod web;

// Public API
pub use accessor::{POOL_ID, POOL_ID_PARAM, QueryParam, clear_pool_id, get_pool_id, set_pool_id};
pub use encoding::{decode_component, encode_component};
pub use error::{ParseError, Result};
pub use history::{MAX_ENTRIES, SessionHistory};
pub use location::Location;
pub use navigator::Navigator;
pub use search_params::SearchParams;
#[cfg(feature = "web")]
pub use web::BrowserNavigator;
