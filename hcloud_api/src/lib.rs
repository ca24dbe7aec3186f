//! Typed client for a subset of the Hetzner Cloud API.
//!
//! Each endpoint method performs one request and returns an [`ApiResponse`]
//! carrying the status code and typed body. The `get_all_*` helpers and
//! [`fetch_items`] walk paginated list endpoints until the last page.

mod client;
pub mod config;
mod endpoints;
mod errors;
pub mod pagination;
mod query;
mod response;
pub mod types;
pub use self::client::Client;
pub use self::config::{ClientConfig, TokenSupplier};
pub use self::errors::Error;
pub use self::pagination::{fetch_items, fetch_items_with_limit, DEFAULT_PAGE_SIZE};
pub use self::query::{
    ActionQuery, ImageQuery, ListQuery, Query, QueryCommon, ServerQuery, SortDirection,
};
pub use self::response::ApiResponse;
