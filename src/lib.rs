//! Client-side logic of a property marketing site as a library: a paginated
//! search/results controller over a remote JSON API, pure card/detail view
//! models, a local filter/sort/favorite manager for static listings, and a
//! typed key-value store for the persisted bits.

pub mod api;
pub mod browse;
pub mod form;
pub mod models;
pub mod search;
pub mod storage;
