//! Capability traits for the collaborators beacon does not implement itself.

pub mod http_client;

pub use http_client::{AsyncHttpClient, HttpClient, PostRequest};
