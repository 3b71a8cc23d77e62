//! HTTP module
//!
//! Provides the router every REST service sends its requests through.
//!
//! # Features
//!
//! - **Single attempt**: each call is one HTTP exchange, failures surface as-is
//! - **Status mapping**: non-2xx responses become `Error::HttpStatus`
//! - **JSON decoding**: bodies decode straight into typed models

mod router;

pub use router::{Router, RouterConfig, RouterConfigBuilder, RequestConfig, DEFAULT_BASE_URL};
