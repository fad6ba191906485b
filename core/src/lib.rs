//! Core components for presigning urls.
//!
//! This crate provides the foundational types and traits for the kvsign ecosystem.
//!
//! ## Overview
//!
//! The crate is built around a few small pieces:
//!
//! - **Traits**: [`SigningCredential`] to validate credentials and [`SignUrl`] to presign urls
//! - **SigningRequest**: The parts of a url that take part in signing
//! - **Error**: A single error type with an [`ErrorKind`] to tell failures apart
//!
//! Presigning never performs I/O. Every service signer is a pure function of
//! the url, the credential and the signing time, so it's safe to share one
//! signer across threads.
//!
//! ## Example
//!
//! ```
//! use kvsign_core::time::{from_timestamp_millis, DateTime};
//! use kvsign_core::{Result, SignUrl, SigningCredential, SigningRequest};
//!
//! // Define your credential type
//! #[derive(Clone, Debug)]
//! struct MyCredential {
//!     key: String,
//! }
//!
//! impl SigningCredential for MyCredential {
//!     fn is_valid(&self) -> bool {
//!         !self.key.is_empty()
//!     }
//! }
//!
//! // Implement url signer
//! #[derive(Debug)]
//! struct MySigner;
//!
//! impl SignUrl for MySigner {
//!     type Credential = MyCredential;
//!
//!     fn sign_url(&self, url: &str, cred: &Self::Credential, _: DateTime) -> Result<String> {
//!         let req = SigningRequest::build(url)?;
//!         let query = format!("key={}", cred.key);
//!         Ok(req.into_url("wss", &query))
//!     }
//! }
//!
//! # fn main() -> Result<()> {
//! let cred = MyCredential { key: "demo".to_string() };
//! let now = from_timestamp_millis(1690186022101)?;
//! let url = MySigner.sign_url("wss://example.com", &cred, now)?;
//! assert_eq!(url, "wss://example.com/?key=demo");
//! # Ok(())
//! # }
//! ```
//!
//! ## Utilities
//!
//! The crate also provides utility modules:
//!
//! - [`hash`]: Cryptographic hashing utilities
//! - [`time`]: Time formatting utilities
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod error;
pub use error::{Error, ErrorKind, Result};

mod api;
pub use api::{SignUrl, SigningCredential};
mod request;
pub use request::SigningRequest;
