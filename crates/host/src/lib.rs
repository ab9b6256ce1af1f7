//! Host-facing boundary for the base64url codec.
//!
//! A query-processing host exposes the two transforms as named scalar
//! functions. This crate supplies the pieces that boundary needs: a
//! [`Value`] type covering the marshalled shapes (bytes, text, and the
//! absent value), typed null-propagating wrappers around the codec, and a
//! [`Registry`] of named single-argument functions with an idempotent
//! [`register_base64url`] installer the host calls once at startup.
//!
//! # Example
//!
//! ```
//! use base64url_host::{register_base64url, Registry, Value};
//!
//! let mut registry = Registry::new();
//! register_base64url(&mut registry);
//!
//! let encoded = registry
//!     .call("base64url_encode", &Value::Bytes(vec![0xDE, 0xAD, 0xBE, 0xEF]))
//!     .unwrap();
//! assert_eq!(encoded, Value::Text("3q2-7w".to_string()));
//! ```

mod error;
mod functions;
mod registry;
mod value;

pub use error::HostError;
pub use functions::{base64url_decode, base64url_encode};
pub use registry::{register_base64url, FunctionDef, Registry};
pub use value::Value;
