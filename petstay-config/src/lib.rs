//! Configuration integrity checks for the PetStay front-end.
//!
//! A deployment step renders the front-end configuration from a template,
//! replacing `{{NAME}}` placeholders with real values. This crate loads the
//! rendered artifact into an immutable [`ConfigMap`] and refuses to hand it to
//! consumers while any value still carries a placeholder delimiter.
//!
//! ```
//! use petstay_config::{ConfigError, ConfigMap, verify};
//!
//! let config = ConfigMap::from_pairs([("API_BASE_URL", "{{API_BASE_URL}}")]).unwrap();
//! let err = verify(&config).unwrap_err();
//! assert!(matches!(err, ConfigError::UnresolvedPlaceholder { ref key } if key == "API_BASE_URL"));
//! ```

#![warn(missing_docs, clippy::pedantic)]

mod error;
mod map;
mod schema;
pub mod source;
mod verify;

pub use error::{ConfigError, ConfigResult};
pub use map::{ConfigMap, ConfigMapBuilder, Iter};
pub use petstay_primitives::{ConfigKey, PlaceholderMarker};
pub use schema::FrontendConfig;
pub use verify::{VerifiedConfig, find_unresolved, verify, verify_with};
