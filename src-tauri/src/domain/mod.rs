//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! No I/O happens here.

mod entity;
mod detected_item;
mod preferences;
mod profile;

pub use entity::{DomainError, DomainResult};
pub use detected_item::{DetectedItem, parse_expiry};
pub use preferences::{Allergy, Preferences};
pub use profile::{Profile, ProfileUpdate};
