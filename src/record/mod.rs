//! Record facets for the recap engine
//!
//! Records are opaque JSON objects; the caller declares how to read them:
//!
//! - `FieldPath` resolves dotted paths (`user.name`) into a record
//! - `GroupKey` is the normalized scalar identifying a logical subject
//! - `RecapProfile` bundles the declared facets for one recap table

mod key;
mod path;
mod profile;

pub use key::GroupKey;
pub use path::FieldPath;
pub use profile::{FilterSpec, Matcher, RecapProfile};
