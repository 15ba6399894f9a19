//! Typed operations on Backand objects.
//!
//! A model type opts in by implementing [`BackandObject`]; the operation
//! traits are then available on it through blanket implementations. Unlike
//! the raw [`BackandClient`](crate::BackandClient) methods, these surface
//! error payloads as [`BackandError::Api`](crate::BackandError::Api).

mod create;
mod get;
mod list;

pub use create::Create;
pub use get::Get;
pub use list::List;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// A model stored in a Backand object collection.
///
/// # Example
///
/// ```
/// use backand::BackandObject;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Item {
///     #[serde(skip_serializing_if = "Option::is_none")]
///     id: Option<u64>,
///     name: String,
/// }
///
/// impl BackandObject for Item {
///     const OBJECT_TYPE: &'static str = "items";
///     type Id = u64;
/// }
/// ```
pub trait BackandObject: Serialize + DeserializeOwned + Send + Sync {
    /// The object type name used in REST paths.
    const OBJECT_TYPE: &'static str;

    /// The identifier type used to fetch a single object.
    type Id: std::fmt::Display + Send + Sync;
}
