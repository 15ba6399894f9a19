//! Create trait for adding objects.

use async_trait::async_trait;

use crate::client::BackandClient;
use crate::error::Result;
use crate::payload::Payload;
use crate::traits::BackandObject;

/// Create a new object and return the stored version.
///
/// Creation always authenticates first, so no access mode is taken.
///
/// # Example
///
/// ```ignore
/// use backand::{BackandClient, Create};
///
/// let client = BackandClient::from_env()?;
/// let created = Item { id: None, name: "widget".into() }.create(&client).await?;
/// assert!(created.id.is_some());
/// ```
#[async_trait]
pub trait Create: BackandObject {
    /// Create the object.
    ///
    /// # Errors
    ///
    /// Returns [`BackandError::Api`](crate::BackandError::Api) if the server
    /// rejects the object, or a parse error if the echoed object does not
    /// match the model.
    #[tracing::instrument(skip_all, fields(object_type = Self::OBJECT_TYPE))]
    async fn create(&self, client: &BackandClient) -> Result<Self> {
        let payload = Payload::json(self)?;
        client
            .create_object(Self::OBJECT_TYPE, payload)
            .await?
            .into_typed()
    }
}

impl<T: BackandObject> Create for T {}
