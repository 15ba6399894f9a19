//! Get trait for fetching single objects.

use async_trait::async_trait;

use crate::client::BackandClient;
use crate::error::Result;
use crate::session::Access;
use crate::traits::BackandObject;

/// Fetch a single object by ID.
///
/// Implemented for every [`BackandObject`].
///
/// # Example
///
/// ```ignore
/// use backand::{Access, BackandClient, Get};
///
/// let client = BackandClient::from_env()?;
/// let item = Item::get(&client, 42, Access::Anonymous).await?;
/// ```
#[async_trait]
pub trait Get: BackandObject {
    /// Fetch the object by ID.
    ///
    /// # Errors
    ///
    /// Returns [`BackandError::Api`](crate::BackandError::Api) if the server
    /// answers with an error payload, or a parse error if the body does not
    /// match the model.
    #[tracing::instrument(skip(client, id), fields(object_type = Self::OBJECT_TYPE, id = %id))]
    async fn get(client: &BackandClient, id: Self::Id, access: Access) -> Result<Self> {
        let id = id.to_string();
        client
            .get_single_object(Self::OBJECT_TYPE, &id, access)
            .await?
            .into_typed()
    }
}

impl<T: BackandObject> Get for T {}
