//! List trait for fetching pages of objects.

use async_trait::async_trait;

use crate::client::BackandClient;
use crate::error::Result;
use crate::pagination::{ObjectPage, PageParams};
use crate::session::Access;
use crate::traits::BackandObject;

/// List objects one page at a time.
///
/// There is no fetch-all helper; callers drive pagination themselves using
/// [`ObjectPage::has_more`].
///
/// # Example
///
/// ```ignore
/// use backand::{Access, BackandClient, List, PageParams};
///
/// let client = BackandClient::from_env()?;
/// let page = Item::list_page(&client, PageParams::new(50, 1), Access::Anonymous).await?;
/// for item in &page.data {
///     println!("{}", item.name);
/// }
/// ```
#[async_trait]
pub trait List: BackandObject {
    /// Fetch a single page.
    ///
    /// # Errors
    ///
    /// Returns [`BackandError::Api`](crate::BackandError::Api) if the server
    /// answers with an error payload, or a parse error if the body is not a
    /// list payload of this model.
    #[tracing::instrument(skip(client), fields(object_type = Self::OBJECT_TYPE))]
    async fn list_page(
        client: &BackandClient,
        page: PageParams,
        access: Access,
    ) -> Result<ObjectPage<Self>> {
        let result: ObjectPage<Self> = client
            .get_object_list(Self::OBJECT_TYPE, page, access)
            .await?
            .into_typed()?;
        Ok(result.with_params(page))
    }
}

impl<T: BackandObject> List for T {}
