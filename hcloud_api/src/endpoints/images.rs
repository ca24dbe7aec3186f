use crate::{
    query::{ImageQuery, ListQuery, Query},
    response::ApiResponse,
    types::{GetImageByIdResponse, GetImagesBySelectorResponse, ResourceId},
    Client, Error,
};

impl Client {
    /// Fetches available snapshots matching the label selector.
    pub async fn get_images_by_selector(
        &self,
        selector: &str,
    ) -> Result<ApiResponse<GetImagesBySelectorResponse>, Error> {
        let query = ImageQuery::snapshots().with_label_selector(selector);
        self.get_images(&query).await
    }

    /// Fetches images matching an arbitrary query.
    pub async fn get_images(
        &self,
        query: &ImageQuery,
    ) -> Result<ApiResponse<GetImagesBySelectorResponse>, Error> {
        self.get("/v1/images", Some(query)).await
    }

    /// Fetches a single image by its ID.
    pub async fn get_image_by_id(
        &self,
        id: ResourceId,
    ) -> Result<ApiResponse<GetImageByIdResponse>, Error> {
        self.get::<GetImageByIdResponse, ListQuery>(format!("/v1/images/{}", id).as_str(), None)
            .await
    }
}
