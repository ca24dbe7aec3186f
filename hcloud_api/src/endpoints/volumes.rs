use crate::{
    query::{ListQuery, Query},
    response::ApiResponse,
    types::{GetVolumeByIdResponse, GetVolumesResponse, ResourceId},
    Client, Error,
};

impl Client {
    pub async fn get_volume_by_id(
        &self,
        id: ResourceId,
    ) -> Result<ApiResponse<GetVolumeByIdResponse>, Error> {
        self.get::<GetVolumeByIdResponse, ListQuery>(format!("/v1/volumes/{}", id).as_str(), None)
            .await
    }

    /// Fetches volumes matching the label selector.
    pub async fn get_volumes(
        &self,
        selector: &str,
    ) -> Result<ApiResponse<GetVolumesResponse>, Error> {
        let query = ListQuery::default().with_label_selector(selector);
        self.get("/v1/volumes", Some(&query)).await
    }
}
