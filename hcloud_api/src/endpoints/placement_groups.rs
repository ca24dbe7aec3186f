use crate::{
    query::{ListQuery, Query},
    response::ApiResponse,
    types::{GetPlacementGroupByIdResponse, GetPlacementGroupsResponse, ResourceId},
    Client, Error,
};

impl Client {
    /// Fetches placement groups matching the label selector.
    pub async fn get_placement_groups(
        &self,
        selector: &str,
    ) -> Result<ApiResponse<GetPlacementGroupsResponse>, Error> {
        let query = ListQuery::default().with_label_selector(selector);
        self.get("/v1/placement_groups", Some(&query)).await
    }

    pub async fn get_placement_group_by_id(
        &self,
        id: ResourceId,
    ) -> Result<ApiResponse<GetPlacementGroupByIdResponse>, Error> {
        self.get::<GetPlacementGroupByIdResponse, ListQuery>(
            format!("/v1/placement_groups/{}", id).as_str(),
            None,
        )
        .await
    }
}
