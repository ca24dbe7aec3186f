use crate::{
    query::{ListQuery, Query},
    response::ApiResponse,
    types::{GetNetworkByIdResponse, GetNetworksBySelectorResponse, ResourceId},
    Client, Error,
};

impl Client {
    /// Fetches networks matching the label selector.
    pub async fn get_network_by_selector(
        &self,
        selector: &str,
    ) -> Result<ApiResponse<GetNetworksBySelectorResponse>, Error> {
        let query = ListQuery::default().with_label_selector(selector);
        self.get("/v1/networks", Some(&query)).await
    }

    pub async fn get_network_by_id(
        &self,
        id: ResourceId,
    ) -> Result<ApiResponse<GetNetworkByIdResponse>, Error> {
        self.get::<GetNetworkByIdResponse, ListQuery>(format!("/v1/networks/{}", id).as_str(), None)
            .await
    }
}
