use crate::{
    query::{ListQuery, Query, ServerQuery},
    response::ApiResponse,
    types::{
        ActionResponse, CreateServerRequest, CreateServerResponse, GetServerByIdResponse,
        GetServersBySelectorResponse, ResourceId,
    },
    Client, Error,
};

impl Client {
    /// Creates a server. The returned action tracks the provisioning progress.
    pub async fn create_server(
        &self,
        request: &CreateServerRequest,
    ) -> Result<ApiResponse<CreateServerResponse>, Error> {
        self.post("/v1/servers", Some(request)).await
    }

    /// Fetches a single server by its ID.
    pub async fn get_server(
        &self,
        id: ResourceId,
    ) -> Result<ApiResponse<GetServerByIdResponse>, Error> {
        self.get::<GetServerByIdResponse, ListQuery>(format!("/v1/servers/{}", id).as_str(), None)
            .await
    }

    /// Deletes a server.
    pub async fn delete_server(&self, id: ResourceId) -> Result<ApiResponse<ActionResponse>, Error> {
        self.delete(format!("/v1/servers/{}", id).as_str()).await
    }

    /// Cuts power to a server, like pulling the plug.
    pub async fn power_off_server(
        &self,
        id: ResourceId,
    ) -> Result<ApiResponse<ActionResponse>, Error> {
        self.post::<ActionResponse, ()>(format!("/v1/servers/{}/actions/poweroff", id).as_str(), None)
            .await
    }

    /// Fetches one page of servers matching the label selector.
    ///
    /// `page` is 1-indexed. See [`Client::get_all_servers`] for all pages at once.
    pub async fn get_servers_by_selector(
        &self,
        selector: &str,
        page: u32,
        per_page: u32,
    ) -> Result<ApiResponse<GetServersBySelectorResponse>, Error> {
        let query = ServerQuery::default()
            .with_label_selector(selector)
            .with_page(page)
            .with_per_page(per_page);
        self.get_servers(&query).await
    }

    /// Fetches one page of servers matching an arbitrary query.
    pub async fn get_servers(
        &self,
        query: &ServerQuery,
    ) -> Result<ApiResponse<GetServersBySelectorResponse>, Error> {
        self.get("/v1/servers", Some(query)).await
    }
}
