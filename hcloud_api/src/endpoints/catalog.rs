use crate::{
    query::{ListQuery, Query},
    response::ApiResponse,
    types::{GetDatacentersResponse, GetLocationsResponse, GetServerTypesResponse},
    Client, Error,
};

impl Client {
    /// Fetches all datacenters.
    pub async fn get_all_datacenters(&self) -> Result<ApiResponse<GetDatacentersResponse>, Error> {
        self.get::<GetDatacentersResponse, ListQuery>("/v1/datacenters", None)
            .await
    }

    /// Fetches datacenters whose name matches `name`.
    pub async fn get_all_datacenters_with_name(
        &self,
        name: &str,
    ) -> Result<ApiResponse<GetDatacentersResponse>, Error> {
        let query = ListQuery::default().with_name(name);
        self.get("/v1/datacenters", Some(&query)).await
    }

    /// Fetches locations whose name matches `name`.
    pub async fn get_all_locations_with_name(
        &self,
        name: &str,
    ) -> Result<ApiResponse<GetLocationsResponse>, Error> {
        let query = ListQuery::default().with_name(name);
        self.get("/v1/locations", Some(&query)).await
    }

    /// Fetches server types whose name matches `name`.
    pub async fn get_all_server_types_with_name(
        &self,
        name: &str,
    ) -> Result<ApiResponse<GetServerTypesResponse>, Error> {
        let query = ListQuery::default().with_name(name);
        self.get("/v1/server_types", Some(&query)).await
    }
}
