use crate::{
    query::{ListQuery, Query},
    response::ApiResponse,
    types::{GetFirewallByIdResponse, GetFirewallsBySelectorResponse, ResourceId},
    Client, Error,
};

impl Client {
    /// Fetches firewalls matching the label selector.
    pub async fn get_firewalls_by_selector(
        &self,
        selector: &str,
    ) -> Result<ApiResponse<GetFirewallsBySelectorResponse>, Error> {
        let query = ListQuery::default().with_label_selector(selector);
        self.get("/v1/firewalls", Some(&query)).await
    }

    pub async fn get_firewall_by_id(
        &self,
        id: ResourceId,
    ) -> Result<ApiResponse<GetFirewallByIdResponse>, Error> {
        self.get::<GetFirewallByIdResponse, ListQuery>(format!("/v1/firewalls/{}", id).as_str(), None)
            .await
    }
}
