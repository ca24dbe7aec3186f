use crate::{
    query::{ListQuery, Query},
    response::ApiResponse,
    types::GetAllPrimaryIpsResponse,
    Client, Error,
};

impl Client {
    /// Fetches one page of Primary IPs matching the label selector.
    ///
    /// `page` is 1-indexed. See [`Client::get_all_primary_ips`] for all pages at once.
    pub async fn get_primary_ips_by_selector(
        &self,
        selector: &str,
        page: u32,
        per_page: u32,
    ) -> Result<ApiResponse<GetAllPrimaryIpsResponse>, Error> {
        let query = ListQuery::default()
            .with_label_selector(selector)
            .with_page(page)
            .with_per_page(per_page);
        self.get("/v1/primary_ips", Some(&query)).await
    }
}
