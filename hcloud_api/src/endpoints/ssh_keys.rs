use crate::{
    query::{ListQuery, Query},
    response::ApiResponse,
    types::{CreateSshKeyRequest, CreateSshKeyResponse, GetSshKeysBySelectorResponse, ResourceId},
    Client, Error,
};

impl Client {
    pub async fn create_ssh_key(
        &self,
        request: &CreateSshKeyRequest,
    ) -> Result<ApiResponse<CreateSshKeyResponse>, Error> {
        self.post("/v1/ssh_keys", Some(request)).await
    }

    /// Deletes an SSH key. The API answers `204 No Content` on success, so the
    /// body is always `None`; failures carry the error detail.
    pub async fn delete_ssh_key(&self, id: ResourceId) -> Result<ApiResponse<()>, Error> {
        self.delete(format!("/v1/ssh_keys/{}", id).as_str()).await
    }

    /// Fetches SSH keys matching the label selector.
    pub async fn get_ssh_keys_by_selector(
        &self,
        selector: &str,
    ) -> Result<ApiResponse<GetSshKeysBySelectorResponse>, Error> {
        let query = ListQuery::default().with_label_selector(selector);
        self.get("/v1/ssh_keys", Some(&query)).await
    }
}
