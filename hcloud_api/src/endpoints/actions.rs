use crate::{
    query::{ActionQuery, ListQuery},
    response::ApiResponse,
    types::{ActionResponse, GetActionsResponse, ResourceId},
    Client, Error,
};

impl Client {
    /// Fetches a single action, e.g. to poll the progress of a server deletion.
    pub async fn get_action_by_id(&self, id: ResourceId) -> Result<ApiResponse<ActionResponse>, Error> {
        self.get::<ActionResponse, ListQuery>(format!("/v1/actions/{}", id).as_str(), None)
            .await
    }

    /// Fetches actions matching the query, typically a set of IDs.
    pub async fn get_actions(
        &self,
        query: &ActionQuery,
    ) -> Result<ApiResponse<GetActionsResponse>, Error> {
        self.get("/v1/actions", Some(query)).await
    }
}
