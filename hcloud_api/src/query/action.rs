use url::Url;

use crate::types::ResourceId;

use super::{common::QueryCommon, Query};

/// Query for `GET /v1/actions`. Each ID is sent as its own `id` parameter.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActionQuery {
    pub common: QueryCommon,
    pub ids: Vec<ResourceId>,
    /// `running`, `success` or `error`. Repeatable.
    pub statuses: Vec<String>,
}

impl Query for ActionQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }

    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        for id in self.ids.iter() {
            url.query_pairs_mut().append_pair("id", &id.to_string());
        }
        for status in self.statuses.iter() {
            url.query_pairs_mut().append_pair("status", status);
        }
        self.common.add_to_url(&url)
    }
}

impl ActionQuery {
    pub fn with_id(mut self, id: ResourceId) -> Self {
        self.ids.push(id);
        self
    }

    pub fn with_ids(mut self, ids: &[ResourceId]) -> Self {
        self.ids.extend_from_slice(ids);
        self
    }

    pub fn with_status(mut self, status: &str) -> Self {
        self.statuses.push(status.to_string());
        self
    }
}
