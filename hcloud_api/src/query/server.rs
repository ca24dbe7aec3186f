use url::Url;

use super::{common::QueryCommon, Query};

/// Query for `GET /v1/servers`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ServerQuery {
    pub common: QueryCommon,
    /// Server states to match, e.g. `running` or `off`. Repeatable.
    pub statuses: Vec<String>,
}

impl Query for ServerQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }

    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        for status in self.statuses.iter() {
            url.query_pairs_mut().append_pair("status", status);
        }
        url
    }
}

impl ServerQuery {
    pub fn with_status(mut self, status: &str) -> Self {
        self.statuses.push(status.to_string());
        self
    }

    pub fn with_statuses(mut self, statuses: &[String]) -> Self {
        self.statuses.extend_from_slice(statuses);
        self
    }
}
