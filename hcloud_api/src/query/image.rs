use url::Url;

use super::{common::QueryCommon, Query};

/// Query for `GET /v1/images`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ImageQuery {
    pub common: QueryCommon,
    /// `system`, `app`, `snapshot` or `backup`. Repeatable.
    pub image_types: Vec<String>,
    /// `available` or `creating`. Repeatable.
    pub statuses: Vec<String>,
    pub architecture: Option<String>,
    pub include_deprecated: Option<bool>,
}

impl Query for ImageQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }

    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        for image_type in self.image_types.iter() {
            url.query_pairs_mut().append_pair("type", image_type);
        }
        for status in self.statuses.iter() {
            url.query_pairs_mut().append_pair("status", status);
        }
        if let Some(architecture) = &self.architecture {
            url.query_pairs_mut()
                .append_pair("architecture", architecture);
        };
        if let Some(include_deprecated) = self.include_deprecated {
            url.query_pairs_mut()
                .append_pair("include_deprecated", &include_deprecated.to_string());
        };
        self.common.add_to_url(&url)
    }
}

impl ImageQuery {
    /// Available snapshots only, the filter used for server templates.
    pub fn snapshots() -> Self {
        Self::default()
            .with_image_type("snapshot")
            .with_status("available")
    }

    pub fn with_image_type(mut self, image_type: &str) -> Self {
        self.image_types.push(image_type.to_string());
        self
    }

    pub fn with_status(mut self, status: &str) -> Self {
        self.statuses.push(status.to_string());
        self
    }

    pub fn with_architecture(mut self, architecture: &str) -> Self {
        self.architecture = Some(architecture.to_string());
        self
    }

    pub fn with_include_deprecated(mut self, include_deprecated: bool) -> Self {
        self.include_deprecated = Some(include_deprecated);
        self
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use crate::query::{ImageQuery, Query};

    #[test]
    fn test_image_query() {
        let url = Url::parse("https://example.com/v1/images").unwrap();

        insta::assert_snapshot!(
            ImageQuery::snapshots()
                .with_label_selector("jenkins")
                .add_to_url(&url)
                .to_string(),
            @"https://example.com/v1/images?type=snapshot&status=available&label_selector=jenkins"
        );

        insta::assert_snapshot!(
            ImageQuery::default()
                .with_image_type("system")
                .with_architecture("arm")
                .with_include_deprecated(false)
                .add_to_url(&url)
                .to_string(),
            @"https://example.com/v1/images?type=system&architecture=arm&include_deprecated=false"
        );
    }
}
