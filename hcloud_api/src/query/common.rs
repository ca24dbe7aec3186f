//! Shared query infrastructure: the [`Query`] trait, [`QueryCommon`] fields, and [`SortDirection`].

use std::str::FromStr;

use url::Url;

/// Trait implemented by all query builders. Provides URL serialization and
/// shared builder methods for label selectors, names, pagination, and sorting.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;

    /// Returns a mutable reference to the common query fields.
    fn get_common(&mut self) -> &mut QueryCommon;

    /// Restricts results to resources matching the label selector.
    /// The selector is sent as-is, including an empty string.
    fn with_label_selector(mut self, label_selector: &str) -> Self
    where
        Self: Sized,
    {
        self.get_common().label_selector = Some(label_selector.to_string());
        self
    }

    /// Restricts results to resources with exactly this name.
    fn with_name(mut self, name: &str) -> Self
    where
        Self: Sized,
    {
        self.get_common().name = Some(name.to_string());
        self
    }

    /// Sets the page number (1-indexed on the wire).
    fn with_page(mut self, page: u32) -> Self
    where
        Self: Sized,
    {
        self.get_common().page = Some(page);
        self
    }

    /// Sets the number of results per page.
    fn with_per_page(mut self, per_page: u32) -> Self
    where
        Self: Sized,
    {
        self.get_common().per_page = Some(per_page);
        self
    }

    /// Adds a sort key. May be repeated; earlier keys take precedence.
    fn with_sort(mut self, field: &str, direction: SortDirection) -> Self
    where
        Self: Sized,
    {
        self.get_common()
            .sort
            .push(format!("{}:{}", field, direction));
        self
    }
}

/// Sort order for API results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    /// Ascending order. This is the API default.
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        })
    }
}

impl FromStr for SortDirection {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(()),
        }
    }
}

/// Fields shared by all list queries. Unset fields are not sent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryCommon {
    pub label_selector: Option<String>,
    pub name: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    /// Sort keys in `field:direction` form.
    pub sort: Vec<String>,
}

impl QueryCommon {
    /// Appends the common parameters to the URL.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if let Some(label_selector) = &self.label_selector {
            url.query_pairs_mut()
                .append_pair("label_selector", label_selector);
        };
        if let Some(name) = &self.name {
            url.query_pairs_mut().append_pair("name", name);
        };
        if let Some(page) = self.page {
            url.query_pairs_mut()
                .append_pair("page", &page.to_string());
        };
        if let Some(per_page) = self.per_page {
            url.query_pairs_mut()
                .append_pair("per_page", &per_page.to_string());
        };
        for sort in self.sort.iter() {
            url.query_pairs_mut().append_pair("sort", sort);
        }
        url
    }
}

/// Query for list endpoints that only accept the common parameters.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListQuery {
    pub common: QueryCommon,
}

impl Query for ListQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }

    fn add_to_url(&self, url: &Url) -> Url {
        self.common.add_to_url(url)
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use super::{ListQuery, Query, SortDirection};

    #[test]
    fn test_list_query() {
        let url = Url::parse("https://example.com/v1/servers").unwrap();

        insta::assert_snapshot!(
            ListQuery::default()
                .with_label_selector("env=prod,tier!=db")
                .with_page(2)
                .with_per_page(25)
                .add_to_url(&url)
                .to_string(),
            @"https://example.com/v1/servers?label_selector=env%3Dprod%2Ctier%21%3Ddb&page=2&per_page=25"
        );

        insta::assert_snapshot!(
            ListQuery::default()
                .with_name("my-net")
                .with_sort("created", SortDirection::Desc)
                .with_sort("id", SortDirection::Asc)
                .add_to_url(&url)
                .to_string(),
            @"https://example.com/v1/servers?name=my-net&sort=created%3Adesc&sort=id%3Aasc"
        );
    }

    #[test]
    fn empty_query_leaves_url_untouched() {
        let url = Url::parse("https://example.com/v1/networks").unwrap();
        assert_eq!(
            ListQuery::default().add_to_url(&url).as_str(),
            "https://example.com/v1/networks"
        );
    }

    #[test]
    fn empty_label_selector_is_sent() {
        let url = Url::parse("https://example.com/v1/servers").unwrap();
        let url = ListQuery::default().with_label_selector("").add_to_url(&url);
        assert_eq!(url.query(), Some("label_selector="));
    }

    #[test]
    fn sort_direction_parses_and_displays() {
        assert_eq!("asc".parse::<SortDirection>(), Ok(SortDirection::Asc));
        assert_eq!("desc".parse::<SortDirection>(), Ok(SortDirection::Desc));
        assert!("up".parse::<SortDirection>().is_err());
        assert_eq!(SortDirection::Desc.to_string(), "desc");
    }
}
