//! Read-only catalog resources: locations, datacenters, and server types.

use serde::{Deserialize, Serialize};

use super::resource::{impl_identifiable, IdentifiableResource};
use super::{Meta, SearchResponse};

/// Physical location (city) hosting one or more datacenters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LocationDetail {
    #[serde(flatten)]
    pub resource: IdentifiableResource,
    /// Unique identifier, e.g. `fsn1`.
    pub name: String,
    pub description: Option<String>,
    /// ISO 3166-1 alpha-2 country code.
    pub country: Option<String>,
    pub city: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Network zone this location belongs to, e.g. `eu-central`.
    pub network_zone: Option<String>,
}

/// Datacenter within a location.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DatacenterDetail {
    #[serde(flatten)]
    pub resource: IdentifiableResource,
    /// Unique identifier, e.g. `fsn1-dc14`.
    pub name: String,
    pub description: Option<String>,
    pub location: LocationDetail,
}

/// Hardware profile a server can be created with.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ServerType {
    #[serde(flatten)]
    pub resource: IdentifiableResource,
    /// Unique identifier, e.g. `cx22`.
    pub name: String,
    pub description: Option<String>,
    pub cores: i32,
    /// Memory in GB.
    pub memory: f64,
    /// Disk size in GB.
    pub disk: i64,
    /// `shared` or `dedicated`.
    pub cpu_type: Option<String>,
    /// `x86` or `arm`.
    pub architecture: Option<String>,
    #[serde(default)]
    pub deprecated: Option<bool>,
}

impl_identifiable!(LocationDetail, DatacenterDetail, ServerType);

/// Response of `GET /v1/datacenters`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GetDatacentersResponse {
    pub datacenters: Vec<DatacenterDetail>,
    #[serde(default)]
    pub meta: Option<Meta>,
}

/// Response of `GET /v1/locations`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GetLocationsResponse {
    pub locations: Vec<LocationDetail>,
    #[serde(default)]
    pub meta: Option<Meta>,
}

/// Response of `GET /v1/server_types`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GetServerTypesResponse {
    pub server_types: Vec<ServerType>,
    #[serde(default)]
    pub meta: Option<Meta>,
}

impl SearchResponse for GetDatacentersResponse {
    fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }
}

impl SearchResponse for GetLocationsResponse {
    fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }
}

impl SearchResponse for GetServerTypesResponse {
    fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }
}
