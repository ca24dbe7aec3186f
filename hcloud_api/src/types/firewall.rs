use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::resource::{impl_identifiable, IdentifiableResource, Labels, ResourceId};
use super::{Meta, SearchResponse};

/// Firewall with its rule set and the resources it is applied to.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FirewallDetail {
    #[serde(flatten)]
    pub resource: IdentifiableResource,
    pub name: String,
    #[serde(default)]
    pub labels: Labels,
    #[serde(default)]
    pub rules: Vec<FirewallRule>,
    #[serde(default)]
    pub applied_to: Vec<FirewallResource>,
    pub created: Option<DateTime<Utc>>,
}

/// Single firewall rule.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FirewallRule {
    /// `in` or `out`.
    pub direction: String,
    /// `tcp`, `udp`, `icmp`, `esp` or `gre`.
    pub protocol: String,
    /// Port or port range (`"80"`, `"1024-5000"`). Only set for tcp and udp.
    pub port: Option<String>,
    /// CIDR blocks allowed for inbound rules.
    #[serde(default)]
    pub source_ips: Vec<String>,
    /// CIDR blocks allowed for outbound rules.
    #[serde(default)]
    pub destination_ips: Vec<String>,
    pub description: Option<String>,
}

/// Target a firewall is applied to: a server or a label selector.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FirewallResource {
    /// `server` or `label_selector`.
    #[serde(rename = "type")]
    pub resource_type: String,
    pub server: Option<FirewallServerRef>,
    pub label_selector: Option<FirewallLabelSelector>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FirewallServerRef {
    pub id: ResourceId,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FirewallLabelSelector {
    pub selector: String,
}

impl_identifiable!(FirewallDetail);

/// Response of `GET /v1/firewalls`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GetFirewallsBySelectorResponse {
    pub firewalls: Vec<FirewallDetail>,
    #[serde(default)]
    pub meta: Option<Meta>,
}

impl SearchResponse for GetFirewallsBySelectorResponse {
    fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }
}

/// Response of `GET /v1/firewalls/{id}`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GetFirewallByIdResponse {
    pub firewall: FirewallDetail,
}
