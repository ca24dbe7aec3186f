mod meta;
pub use self::meta::{ErrorDetail, ErrorResponse, Meta, Pagination, SearchResponse};

mod resource;
pub use self::resource::{Identifiable, IdentifiableResource, Labels, ResourceId, ResourceRef};

mod catalog;
pub use self::catalog::{
    DatacenterDetail, GetDatacentersResponse, GetLocationsResponse, GetServerTypesResponse,
    LocationDetail, ServerType,
};

mod action;
pub use self::action::{ActionDetail, ActionResponse, GetActionsResponse};

mod firewall;
pub use self::firewall::{
    FirewallDetail, FirewallLabelSelector, FirewallResource, FirewallRule, FirewallServerRef,
    GetFirewallByIdResponse, GetFirewallsBySelectorResponse,
};

mod image;
pub use self::image::{GetImageByIdResponse, GetImagesBySelectorResponse, ImageDetail};

mod network;
pub use self::network::{
    GetNetworkByIdResponse, GetNetworksBySelectorResponse, NetworkDetail, SubnetDetail,
};

mod placement_group;
pub use self::placement_group::{
    GetPlacementGroupByIdResponse, GetPlacementGroupsResponse, PlacementGroupDetail,
};

mod primary_ip;
pub use self::primary_ip::{DnsPtr, GetAllPrimaryIpsResponse, PrimaryIpDetail};

mod server;
pub use self::server::{
    AppliedFirewall, CreateServerRequest, CreateServerResponse, FirewallRef,
    GetServerByIdResponse, GetServersBySelectorResponse, Ipv4Detail, Ipv6Detail, PrivateNet,
    PublicNet, PublicNetRequest, ServerDetail,
};

mod ssh_key;
pub use self::ssh_key::{
    CreateSshKeyRequest, CreateSshKeyResponse, GetSshKeysBySelectorResponse, SshKeyDetail,
};

mod volume;
pub use self::volume::{GetVolumeByIdResponse, GetVolumesResponse, VolumeDetail};
