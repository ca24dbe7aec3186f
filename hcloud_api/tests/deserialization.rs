use hcloud_api::types::{
    CreateServerResponse, GetActionsResponse, GetAllPrimaryIpsResponse, GetDatacentersResponse,
    GetFirewallByIdResponse, GetFirewallsBySelectorResponse, GetImagesBySelectorResponse,
    GetNetworksBySelectorResponse, GetServerByIdResponse, GetServersBySelectorResponse,
    GetVolumeByIdResponse, Identifiable,
};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_server_full() {
    let json = load_fixture("get-server-by-id.json");
    let resp: GetServerByIdResponse = serde_json::from_str(&json).unwrap();

    let server = &resp.server;
    assert_eq!(server.id(), 42);
    assert_eq!(server.name, "jenkins-agent-1");
    assert_eq!(server.status, "running");
    assert_eq!(server.created.to_rfc3339(), "2016-01-30T23:50:00+00:00");
    assert_eq!(server.public_ipv4(), Some("1.2.3.4"));

    let public_net = server.public_net.as_ref().unwrap();
    assert_eq!(public_net.ipv6.as_ref().unwrap().dns_ptr[0].ip, "2001:db8::1");
    assert_eq!(public_net.firewalls[0].id, 38);
    assert_eq!(server.private_net[0].network, 10);

    let server_type = server.server_type.as_ref().unwrap();
    assert_eq!(server_type.name, "cx22");
    assert_eq!(server_type.cores, 2);

    let datacenter = server.datacenter.as_ref().unwrap();
    assert_eq!(datacenter.location.name, "fsn1");

    let image = server.image.as_ref().unwrap();
    assert_eq!(image.image_type, "snapshot");
    assert_eq!(image.labels.get("jenkins").map(String::as_str), Some("template"));
    assert!(server.placement_group.is_none());
}

#[test]
fn deserialize_create_server_response() {
    let json = load_fixture("create-server.json");
    let resp: CreateServerResponse = serde_json::from_str(&json).unwrap();

    assert_eq!(resp.server.id(), 43);
    assert_eq!(resp.server.status, "initializing");
    assert!(resp.server.server_type.is_none());
    assert_eq!(resp.action.command, "create_server");
    assert!(resp.action.is_running());
    assert!(resp.action.finished.is_none());
    assert_eq!(resp.next_actions.len(), 1);
    assert!(resp.root_password.is_none());
}

#[test]
fn deserialize_pagination_meta() {
    let json = load_fixture("get-networks-by-selector.json");
    let resp: GetNetworksBySelectorResponse = serde_json::from_str(&json).unwrap();

    let pagination = resp.meta.unwrap().pagination.unwrap();
    assert_eq!(pagination.page, 1);
    assert_eq!(pagination.per_page, 25);
    assert_eq!(pagination.previous_page, None);
    assert_eq!(pagination.next_page, None);
    assert_eq!(pagination.last_page, Some(1));
    assert_eq!(pagination.total_entries, "1");
}

#[test]
fn deserialize_numeric_total_entries() {
    let json = load_fixture("get-networks-by-selector-empty.json");
    let resp: GetNetworksBySelectorResponse = serde_json::from_str(&json).unwrap();

    assert!(resp.networks.is_empty());
    assert_eq!(resp.meta.unwrap().pagination.unwrap().total_entries, "0");
}

#[test]
fn deserialize_list_without_meta() {
    let resp: GetServersBySelectorResponse = serde_json::from_str(r#"{"servers": []}"#).unwrap();
    assert!(resp.servers.is_empty());
    assert!(resp.meta.is_none());
}

#[test]
fn deserialize_images_with_defaults() {
    let json = load_fixture("get-images-by-selector.json");
    let resp: GetImagesBySelectorResponse = serde_json::from_str(&json).unwrap();

    assert_eq!(resp.images.len(), 2);
    assert_eq!(resp.images[0].description.as_deref(), Some("jenkins-agent-template"));
    assert_eq!(resp.images[0].architecture.as_deref(), Some("x86"));

    let minimal = &resp.images[1];
    assert_eq!(minimal.id(), 4712);
    assert_eq!(minimal.image_type, "snapshot");
    assert_eq!(minimal.status, "available");
    assert!(minimal.name.is_none());
    assert!(minimal.labels.is_empty());
}

#[test]
fn deserialize_primary_ips() {
    let json = load_fixture("get-primary-ips-by-selector.json");
    let resp: GetAllPrimaryIpsResponse = serde_json::from_str(&json).unwrap();

    let ip = &resp.primary_ips[0];
    assert_eq!(ip.id(), 42);
    assert_eq!(ip.ip, "1.2.3.4");
    assert!(ip.assignee_id.is_none());
    assert_eq!(ip.assignee_type, "server");
    assert_eq!(ip.ip_type, "ipv4");
    assert_eq!(ip.dns_ptr[0].dns_ptr, "server.example.com");
    assert_eq!(ip.datacenter.as_ref().unwrap().name, "fsn1-dc14");
}

#[test]
fn deserialize_firewalls() {
    let json = load_fixture("get-firewalls-by-selector.json");
    let resp: GetFirewallsBySelectorResponse = serde_json::from_str(&json).unwrap();

    let firewall = &resp.firewalls[0];
    assert_eq!(firewall.id(), 3029857349);
    assert_eq!(firewall.rules[0].port.as_deref(), Some("22"));
    assert_eq!(firewall.rules[1].protocol, "icmp");
    assert!(firewall.rules[1].port.is_none());
    assert_eq!(firewall.rules[1].source_ips[1], "::/0");
    assert_eq!(firewall.applied_to[0].resource_type, "label_selector");
    assert_eq!(
        firewall.applied_to[0].label_selector.as_ref().unwrap().selector,
        "jenkins=true"
    );

    let json = load_fixture("get-firewall-by-id.json");
    let resp: GetFirewallByIdResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.firewall.applied_to[0].server.as_ref().unwrap().id, 42);
    assert_eq!(resp.firewall.rules[1].port.as_deref(), Some("80-85"));
}

#[test]
fn deserialize_detached_volume() {
    let json = load_fixture("get-volume-by-id.json");
    let resp: GetVolumeByIdResponse = serde_json::from_str(&json).unwrap();

    assert_eq!(resp.volume.id(), 4711);
    assert!(resp.volume.server.is_none());
    assert!(resp.volume.location.is_none());
    assert_eq!(resp.volume.status, "creating");
}

#[test]
fn deserialize_datacenters() {
    let json = load_fixture("get-datacenters.json");
    let resp: GetDatacentersResponse = serde_json::from_str(&json).unwrap();

    assert_eq!(resp.datacenters[0].id(), 4);
    assert_eq!(resp.datacenters[0].location.id(), 1);
    assert_eq!(resp.datacenters[0].location.country.as_deref(), Some("DE"));
}

#[test]
fn deserialize_action_error() {
    let json = load_fixture("get-actions.json");
    let resp: GetActionsResponse = serde_json::from_str(&json).unwrap();

    assert!(resp.actions[0].is_success());
    assert_eq!(resp.actions[0].resources[0].resource_type, "server");
    let failed = &resp.actions[1];
    assert!(!failed.is_success());
    assert_eq!(failed.error.as_ref().unwrap().code, "action_failed");
}

#[test]
fn deserialize_missing_required_fields_returns_error() {
    let json = r#"{"server": {"id": 1, "status": "running"}}"#;
    let result = serde_json::from_str::<GetServerByIdResponse>(json);
    assert!(result.is_err());
}
