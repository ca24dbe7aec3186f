//! Endpoint bindings, one `impl Client` block per resource family.
//!
//! Every method performs a single HTTP request and returns the raw
//! [`ApiResponse`](crate::ApiResponse); call `into_result()` on it to treat
//! non-2xx statuses as errors.

mod actions;
mod catalog;
mod firewalls;
mod images;
mod networks;
mod placement_groups;
mod primary_ips;
mod servers;
mod ssh_keys;
mod volumes;
