use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Numeric identifier shared by all API resources.
pub type ResourceId = i64;

/// User-defined key/value labels attached to a resource.
pub type Labels = HashMap<String, String>;

/// Fields common to every resource returned by the API.
///
/// Embedded into resource types with `#[serde(flatten)]`, so on the wire the
/// `id` sits next to the resource's own fields.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IdentifiableResource {
    pub id: ResourceId,
}

/// Access to the embedded [`IdentifiableResource`].
pub trait Identifiable {
    fn id(&self) -> ResourceId;
}

impl Identifiable for IdentifiableResource {
    fn id(&self) -> ResourceId {
        self.id
    }
}

macro_rules! impl_identifiable {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::types::Identifiable for $ty {
                fn id(&self) -> $crate::types::ResourceId {
                    self.resource.id
                }
            }
        )+
    };
}

pub(crate) use impl_identifiable;

/// Reference to another resource by ID and type, as found in actions.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ResourceRef {
    pub id: ResourceId,
    #[serde(rename = "type")]
    pub resource_type: String,
}
