mod common;
pub use self::common::{ListQuery, Query, QueryCommon, SortDirection};

mod action;
pub use self::action::ActionQuery;

mod image;
pub use self::image::ImageQuery;

mod server;
pub use self::server::ServerQuery;
