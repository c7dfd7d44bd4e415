pub mod error;
pub mod estate_table;
pub mod map;

pub use error::{error_alert, error_page};
pub use estate_table::estate_table;
pub use map::{estate_map, marker_feed};
