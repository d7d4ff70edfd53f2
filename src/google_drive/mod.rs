mod api;
mod types;
mod utils;

pub use api::*;
pub use types::*;
