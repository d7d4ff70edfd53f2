mod error;
mod google_drive;
mod listing;

#[cfg(test)]
mod test_utils;

pub use error::*;
pub use google_drive::*;
pub use listing::*;
