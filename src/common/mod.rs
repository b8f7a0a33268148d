pub mod checksum;
pub mod error;
pub mod layout;

pub use checksum::*;
pub use error::*;
pub use layout::*;
