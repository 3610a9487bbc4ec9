mod layout;
#[cfg(feature = "serde")]
mod serde;
mod timestamp;

pub use layout::*;
pub use timestamp::*;
