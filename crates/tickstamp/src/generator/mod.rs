mod atomic;
mod policy;
mod poll;

pub use atomic::*;
pub use policy::*;
pub use poll::*;
