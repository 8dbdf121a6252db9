pub mod authority;
pub mod policy;

pub use authority::*;
pub use policy::*;
