pub mod check_price;
pub mod initialize_oracle;
pub mod owner_operations;

pub use check_price::*;
pub use initialize_oracle::*;
pub use owner_operations::*;
