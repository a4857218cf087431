pub mod factory;
pub mod node;

pub use factory::*;
pub use node::*;
