pub mod descriptor;
pub mod registry;
pub mod resolver;
pub mod store;
pub mod validator;

pub use descriptor::game_descriptor;
pub use resolver::PathResolver;
