pub mod config;
pub mod macros;
pub mod types;
pub mod validator;
