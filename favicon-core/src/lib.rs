pub mod data_uri;
pub mod generate;
pub mod html;
pub mod icon;
pub mod ico;
pub mod instructions;
pub mod template;

pub use data_uri::DataUri;
pub use generate::{GenerateError, Generated, Generator};
pub use icon::{IconSpec, ICONS};
