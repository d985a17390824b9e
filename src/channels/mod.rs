//! Channel names, argument coercion and the watched/known registry.

pub mod args;
pub mod name;
pub mod registry;

pub use args::IntoChannels;
pub use name::ChannelName;
pub use registry::{ApplyReport, ChannelRegistry};
