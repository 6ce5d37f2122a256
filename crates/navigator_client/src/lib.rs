//! Navigator client: wire contract and IO worker for the remote
//! navigation service.
mod client;
mod handle;
mod types;

pub use client::{ClientSettings, HttpNavigatorClient, NavigatorApi};
pub use handle::{ClientEvent, ClientHandle};
pub use types::{
    scalar_text, ClientError, NavigationCall, NavigationOptions, NavigationReply, ResultRecord,
    ServiceHealth,
};
