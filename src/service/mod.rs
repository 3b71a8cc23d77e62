//! REST services
//!
//! One service per API resource. Each holds a shared handle to the same
//! [`Router`](crate::http::Router) and maps typed calls onto endpoint paths.
//! List endpoints take a [`PageRequest`](crate::pagination::PageRequest) so
//! they can be driven by the paginator.

mod channel;
mod guild;
mod user;

pub use channel::ChannelService;
pub use guild::GuildService;
pub use user::UserService;
