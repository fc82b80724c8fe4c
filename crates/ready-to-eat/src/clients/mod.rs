//! Type-safe wrappers over the generic [`resource_actor::ResourceClient`].
//!
//! Each client exposes the domain's vocabulary (`place_order`,
//! `find_by_email`, `resolve`) and maps [`resource_actor::FrameworkError`]
//! back into the owning actor's typed error. The standard `get`/`delete`
//! surface comes from the [`resource_actor::ActorClient`] trait.

pub mod admin_client;
pub mod food_client;
pub mod order_client;
pub mod session_client;
pub mod user_client;

pub use admin_client::AdminClient;
pub use food_client::FoodClient;
pub use order_client::OrderClient;
pub use session_client::SessionClient;
pub use user_client::UserClient;
