//! Pure domain data structures.
//!
//! Entity structs, their creation/update DTOs, and the typed identifiers.
//! Behavior that belongs to the data itself (the order lifecycle rules,
//! session expiry) lives here too; everything message-passing related lives
//! in the actor modules.

pub mod admin;
pub mod food;
pub mod identity;
pub mod order;
pub mod session;
pub mod user;

pub use admin::{Admin, AdminCreate, AdminId, AdminProfile};
pub use food::{FoodCreate, FoodId, FoodItem};
pub use identity::{new_guest_id, Identity};
pub use order::{
    new_order_number, Order, OrderCreate, OrderId, OrderItem, OrderLine, OrderStatus,
};
pub use session::{new_session_token, Durability, Session, SessionCreate, SessionToken};
pub use user::{User, UserCreate, UserId, UserProfile, UserUpdate};
