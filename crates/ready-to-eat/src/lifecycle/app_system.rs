use crate::clients::{AdminClient, FoodClient, OrderClient, SessionClient, UserClient};
use crate::{admin_actor, food_actor, order_actor, session_actor, user_actor};
use tracing::{error, info};

/// The running system: five resource actors and their clients.
///
/// # Architecture
///
/// - **User / Admin actors**: account records and credentials
/// - **Food actor**: the menu
/// - **Order actor**: orders plus the status lifecycle; depends on the user
///   and food clients for creation-time validation and price snapshots
/// - **Session actor**: token → identity records
///
/// # Example
///
/// ```ignore
/// let system = AppSystem::new(32);
///
/// let user_id = system.users.create_user(user_data).await?;
/// let order = system.orders.place_order(order_data).await?;
///
/// system.shutdown().await?;
/// ```
pub struct AppSystem {
    pub users: UserClient,
    pub admins: AdminClient,
    pub foods: FoodClient,
    pub orders: OrderClient,
    pub sessions: SessionClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl AppSystem {
    /// Creates and starts the whole system.
    ///
    /// Actors are created first (no dependencies), then spawned with their
    /// contexts injected: only the order actor has one, the pair of clients
    /// it validates against.
    pub fn new(channel_buffer: usize) -> Self {
        // 1. Create actors (no dependencies yet)
        let (user_actor, users) = user_actor::new(channel_buffer);
        let (admin_actor, admins) = admin_actor::new(channel_buffer);
        let (food_actor, foods) = food_actor::new(channel_buffer);
        let (order_actor, orders) = order_actor::new(channel_buffer);
        let (session_actor, sessions) = session_actor::new(channel_buffer);

        // 2. Start actors with injected context
        let user_handle = tokio::spawn(user_actor.run(()));
        let admin_handle = tokio::spawn(admin_actor.run(()));
        let food_handle = tokio::spawn(food_actor.run(()));
        let order_handle = tokio::spawn(order_actor.run((users.clone(), foods.clone())));
        let session_handle = tokio::spawn(session_actor.run(()));

        Self {
            users,
            admins,
            foods,
            orders,
            sessions,
            handles: vec![
                user_handle,
                admin_handle,
                food_handle,
                order_handle,
                session_handle,
            ],
        }
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping the clients closes their channels; each actor drains its
    /// queue, logs its final state, and exits. The order actor's context
    /// holds clones of the user and food clients, but the dependency graph
    /// is acyclic, so everything still unwinds: its own channel closes
    /// first, it drops its context, and the last senders disappear.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.users);
        drop(self.admins);
        drop(self.foods);
        drop(self.orders);
        drop(self.sessions);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
