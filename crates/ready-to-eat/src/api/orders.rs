//! Order operations: checkout, listing, single fetch, the admin override,
//! and the reconcile entry point.
//!
//! Status-bearing reads reconcile first, so a client never sees an order the
//! clock has already moved past. That makes every read pay for a sweep; with
//! this system's volume the sweep is a single in-actor pass and the price is
//! accepted (the alternative is a background ticking task and the duplicate-
//! transition coordination that comes with it).

use crate::api::{Api, ApiError};
use crate::model::{
    new_order_number, Identity, Order, OrderCreate, OrderId, OrderLine, OrderStatus, SessionToken,
    UserId,
};
use chrono::Utc;
use resource_actor::ActorClient;
use serde::Deserialize;
use tracing::instrument;

/// Checkout payload. Totals are computed by the caller and stored verbatim;
/// the store never recomputes them.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderRequest {
    pub items: Vec<OrderLine>,
    pub total_amount: f64,
    pub tax_amount: f64,
    pub grand_total: f64,
    pub points_earned: i64,
    /// Preparation estimate in minutes.
    pub estimated_time: u32,
    pub payment_method: Option<String>,
    pub payment_details: Option<serde_json::Value>,
}

impl Api {
    /// Resolves which account an order-reading or order-writing identity
    /// acts as. Guests act as the fallback account; admins don't own orders.
    fn order_scope(&self, identity: Identity) -> Result<UserId, ApiError> {
        match identity {
            Identity::User(id) => Ok(id),
            Identity::Guest(_) => Ok(self.fallback_user),
            Identity::Admin(_) => Err(ApiError::Forbidden),
        }
    }

    /// Places an order for the caller. Guest checkouts are attributed to the
    /// fallback account. All-or-nothing: one bad food id and nothing lands.
    #[instrument(skip(self, req))]
    pub async fn create_order(
        &self,
        token: &SessionToken,
        req: CreateOrderRequest,
    ) -> Result<Order, ApiError> {
        let identity = self.identity(token).await?;
        let user_id = self.order_scope(identity)?;

        if req.items.is_empty() {
            return Err(ApiError::Validation(
                "Order must contain at least one item".to_string(),
            ));
        }

        let now = Utc::now();
        let order = self
            .orders
            .place_order(OrderCreate {
                order_number: new_order_number(now),
                user_id,
                lines: req.items,
                total_amount: req.total_amount,
                tax_amount: req.tax_amount,
                grand_total: req.grand_total,
                points_earned: req.points_earned,
                estimated_time: req.estimated_time,
                payment_method: req.payment_method,
                payment_details: req.payment_details,
                now,
            })
            .await?;
        Ok(order)
    }

    /// The caller's orders, freshest first. Guests get an empty list —
    /// orders are not tracked per guest, even though guest checkouts land on
    /// the fallback account.
    #[instrument(skip(self))]
    pub async fn list_orders(&self, token: &SessionToken) -> Result<Vec<Order>, ApiError> {
        match self.identity(token).await? {
            Identity::User(id) => {
                self.orders.reconcile(Utc::now()).await?;
                Ok(self.orders.list_for_user(id).await?)
            }
            Identity::Guest(_) => Ok(Vec::new()),
            Identity::Admin(_) => Err(ApiError::Forbidden),
        }
    }

    /// One order, scoped to the caller's own. An order outside the scope
    /// answers exactly like a missing one.
    #[instrument(skip(self))]
    pub async fn get_order(&self, token: &SessionToken, id: OrderId) -> Result<Order, ApiError> {
        let identity = self.identity(token).await?;
        let scope = self.order_scope(identity)?;

        self.orders.reconcile(Utc::now()).await?;
        let order = self
            .orders
            .get(id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Order".to_string()))?;
        if order.user_id != scope {
            return Err(ApiError::NotFound("Order".to_string()));
        }
        Ok(order)
    }

    /// Admin override: force an order to any of the three legal states,
    /// bypassing the elapsed-time rules.
    #[instrument(skip(self))]
    pub async fn force_order_status(
        &self,
        token: &SessionToken,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<Order, ApiError> {
        match self.identity(token).await? {
            Identity::Admin(_) => Ok(self.orders.force_status(id, status, Utc::now()).await?),
            Identity::User(_) | Identity::Guest(_) => Err(ApiError::Forbidden),
        }
    }

    /// Applies the time-based status rules to every non-terminal order.
    /// Callable by anyone, authenticated or not; repeat calls are no-ops
    /// thanks to the set-once timestamp guards.
    #[instrument(skip(self))]
    pub async fn reconcile_orders(&self) -> Result<Vec<OrderId>, ApiError> {
        Ok(self.orders.reconcile(Utc::now()).await?)
    }
}
