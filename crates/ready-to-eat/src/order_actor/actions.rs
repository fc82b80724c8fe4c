//! Custom operations on the order store.

use crate::model::{Order, OrderId, OrderStatus, UserId};
use chrono::{DateTime, Utc};

/// Operations addressed to a single order.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Admin override: jump to `status` regardless of elapsed time.
    /// Timestamps follow the same set-once rule as automatic transitions.
    ForceStatus {
        status: OrderStatus,
        now: DateTime<Utc>,
    },
}

/// Results of [`OrderAction`]s.
#[derive(Debug, Clone)]
pub enum OrderActionResult {
    /// The order after a `ForceStatus`.
    Forced(Order),
}

/// Operations addressed to the whole order store.
#[derive(Debug, Clone)]
pub enum OrderStoreAction {
    /// Apply the time-based transition rules to every non-terminal order.
    Reconcile { now: DateTime<Utc> },
    /// All orders owned by one user, most recent first.
    ListForUser(UserId),
}

/// Results of [`OrderStoreAction`]s.
#[derive(Debug, Clone)]
pub enum OrderStoreResult {
    /// Ids of the orders a reconcile pass transitioned.
    Reconciled(Vec<OrderId>),
    Orders(Vec<Order>),
}
