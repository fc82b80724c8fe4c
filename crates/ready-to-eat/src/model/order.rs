use crate::model::{FoodId, UserId};
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Minutes an order may sit in `Ready` before it is considered picked up.
pub const READY_WAIT_MINUTES: i64 = 60;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Order progression. Transitions only move forward:
/// `Current → Ready → Completed`, with `Completed` terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Current,
    Ready,
    Completed,
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Current => write!(f, "current"),
            OrderStatus::Ready => write!(f, "ready"),
            OrderStatus::Completed => write!(f, "completed"),
        }
    }
}

/// One line of an order, snapshotting the food's name and price at the
/// moment the order was placed. `item_total` is computed once from the
/// snapshot price and never recomputed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderItem {
    pub line_no: u32,
    pub food_id: FoodId,
    pub food_name: String,
    pub food_price: f64,
    pub quantity: u32,
    pub has_extra: bool,
    pub item_total: f64,
}

/// A customer order with its owned line items.
///
/// Header totals (`total_amount`, `tax_amount`, `grand_total`,
/// `points_earned`) are caller-supplied and stored as-is; the store does not
/// recompute or cross-check them. `ready_time` and `completed_time` are
/// stamped exactly once, on first entry to the corresponding status.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub id: OrderId,
    pub order_number: String,
    pub user_id: UserId,
    pub total_amount: f64,
    pub tax_amount: f64,
    pub grand_total: f64,
    pub points_earned: i64,
    /// Preparation estimate, in minutes from `order_time`.
    pub estimated_time: u32,
    pub status: OrderStatus,
    pub payment_method: Option<String>,
    pub payment_details: Option<serde_json::Value>,
    pub order_time: DateTime<Utc>,
    pub ready_time: Option<DateTime<Utc>>,
    pub completed_time: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub items: Vec<OrderItem>,
}

/// One requested line at checkout. Name/price snapshots are taken by the
/// order actor when the order is created.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderLine {
    pub food_id: FoodId,
    pub quantity: u32,
    pub has_extra: bool,
}

/// Payload for creating an order. Built by the API surface: it resolves the
/// owning user (guests fall back to the configured account), mints the
/// order number, and stamps `now` once so every timestamp in the new order
/// agrees.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub order_number: String,
    pub user_id: UserId,
    pub lines: Vec<OrderLine>,
    pub total_amount: f64,
    pub tax_amount: f64,
    pub grand_total: f64,
    pub points_earned: i64,
    pub estimated_time: u32,
    pub payment_method: Option<String>,
    pub payment_details: Option<serde_json::Value>,
    pub now: DateTime<Utc>,
}

/// Mints a human-readable order number: the creation date plus a random
/// hex suffix, e.g. `ORD-20260807-3FA2C1`. Uniqueness rests on the suffix;
/// within one day two orders collide with probability 1/16^6.
pub fn new_order_number(now: DateTime<Utc>) -> String {
    let suffix: u32 = rand::rng().random_range(0..0x0100_0000);
    format!("ORD-{}-{:06X}", now.format("%Y%m%d"), suffix)
}

impl Order {
    /// Applies the time-based transition rules to this order.
    ///
    /// Pure in `now`: given the same stored timestamps and the same `now`,
    /// repeat calls change nothing (the set-once guards keep `ready_time`
    /// and `completed_time` stable). Returns the new status when a
    /// transition fired.
    ///
    /// Rules, evaluated once per call:
    /// - `Current`: ready once `now - order_time >= estimated_time` minutes.
    /// - `Ready`: completed once `now - ready_time >= 60` minutes.
    /// - `Completed`: terminal.
    pub fn reconcile(&mut self, now: DateTime<Utc>) -> Option<OrderStatus> {
        match self.status {
            OrderStatus::Current => {
                let elapsed = now.signed_duration_since(self.order_time).num_minutes();
                if elapsed >= i64::from(self.estimated_time) {
                    self.status = OrderStatus::Ready;
                    if self.ready_time.is_none() {
                        self.ready_time = Some(now);
                    }
                    self.updated_at = now;
                    Some(OrderStatus::Ready)
                } else {
                    None
                }
            }
            OrderStatus::Ready => {
                let ready_since = self.ready_time.unwrap_or(self.order_time);
                let waited = now.signed_duration_since(ready_since).num_minutes();
                if waited >= READY_WAIT_MINUTES {
                    self.status = OrderStatus::Completed;
                    if self.completed_time.is_none() {
                        self.completed_time = Some(now);
                    }
                    self.updated_at = now;
                    Some(OrderStatus::Completed)
                } else {
                    None
                }
            }
            OrderStatus::Completed => None,
        }
    }

    /// Admin override: jump straight to `status`, bypassing the elapsed-time
    /// rules. `order_time` is never reset; `ready_time`/`completed_time`
    /// follow the same set-once rule as automatic transitions.
    pub fn force_status(&mut self, status: OrderStatus, now: DateTime<Utc>) {
        self.status = status;
        match status {
            OrderStatus::Current => {}
            OrderStatus::Ready => {
                if self.ready_time.is_none() {
                    self.ready_time = Some(now);
                }
            }
            OrderStatus::Completed => {
                if self.completed_time.is_none() {
                    self.completed_time = Some(now);
                }
            }
        }
        self.updated_at = now;
    }
}
