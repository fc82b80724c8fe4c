//! Entity trait implementation for [`Order`].
//!
//! Creation orchestration happens in `on_create`: the owning user is
//! validated and every line's food id is resolved through the context
//! clients, snapshotting name and price into the line. Any failure there
//! aborts the create before the order reaches the store, which is what makes
//! checkout all-or-nothing.

use crate::clients::{FoodClient, UserClient};
use crate::model::{Order, OrderCreate, OrderId, OrderItem, OrderStatus};
use crate::order_actor::{
    OrderAction, OrderActionResult, OrderError, OrderStoreAction, OrderStoreResult,
};
use async_trait::async_trait;
use resource_actor::{ActorClient, ActorEntity};
use std::collections::HashMap;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = (); // Orders mutate via actions, never free-form updates
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type StoreAction = OrderStoreAction;
    type StoreActionResult = OrderStoreResult;
    type Context = (UserClient, FoodClient);
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        if params.lines.is_empty() {
            return Err(OrderError::EmptyOrder);
        }
        let items = params
            .lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                let line_no = i as u32 + 1;
                if line.quantity == 0 {
                    return Err(OrderError::InvalidQuantity { line_no });
                }
                // Name/price snapshots are filled in by on_create.
                Ok(OrderItem {
                    line_no,
                    food_id: line.food_id,
                    food_name: String::new(),
                    food_price: 0.0,
                    quantity: line.quantity,
                    has_extra: line.has_extra,
                    item_total: 0.0,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            id,
            order_number: params.order_number,
            user_id: params.user_id,
            total_amount: params.total_amount,
            tax_amount: params.tax_amount,
            grand_total: params.grand_total,
            points_earned: params.points_earned,
            estimated_time: params.estimated_time,
            status: OrderStatus::Current,
            payment_method: params.payment_method,
            payment_details: params.payment_details,
            order_time: params.now,
            ready_time: None,
            completed_time: None,
            created_at: params.now,
            updated_at: params.now,
            items,
        })
    }

    async fn on_create(&mut self, ctx: &Self::Context) -> Result<(), Self::Error> {
        let (users, foods) = ctx;

        users
            .get(self.user_id)
            .await
            .map_err(|e| OrderError::ActorCommunicationError(e.to_string()))?
            .ok_or(OrderError::UnknownUser(self.user_id))?;

        for item in &mut self.items {
            let food = foods
                .get(item.food_id)
                .await
                .map_err(|e| OrderError::ActorCommunicationError(e.to_string()))?
                .ok_or(OrderError::UnknownFood(item.food_id))?;
            item.food_name = food.name;
            item.food_price = food.price;
            item.item_total = food.price * f64::from(item.quantity);
        }
        Ok(())
    }

    async fn on_update(&mut self, _update: (), _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        _ctx: &Self::Context,
    ) -> Result<OrderActionResult, Self::Error> {
        match action {
            OrderAction::ForceStatus { status, now } => {
                self.force_status(status, now);
                Ok(OrderActionResult::Forced(self.clone()))
            }
        }
    }

    async fn handle_store_action(
        store: &mut HashMap<OrderId, Self>,
        action: OrderStoreAction,
        _ctx: &Self::Context,
    ) -> Result<OrderStoreResult, Self::Error> {
        match action {
            OrderStoreAction::Reconcile { now } => {
                let mut transitioned = Vec::new();
                for order in store.values_mut() {
                    if order.reconcile(now).is_some() {
                        transitioned.push(order.id);
                    }
                }
                transitioned.sort_unstable();
                Ok(OrderStoreResult::Reconciled(transitioned))
            }
            OrderStoreAction::ListForUser(user_id) => {
                let mut orders: Vec<Order> = store
                    .values()
                    .filter(|o| o.user_id == user_id)
                    .cloned()
                    .collect();
                orders.sort_by(|a, b| b.order_time.cmp(&a.order_time).then(b.id.cmp(&a.id)));
                Ok(OrderStoreResult::Orders(orders))
            }
        }
    }
}
