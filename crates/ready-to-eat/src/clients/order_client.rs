//! # Order Client
//!
//! Provides a high-level API for interacting with the `Order` actor.
//! Validation and price snapshotting happen in the Order actor's `on_create`
//! hook; this client's job is the typed surface and returning fully hydrated
//! orders.

use crate::model::{Order, OrderCreate, OrderId, OrderStatus, UserId};
use crate::order_actor::{
    OrderAction, OrderActionResult, OrderError, OrderStoreAction, OrderStoreResult,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::EntityError(inner) => match inner.downcast::<OrderError>() {
                Ok(err) => *err,
                Err(other) => OrderError::ActorCommunicationError(other.to_string()),
            },
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl OrderClient {
    /// Places an order and returns it fully hydrated (line snapshots
    /// included). If any line fails validation the actor persists nothing.
    #[instrument(skip(self, params))]
    pub async fn place_order(&self, params: OrderCreate) -> Result<Order, OrderError> {
        debug!(order_number = %params.order_number, lines = params.lines.len(), "place_order called");
        info!("Sending place_order to actor");

        let id = self.inner.create(params).await.map_err(Self::map_error)?;
        self.inner
            .get(id)
            .await
            .map_err(Self::map_error)?
            .ok_or_else(|| {
                OrderError::ActorCommunicationError(format!("created order {} missing", id))
            })
    }

    /// All orders owned by `user_id`, most recent first.
    #[instrument(skip(self))]
    pub async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Order>, OrderError> {
        debug!("Sending request");
        let result = self
            .inner
            .perform_store_action(OrderStoreAction::ListForUser(user_id))
            .await
            .map_err(Self::map_error)?;
        match result {
            OrderStoreResult::Orders(orders) => Ok(orders),
            other => unreachable!("ListForUser must return Orders, got {:?}", other),
        }
    }

    /// Applies the time-based status rules to every non-terminal order.
    /// Returns the ids that transitioned; a repeat call at the same instant
    /// returns none.
    #[instrument(skip(self))]
    pub async fn reconcile(&self, now: DateTime<Utc>) -> Result<Vec<OrderId>, OrderError> {
        debug!("Sending request");
        let result = self
            .inner
            .perform_store_action(OrderStoreAction::Reconcile { now })
            .await
            .map_err(Self::map_error)?;
        match result {
            OrderStoreResult::Reconciled(ids) => Ok(ids),
            other => unreachable!("Reconcile must return Reconciled, got {:?}", other),
        }
    }

    /// Admin override for an order's status.
    #[instrument(skip(self))]
    pub async fn force_status(
        &self,
        id: OrderId,
        status: OrderStatus,
        now: DateTime<Utc>,
    ) -> Result<Order, OrderError> {
        debug!("Sending request");
        let result = self
            .inner
            .perform_action(id, OrderAction::ForceStatus { status, now })
            .await
            .map_err(Self::map_error)?;
        let OrderActionResult::Forced(order) = result;
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OrderLine;
    use resource_actor::mock::{create_mock_client, expect_store};

    #[tokio::test]
    async fn reconcile_unwraps_transitioned_ids() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(client);
        let now = Utc::now();

        let task = tokio::spawn(async move { order_client.reconcile(now).await });

        let (action, responder) = expect_store(&mut receiver)
            .await
            .expect("Expected Store request");
        match action {
            OrderStoreAction::Reconcile { now: sent } => assert_eq!(sent, now),
            other => panic!("Expected Reconcile, got {:?}", other),
        }

        responder
            .send(Ok(OrderStoreResult::Reconciled(vec![
                OrderId(2),
                OrderId(5),
            ])))
            .unwrap();

        let ids = task.await.unwrap().unwrap();
        assert_eq!(ids, vec![OrderId(2), OrderId(5)]);
    }

    #[tokio::test]
    async fn place_order_surfaces_unknown_food() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(client);

        let params = OrderCreate {
            order_number: "ORD-20250115-0000AB".into(),
            user_id: UserId(1),
            lines: vec![OrderLine {
                food_id: crate::model::FoodId(999),
                quantity: 1,
                has_extra: false,
            }],
            total_amount: 15.0,
            tax_amount: 2.25,
            grand_total: 17.25,
            points_earned: 1,
            estimated_time: 15,
            payment_method: None,
            payment_details: None,
            now: Utc::now(),
        };
        let task = tokio::spawn(async move { order_client.place_order(params).await });

        match receiver.recv().await.expect("Expected Create request") {
            resource_actor::ResourceRequest::Create { respond_to, .. } => {
                respond_to
                    .send(Err(FrameworkError::EntityError(Box::new(
                        OrderError::UnknownFood(crate::model::FoodId(999)),
                    ))))
                    .unwrap();
            }
            other => panic!("Expected Create request, got {:?}", other),
        }

        let err = task.await.unwrap().unwrap_err();
        assert_eq!(err, OrderError::UnknownFood(crate::model::FoodId(999)));
    }
}
