//! Lifecycle tests at the client level, where `now` is explicit: the
//! transition rules, their idempotence, and the admin override, without a
//! single sleep.

use chrono::{DateTime, Duration, TimeZone, Utc};
use ready_to_eat::clients::OrderClient;
use ready_to_eat::lifecycle::AppSystem;
use ready_to_eat::model::{
    FoodCreate, FoodId, OrderCreate, OrderId, OrderLine, OrderStatus, UserCreate, UserId,
};
use ready_to_eat::order_actor::OrderError;
use resource_actor::ActorClient;

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap()
}

/// A system with one user and one food item, no API layer in the way.
async fn lifecycle_fixture() -> (AppSystem, UserId, FoodId) {
    let system = AppSystem::new(32);
    let user_id = system
        .users
        .create_user(UserCreate {
            first_name: "Asha".to_string(),
            last_name: "Verma".to_string(),
            email: "asha@example.com".to_string(),
            password_hash: "unused".to_string(),
            mobile: "9876501234".to_string(),
        })
        .await
        .unwrap();
    let food_id = system
        .foods
        .create_food(FoodCreate {
            name: "Samosa".to_string(),
            price: 15.0,
            image_path: None,
            has_extra_option: false,
            is_available: true,
        })
        .await
        .unwrap();
    (system, user_id, food_id)
}

async fn place_at(
    orders: &OrderClient,
    user_id: UserId,
    food_id: FoodId,
    at: DateTime<Utc>,
    estimated_time: u32,
) -> OrderId {
    orders
        .place_order(OrderCreate {
            order_number: ready_to_eat::model::new_order_number(at),
            user_id,
            lines: vec![OrderLine {
                food_id,
                quantity: 1,
                has_extra: false,
            }],
            total_amount: 15.0,
            tax_amount: 2.25,
            grand_total: 17.25,
            points_earned: 1,
            estimated_time,
            payment_method: None,
            payment_details: None,
            now: at,
        })
        .await
        .unwrap()
        .id
}

#[tokio::test]
async fn the_fifteen_minute_estimate_scenario() {
    let (system, user_id, food_id) = lifecycle_fixture().await;
    let id = place_at(&system.orders, user_id, food_id, t0(), 15).await;

    // One minute early: nothing moves.
    assert!(system
        .orders
        .reconcile(t0() + Duration::minutes(14))
        .await
        .unwrap()
        .is_empty());

    // T0+16: the estimate has elapsed.
    let at_ready = t0() + Duration::minutes(16);
    assert_eq!(system.orders.reconcile(at_ready).await.unwrap(), vec![id]);
    let order = system.orders.get(id).await.unwrap().unwrap();
    assert_eq!(order.status, OrderStatus::Ready);
    assert_eq!(order.ready_time, Some(at_ready));
    assert_eq!(order.completed_time, None);

    // T0+80, 64 minutes after ready_time: past the pickup window.
    let at_done = t0() + Duration::minutes(80);
    assert_eq!(system.orders.reconcile(at_done).await.unwrap(), vec![id]);
    let order = system.orders.get(id).await.unwrap().unwrap();
    assert_eq!(order.status, OrderStatus::Completed);
    assert_eq!(order.completed_time, Some(at_done));
    // The first stamp survived.
    assert_eq!(order.ready_time, Some(at_ready));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn back_to_back_reconciles_are_no_ops() {
    let (system, user_id, food_id) = lifecycle_fixture().await;
    let id = place_at(&system.orders, user_id, food_id, t0(), 15).await;

    let at = t0() + Duration::minutes(16);
    assert_eq!(system.orders.reconcile(at).await.unwrap(), vec![id]);
    // Immediately again, same instant: zero additional transitions.
    assert!(system.orders.reconcile(at).await.unwrap().is_empty());

    let order = system.orders.get(id).await.unwrap().unwrap();
    assert_eq!(order.ready_time, Some(at));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn completed_orders_never_move_again() {
    let (system, user_id, food_id) = lifecycle_fixture().await;
    let id = place_at(&system.orders, user_id, food_id, t0(), 15).await;

    system.orders.reconcile(t0() + Duration::minutes(16)).await.unwrap();
    system.orders.reconcile(t0() + Duration::minutes(80)).await.unwrap();
    let done = system.orders.get(id).await.unwrap().unwrap();

    for days in 1..=3 {
        let later = t0() + Duration::days(days);
        assert!(system.orders.reconcile(later).await.unwrap().is_empty());
    }
    let still_done = system.orders.get(id).await.unwrap().unwrap();
    assert_eq!(still_done.status, OrderStatus::Completed);
    assert_eq!(still_done.ready_time, done.ready_time);
    assert_eq!(still_done.completed_time, done.completed_time);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn each_order_advances_on_its_own_clock() {
    let (system, user_id, food_id) = lifecycle_fixture().await;
    let quick = place_at(&system.orders, user_id, food_id, t0(), 10).await;
    let slow = place_at(&system.orders, user_id, food_id, t0(), 45).await;

    // At T0+12 only the 10-minute order is due.
    let moved = system
        .orders
        .reconcile(t0() + Duration::minutes(12))
        .await
        .unwrap();
    assert_eq!(moved, vec![quick]);

    let slow_order = system.orders.get(slow).await.unwrap().unwrap();
    assert_eq!(slow_order.status, OrderStatus::Current);

    // At T0+50 the slow one catches up; the quick one is still inside its
    // pickup window.
    let moved = system
        .orders
        .reconcile(t0() + Duration::minutes(50))
        .await
        .unwrap();
    assert_eq!(moved, vec![slow]);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn forced_completion_is_terminal_for_reconciliation() {
    let (system, user_id, food_id) = lifecycle_fixture().await;
    let id = place_at(&system.orders, user_id, food_id, t0(), 15).await;

    let forced_at = t0() + Duration::minutes(2);
    let order = system
        .orders
        .force_status(id, OrderStatus::Completed, forced_at)
        .await
        .unwrap();
    assert_eq!(order.status, OrderStatus::Completed);
    assert_eq!(order.completed_time, Some(forced_at));
    assert_eq!(order.ready_time, None); // the override stamps only its target
    assert_eq!(order.order_time, t0());

    // Time-based rules leave it alone forever after.
    assert!(system
        .orders
        .reconcile(t0() + Duration::minutes(500))
        .await
        .unwrap()
        .is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn unknown_food_aborts_creation_with_nothing_stored() {
    let (system, user_id, food_id) = lifecycle_fixture().await;

    let result = system
        .orders
        .place_order(OrderCreate {
            order_number: ready_to_eat::model::new_order_number(t0()),
            user_id,
            lines: vec![
                OrderLine {
                    food_id,
                    quantity: 2,
                    has_extra: false,
                },
                OrderLine {
                    food_id: FoodId(999),
                    quantity: 1,
                    has_extra: false,
                },
            ],
            total_amount: 45.0,
            tax_amount: 6.75,
            grand_total: 51.75,
            points_earned: 4,
            estimated_time: 15,
            payment_method: None,
            payment_details: None,
            now: t0(),
        })
        .await;
    assert_eq!(result.unwrap_err(), OrderError::UnknownFood(FoodId(999)));

    // Nothing persisted, valid line included.
    assert!(system.orders.list_for_user(user_id).await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn listing_is_scoped_and_freshest_first() {
    let (system, user_id, food_id) = lifecycle_fixture().await;
    let other_user = system
        .users
        .create_user(UserCreate {
            first_name: "Ravi".to_string(),
            last_name: "Iyer".to_string(),
            email: "ravi@example.com".to_string(),
            password_hash: "unused".to_string(),
            mobile: "9876505678".to_string(),
        })
        .await
        .unwrap();

    let first = place_at(&system.orders, user_id, food_id, t0(), 15).await;
    let second = place_at(
        &system.orders,
        user_id,
        food_id,
        t0() + Duration::minutes(5),
        15,
    )
    .await;
    place_at(&system.orders, other_user, food_id, t0(), 15).await;

    let mine = system.orders.list_for_user(user_id).await.unwrap();
    assert_eq!(
        mine.iter().map(|o| o.id).collect::<Vec<_>>(),
        vec![second, first]
    );
    assert!(mine.iter().all(|o| o.user_id == user_id));

    system.shutdown().await.unwrap();
}
