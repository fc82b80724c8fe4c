//! # Ready-to-Eat Demo
//!
//! Boots the full system, seeds it, and walks one of everything the surface
//! offers: a guest browsing the menu, a registration, a checkout, a
//! reconcile pass, and a points update.
//!
//! Run with `RUST_LOG=info cargo run` (or `debug` for full payloads).

use ready_to_eat::api::{Api, CreateOrderRequest, RegisterRequest};
use ready_to_eat::config::Config;
use ready_to_eat::lifecycle::AppSystem;
use ready_to_eat::model::OrderLine;
use ready_to_eat::seed::seed_all;
use resource_actor::tracing::setup_tracing;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    dotenv::dotenv().ok();
    setup_tracing();

    let config = Config::from_env();
    info!("Starting Ready-to-Eat backend");

    let system = AppSystem::new(config.channel_buffer);
    let seed = seed_all(&system, &config).await?;
    let api = Api::new(&system, seed.fallback_user);

    // A guest looks at the menu.
    let span = tracing::info_span!("guest_browse");
    async {
        let guest = api.guest_access().await.map_err(|e| e.to_string())?;
        info!(guest_id = %guest.guest_id, "Guest session opened");
        let menu = api.list_foods().await.map_err(|e| e.to_string())?;
        info!(items = menu.len(), "Menu fetched");
        api.logout(&guest.token).await.map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    // A user registers and checks out: two Samosas and a cup of tea.
    let span = tracing::info_span!("order_flow");
    let (token, order_id) = async {
        let session = api
            .register(RegisterRequest {
                first_name: "Asha".to_string(),
                last_name: "Verma".to_string(),
                email: "asha.verma@example.com".to_string(),
                password: "Password123!".to_string(),
                mobile: "9876501234".to_string(),
            })
            .await
            .map_err(|e| e.to_string())?;
        info!(user = %session.profile.id, "User registered");

        let subtotal = 2.0 * 15.0 + 10.0;
        let tax = subtotal * 0.15;
        let order = api
            .create_order(
                &session.token,
                CreateOrderRequest {
                    items: vec![
                        OrderLine {
                            food_id: seed.food_ids[0],
                            quantity: 2,
                            has_extra: false,
                        },
                        OrderLine {
                            food_id: seed.food_ids[8],
                            quantity: 1,
                            has_extra: false,
                        },
                    ],
                    total_amount: subtotal,
                    tax_amount: tax,
                    grand_total: subtotal + tax,
                    points_earned: (subtotal / 10.0) as i64,
                    estimated_time: 15,
                    payment_method: Some("paytm".to_string()),
                    payment_details: None,
                },
            )
            .await
            .map_err(|e| e.to_string())?;
        info!(order_number = %order.order_number, grand_total = order.grand_total, "Order placed");
        Ok::<_, String>((session.token, order.id))
    }
    .instrument(span)
    .await?;

    // Anyone may trigger a reconcile pass; right after checkout it finds
    // nothing to move.
    let transitioned = api.reconcile_orders().await.map_err(|e| e.to_string())?;
    info!(transitioned = transitioned.len(), "Reconcile pass done");

    match api.get_order(&token, order_id).await {
        Ok(order) => info!(status = %order.status, "Order fetched"),
        Err(e) => error!(error = %e, "Order fetch failed"),
    }

    // Points accrue by explicit set.
    let balance = api
        .set_points(&token, 4)
        .await
        .map_err(|e| e.to_string())?;
    info!(balance, "Points updated");

    system.shutdown().await?;
    info!("Done");
    Ok(())
}
