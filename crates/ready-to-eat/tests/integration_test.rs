//! Full end-to-end tests with all real actors: the API surface exactly as a
//! transport layer would drive it.

use ready_to_eat::api::{
    Api, ApiError, CreateOrderRequest, LoginRequest, ProfileResponse, RegisterRequest,
};
use ready_to_eat::api::{AdminLoginRequest, ChangePasswordRequest};
use ready_to_eat::config::Config;
use ready_to_eat::lifecycle::AppSystem;
use ready_to_eat::model::{OrderLine, OrderStatus, SessionToken};
use ready_to_eat::seed::{seed_all, SeedData};

async fn booted() -> (AppSystem, Api, SeedData, Config) {
    let config = Config::default();
    let system = AppSystem::new(config.channel_buffer);
    let seed = seed_all(&system, &config).await.expect("seed failed");
    let api = Api::new(&system, seed.fallback_user);
    (system, api, seed, config)
}

fn register_request(email: &str, mobile: &str) -> RegisterRequest {
    RegisterRequest {
        first_name: "Asha".to_string(),
        last_name: "Verma".to_string(),
        email: email.to_string(),
        password: "Password123!".to_string(),
        mobile: mobile.to_string(),
    }
}

/// Two Samosas (id 1, 15.00) and one Cup of Tea (id 9, 10.00).
fn sample_order(seed: &SeedData) -> CreateOrderRequest {
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
        total_amount: 40.0,
        tax_amount: 6.0,
        grand_total: 46.0,
        points_earned: 4,
        estimated_time: 15,
        payment_method: Some("paytm".to_string()),
        payment_details: Some(serde_json::json!({ "paytmNumber": "9876501234" })),
    }
}

#[tokio::test]
async fn register_login_profile_round_trip() {
    let (system, api, _seed, _config) = booted().await;

    let session = api
        .register(register_request("asha@example.com", "9876501234"))
        .await
        .expect("register failed");
    assert_eq!(session.profile.email, "asha@example.com");
    assert_eq!(session.profile.points, 0);

    match api.profile(&session.token).await.unwrap() {
        ProfileResponse::User(profile) => assert_eq!(profile.first_name, "Asha"),
        other => panic!("expected user profile, got {:?}", other),
    }

    // Same email again: conflict, 409.
    let err = api
        .register(register_request("asha@example.com", "9876501234"))
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 409);

    // Wrong password: 401, and the message gives nothing away.
    let err = api
        .login(LoginRequest {
            email: "asha@example.com".to_string(),
            password: "Password123?".to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(err, ApiError::InvalidCredentials);

    // Unknown email answers identically.
    let err = api
        .login(LoginRequest {
            email: "nobody@example.com".to_string(),
            password: "Password123!".to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(err, ApiError::InvalidCredentials);

    let relogin = api
        .login(LoginRequest {
            email: "asha@example.com".to_string(),
            password: "Password123!".to_string(),
        })
        .await
        .expect("login failed");
    assert_eq!(relogin.profile.id, session.profile.id);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn rejected_registration_leaves_no_user_behind() {
    let (system, api, _seed, _config) = booted().await;

    // `a@b` has no TLD.
    let err = api
        .register(register_request("a@b", "9876501234"))
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 400);
    assert!(system.users.find_by_email("a@b").await.unwrap().is_none());

    let weak_passwords = [
        "short1!",      // < 8 chars
        "password123!", // no uppercase
        "PASSWORD123!", // no lowercase
        "Password!!!!", // no digit
        "Password1234", // no symbol
    ];
    for password in weak_passwords {
        let mut req = register_request("asha@example.com", "9876501234");
        req.password = password.to_string();
        let err = api.register(req).await.unwrap_err();
        assert_eq!(err.status_code(), 400, "password {:?} should be rejected", password);
    }

    let err = api
        .register(register_request("asha@example.com", "12345"))
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 400);

    // None of the rejected attempts created the account.
    assert!(system
        .users
        .find_by_email("asha@example.com")
        .await
        .unwrap()
        .is_none());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn guest_browses_and_orders_via_the_fallback_account() {
    let (system, api, seed, _config) = booted().await;

    let guest = api.guest_access().await.unwrap();
    assert!(guest.guest_id.starts_with("guest_"));

    match api.profile(&guest.token).await.unwrap() {
        ProfileResponse::Guest { guest_id } => assert_eq!(guest_id, guest.guest_id),
        other => panic!("expected guest profile, got {:?}", other),
    }

    let menu = api.list_foods().await.unwrap();
    assert_eq!(menu.len(), 14);
    assert_eq!(menu[0].name, "Samosa");
    assert_eq!(menu[0].price, 15.0);

    // Guest checkout lands on the fallback account...
    let order = api.create_order(&guest.token, sample_order(&seed)).await.unwrap();
    assert_eq!(order.user_id, seed.fallback_user);

    // ...and the guest can fetch it back (shared fallback scope)...
    let fetched = api.get_order(&guest.token, order.id).await.unwrap();
    assert_eq!(fetched.order_number, order.order_number);

    // ...but the listing stays empty: orders are not tracked per guest.
    assert!(api.list_orders(&guest.token).await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn checkout_snapshots_lines_and_stores_totals_verbatim() {
    let (system, api, seed, _config) = booted().await;

    let session = api
        .register(register_request("asha@example.com", "9876501234"))
        .await
        .unwrap();
    let order = api.create_order(&session.token, sample_order(&seed)).await.unwrap();

    assert!(order.order_number.starts_with("ORD-"));
    assert_eq!(order.status, OrderStatus::Current);
    assert_eq!(order.items.len(), 2);

    // Line snapshots: 2 x 15.00 Samosa, 1 x 10.00 Cup of Tea.
    assert_eq!(order.items[0].food_name, "Samosa");
    assert_eq!(order.items[0].food_price, 15.0);
    assert_eq!(order.items[0].item_total, 30.0);
    assert_eq!(order.items[1].food_name, "Cup of Tea");
    assert_eq!(order.items[1].item_total, 10.0);

    // Header totals are caller-supplied, stored untouched.
    assert_eq!(order.total_amount, 40.0);
    assert_eq!(order.tax_amount, 6.0);
    assert_eq!(order.grand_total, 46.0);
    assert_eq!(order.points_earned, 4);

    let listed = api.list_orders(&session.token).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, order.id);

    // A different account cannot see it; the answer is indistinguishable
    // from a missing order.
    let other = api
        .register(register_request("ravi@example.com", "9876505678"))
        .await
        .unwrap();
    let err = api.get_order(&other.token, order.id).await.unwrap_err();
    assert_eq!(err.status_code(), 404);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn checkout_with_an_unknown_food_persists_nothing() {
    let (system, api, seed, _config) = booted().await;

    let session = api
        .register(register_request("asha@example.com", "9876501234"))
        .await
        .unwrap();

    let mut req = sample_order(&seed);
    req.items.push(OrderLine {
        food_id: ready_to_eat::model::FoodId(999),
        quantity: 1,
        has_extra: false,
    });
    let err = api.create_order(&session.token, req).await.unwrap_err();
    assert_eq!(err.status_code(), 404);

    // All-or-nothing: the valid lines did not land either.
    assert!(api.list_orders(&session.token).await.unwrap().is_empty());

    // Empty orders are caught before the store sees them.
    let mut req = sample_order(&seed);
    req.items.clear();
    let err = api.create_order(&session.token, req).await.unwrap_err();
    assert_eq!(err.status_code(), 400);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn points_are_set_not_incremented_and_never_negative() {
    let (system, api, _seed, _config) = booted().await;

    let session = api
        .register(register_request("asha@example.com", "9876501234"))
        .await
        .unwrap();

    assert_eq!(api.get_points(&session.token).await.unwrap(), 0);
    assert_eq!(api.set_points(&session.token, 40).await.unwrap(), 40);
    assert_eq!(api.set_points(&session.token, 25).await.unwrap(), 25);

    let err = api.set_points(&session.token, -5).await.unwrap_err();
    assert_eq!(err.status_code(), 400);
    // Rejection left the balance alone.
    assert_eq!(api.get_points(&session.token).await.unwrap(), 25);

    // Guests have no balance to read or write.
    let guest = api.guest_access().await.unwrap();
    assert_eq!(
        api.get_points(&guest.token).await.unwrap_err(),
        ApiError::Forbidden
    );
    assert_eq!(
        api.set_points(&guest.token, 10).await.unwrap_err(),
        ApiError::Forbidden
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn only_admins_force_order_status() {
    let (system, api, seed, config) = booted().await;

    let session = api
        .register(register_request("asha@example.com", "9876501234"))
        .await
        .unwrap();
    let order = api.create_order(&session.token, sample_order(&seed)).await.unwrap();

    // The order's owner cannot override the lifecycle.
    let err = api
        .force_order_status(&session.token, order.id, OrderStatus::Ready)
        .await
        .unwrap_err();
    assert_eq!(err, ApiError::Forbidden);

    let admin = api
        .admin_login(AdminLoginRequest {
            username: config.admin_username.clone(),
            password: config.admin_password.clone(),
        })
        .await
        .expect("admin login failed");
    match api.profile(&admin.token).await.unwrap() {
        ProfileResponse::Admin(profile) => assert_eq!(profile.role, "admin"),
        other => panic!("expected admin profile, got {:?}", other),
    }

    let forced = api
        .force_order_status(&admin.token, order.id, OrderStatus::Ready)
        .await
        .unwrap();
    assert_eq!(forced.status, OrderStatus::Ready);
    assert!(forced.ready_time.is_some());
    assert_eq!(forced.order_time, order.order_time);

    // Admins hold no orders of their own.
    assert_eq!(
        api.list_orders(&admin.token).await.unwrap_err(),
        ApiError::Forbidden
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn logout_clears_the_identity_and_is_idempotent() {
    let (system, api, _seed, _config) = booted().await;

    let session = api
        .register(register_request("asha@example.com", "9876501234"))
        .await
        .unwrap();
    assert!(api.profile(&session.token).await.is_ok());

    api.logout(&session.token).await.unwrap();
    assert_eq!(
        api.profile(&session.token).await.unwrap_err(),
        ApiError::Unauthenticated
    );

    // Logging out again, or with a token that never existed, still succeeds.
    api.logout(&session.token).await.unwrap();
    api.logout(&SessionToken("deadbeefdeadbeefdeadbeefdeadbeef".to_string()))
        .await
        .unwrap();

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn change_password_requires_the_current_one() {
    let (system, api, _seed, _config) = booted().await;

    let session = api
        .register(register_request("asha@example.com", "9876501234"))
        .await
        .unwrap();

    let err = api
        .change_password(
            &session.token,
            ChangePasswordRequest {
                current_password: "WrongOld1!".to_string(),
                new_password: "Fresh123!".to_string(),
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err, ApiError::InvalidCredentials);

    api.change_password(
        &session.token,
        ChangePasswordRequest {
            current_password: "Password123!".to_string(),
            new_password: "Fresh123!".to_string(),
        },
    )
    .await
    .unwrap();

    // Old password is dead, new one works.
    assert!(api
        .login(LoginRequest {
            email: "asha@example.com".to_string(),
            password: "Password123!".to_string(),
        })
        .await
        .is_err());
    assert!(api
        .login(LoginRequest {
            email: "asha@example.com".to_string(),
            password: "Fresh123!".to_string(),
        })
        .await
        .is_ok());

    system.shutdown().await.unwrap();
}
