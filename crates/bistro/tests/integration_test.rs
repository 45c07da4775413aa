use actor_framework::ActorClient;
use bistro::clients::PlaceOrderOutcome;
use bistro::config::AppConfig;
use bistro::lifecycle::Bistro;
use bistro::model::{
    CartLineCreate, MenuItemCreate, MenuItemId, MenuItemUpdate, OrderFilter, OrderStatus,
    UserCreate, UserId,
};
use rust_decimal_macros::dec;

/// End-to-end tests against the fully assembled system: real actors, real
/// wiring, no mocks.

async fn seed_user(system: &Bistro, username: &str, group: Option<&str>) -> UserId {
    let id = system
        .users
        .create_user(UserCreate {
            username: username.to_string(),
            email: format!("{username}@example.test"),
            is_staff: false,
        })
        .await
        .expect("Failed to create user");
    if let Some(group) = group {
        system
            .users
            .join_group(id, group)
            .await
            .expect("Failed to join group");
    }
    id
}

async fn seed_dish(system: &Bistro, title: &str, price: rust_decimal::Decimal) -> MenuItemId {
    system
        .menu
        .create_item(MenuItemCreate {
            title: title.to_string(),
            price,
            featured: false,
            category: "mains".to_string(),
        })
        .await
        .expect("Failed to create menu item")
}

#[tokio::test]
async fn cart_prices_are_immune_to_catalog_changes() {
    let system = Bistro::start(AppConfig::default()).unwrap();
    let customer = seed_user(&system, "carla", None).await;
    let pasta = seed_dish(&system, "Pasta", dec!(9.50)).await;

    let first = system
        .carts
        .add_item(CartLineCreate {
            user: customer,
            menu_item: pasta,
            quantity: 2,
        })
        .await
        .unwrap();
    assert_eq!(first.unit_price, dec!(9.50));
    assert_eq!(first.line_total, dec!(19.00));

    system
        .menu
        .update_item(pasta, MenuItemUpdate {
            price: Some(dec!(12.00)),
            ..Default::default()
        })
        .await
        .unwrap();

    // Same dish again: a second, independent line at the new price.
    let second = system
        .carts
        .add_item(CartLineCreate {
            user: customer,
            menu_item: pasta,
            quantity: 1,
        })
        .await
        .unwrap();
    assert_ne!(first.id, second.id);
    assert_eq!(second.unit_price, dec!(12.00));

    let lines = system.carts.list_for(customer).await.unwrap();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].unit_price, dec!(9.50), "existing line untouched");

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn full_order_lifecycle() {
    let system = Bistro::start(AppConfig::default()).unwrap();
    let customer = seed_user(&system, "carla", None).await;
    let other_customer = seed_user(&system, "otto", None).await;
    let crew = seed_user(&system, "dana", Some("Delivery crew")).await;
    let pasta = seed_dish(&system, "Pasta", dec!(9.50)).await;
    let salad = seed_dish(&system, "Salad", dec!(4.00)).await;

    for (item, quantity) in [(pasta, 2), (salad, 1)] {
        system
            .carts
            .add_item(CartLineCreate {
                user: customer,
                menu_item: item,
                quantity,
            })
            .await
            .unwrap();
    }

    let order = match system.orders.place_order(customer).await.unwrap() {
        PlaceOrderOutcome::Placed(order) => order,
        other => panic!("expected a placed order, got {other:?}"),
    };
    assert_eq!(order.total, dec!(23.00));
    assert_eq!(order.items.len(), 2);
    assert_eq!(order.status, OrderStatus::Pending);

    // The cart was consumed by the conversion.
    assert!(system.carts.list_for(customer).await.unwrap().is_empty());

    let assigned = system.orders.assign_crew(order.id, crew).await.unwrap();
    assert_eq!(assigned.delivery_crew, Some(crew));

    let delivered = system
        .orders
        .set_status(order.id, OrderStatus::Delivered)
        .await
        .unwrap();
    assert_eq!(delivered.status, OrderStatus::Delivered);

    // Scoped views: the order is visible to everyone it belongs to, and to
    // nobody else.
    assert_eq!(system.orders.list(OrderFilter::All).await.unwrap().len(), 1);
    assert_eq!(
        system.orders.list(OrderFilter::ByCrew(crew)).await.unwrap().len(),
        1
    );
    assert_eq!(
        system
            .orders
            .list(OrderFilter::ByCustomer(customer))
            .await
            .unwrap()
            .len(),
        1
    );
    assert!(system
        .orders
        .list(OrderFilter::ByCustomer(other_customer))
        .await
        .unwrap()
        .is_empty());

    // Deleting the order takes its embedded items with it.
    system.orders.delete(order.id).await.unwrap();
    assert!(system.orders.get(order.id).await.unwrap().is_none());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn concurrent_double_submission_places_exactly_one_order() {
    let system = Bistro::start(AppConfig::default()).unwrap();
    let customer = seed_user(&system, "carla", None).await;
    let pasta = seed_dish(&system, "Pasta", dec!(9.50)).await;

    system
        .carts
        .add_item(CartLineCreate {
            user: customer,
            menu_item: pasta,
            quantity: 1,
        })
        .await
        .unwrap();

    let a = {
        let orders = system.orders.clone();
        tokio::spawn(async move { orders.place_order(customer).await })
    };
    let b = {
        let orders = system.orders.clone();
        tokio::spawn(async move { orders.place_order(customer).await })
    };

    let outcomes = [a.await.unwrap().unwrap(), b.await.unwrap().unwrap()];
    let placed = outcomes
        .iter()
        .filter(|o| matches!(o, PlaceOrderOutcome::Placed(_)))
        .count();
    let empty = outcomes
        .iter()
        .filter(|o| matches!(o, PlaceOrderOutcome::EmptyCart))
        .count();
    assert_eq!((placed, empty), (1, 1), "got {outcomes:?}");

    assert_eq!(system.orders.list(OrderFilter::All).await.unwrap().len(), 1);
    assert!(system.carts.list_for(customer).await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn placing_with_an_empty_cart_is_a_no_op() {
    let system = Bistro::start(AppConfig::default()).unwrap();
    let customer = seed_user(&system, "carla", None).await;

    let outcome = system.orders.place_order(customer).await.unwrap();
    assert_eq!(outcome, PlaceOrderOutcome::EmptyCart);
    assert!(system.orders.list(OrderFilter::All).await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn catalog_and_identity_management() {
    let system = Bistro::start(AppConfig::default()).unwrap();
    let carla = seed_user(&system, "carla", None).await;
    seed_user(&system, "dana", Some("Delivery crew")).await;
    seed_user(&system, "dave", Some("Delivery crew")).await;
    let pasta = seed_dish(&system, "Pasta", dec!(9.50)).await;
    system
        .menu
        .create_item(MenuItemCreate {
            title: "Tiramisu".to_string(),
            price: dec!(6.00),
            featured: true,
            category: "desserts".to_string(),
        })
        .await
        .unwrap();

    let updated = system
        .users
        .update_email(carla, "carla@bistro.test".to_string())
        .await
        .unwrap();
    assert_eq!(updated.email, "carla@bistro.test");
    assert_eq!(updated.username, "carla", "only the email changes");

    let crew: Vec<_> = system
        .users
        .members_of("Delivery crew")
        .await
        .unwrap()
        .into_iter()
        .map(|u| u.username)
        .collect();
    assert_eq!(crew, ["dana", "dave"]);

    let mains = system.menu.in_category("mains").await.unwrap();
    assert_eq!(mains.len(), 1);
    assert_eq!(mains[0].title, "Pasta");

    // Promoting a dish moves it into the featured listing.
    let featured = system.menu.featured().await.unwrap();
    assert_eq!(featured.len(), 1);
    assert_eq!(featured[0].title, "Tiramisu");
    assert!(system.menu.set_featured(pasta, true).await.unwrap());
    assert_eq!(system.menu.featured().await.unwrap().len(), 2);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn orders_survive_a_restart_through_the_journal() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig {
        journal_path: Some(dir.path().join("orders.jsonl")),
        ..Default::default()
    };

    let system = Bistro::start(config.clone()).unwrap();
    let customer = seed_user(&system, "carla", None).await;
    let pasta = seed_dish(&system, "Pasta", dec!(9.50)).await;
    system
        .carts
        .add_item(CartLineCreate {
            user: customer,
            menu_item: pasta,
            quantity: 2,
        })
        .await
        .unwrap();
    let order = match system.orders.place_order(customer).await.unwrap() {
        PlaceOrderOutcome::Placed(order) => order,
        other => panic!("expected a placed order, got {other:?}"),
    };
    system.shutdown().await.unwrap();

    // Second life: same journal, fresh actors.
    let system = Bistro::start(config).unwrap();
    let restored = system
        .orders
        .get(order.id)
        .await
        .unwrap()
        .expect("order lost across restart");
    assert_eq!(restored.total, order.total);
    assert_eq!(restored.items, order.items);

    // Id allocation continues after the replayed history.
    let customer = seed_user(&system, "carla", None).await;
    let pasta = seed_dish(&system, "Pasta", dec!(9.50)).await;
    system
        .carts
        .add_item(CartLineCreate {
            user: customer,
            menu_item: pasta,
            quantity: 1,
        })
        .await
        .unwrap();
    let next = match system.orders.place_order(customer).await.unwrap() {
        PlaceOrderOutcome::Placed(order) => order,
        other => panic!("expected a placed order, got {other:?}"),
    };
    assert!(next.id.0 > order.id.0);

    system.shutdown().await.unwrap();
}
