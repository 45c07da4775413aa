use actor_framework::mock::MockClient;
use actor_framework::ActorClient;
use bistro::clients::{CartClient, OrderClient, PlaceOrderOutcome, UserClient};
use bistro::model::{CartLine, CartLineId, MenuItemId, OrderFilter, OrderStatus, User, UserId};
use bistro::order_actor::{OrderContext, OrderError};
use bistro::roles::RoleConfig;
use rust_decimal_macros::dec;
use std::collections::BTreeSet;

/// Real Order actor with mocked cart and user dependencies. Exercises the
/// conversion logic in `Order::on_create` and the crew validation in
/// `Order::on_update` without spawning the rest of the system.

fn line(id: u32, user: UserId, item: u32, quantity: u32, unit_price: rust_decimal::Decimal) -> CartLine {
    CartLine {
        id: CartLineId(id),
        user,
        menu_item: MenuItemId(item),
        quantity,
        unit_price,
        line_total: unit_price * rust_decimal::Decimal::from(quantity),
    }
}

fn user_in_groups(id: u32, username: &str, groups: &[&str]) -> User {
    User {
        id: UserId(id),
        username: username.to_string(),
        email: format!("{username}@example.test"),
        is_staff: false,
        groups: groups.iter().map(|g| g.to_string()).collect::<BTreeSet<_>>(),
    }
}

fn start_order_actor(
    cart_mock: &MockClient<CartLine>,
    user_mock: &MockClient<User>,
) -> (OrderClient, tokio::task::JoinHandle<()>) {
    let (actor, resource) = bistro::order_actor::new();
    let handle = tokio::spawn(actor.run(OrderContext {
        carts: CartClient::new(cart_mock.client()),
        users: UserClient::new(user_mock.client(), RoleConfig::default()),
        journal: None,
    }));
    (OrderClient::new(resource), handle)
}

#[tokio::test]
async fn placing_an_order_freezes_the_drained_cart() {
    let mut cart_mock = MockClient::<CartLine>::new();
    let user_mock = MockClient::<User>::new();
    let customer = UserId(7);

    cart_mock.expect_drain().return_ok(vec![
        line(1, customer, 3, 2, dec!(9.50)),
        line(2, customer, 5, 1, dec!(4.00)),
    ]);

    let (orders, handle) = start_order_actor(&cart_mock, &user_mock);

    let outcome = orders.place_order(customer).await.unwrap();
    let order = match outcome {
        PlaceOrderOutcome::Placed(order) => order,
        other => panic!("expected a placed order, got {other:?}"),
    };

    assert_eq!(order.placed_by, customer);
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.delivery_crew, None);
    assert_eq!(order.items.len(), 2);
    assert_eq!(order.total, dec!(23.00));
    assert_eq!(order.items[0].line_total, dec!(19.00));

    cart_mock.verify();
    drop(orders);
    handle.await.unwrap();
}

#[tokio::test]
async fn empty_cart_means_no_order_row() {
    let mut cart_mock = MockClient::<CartLine>::new();
    let user_mock = MockClient::<User>::new();
    let customer = UserId(7);

    cart_mock.expect_drain().return_ok(vec![]);

    let (orders, handle) = start_order_actor(&cart_mock, &user_mock);

    let outcome = orders.place_order(customer).await.unwrap();
    assert_eq!(outcome, PlaceOrderOutcome::EmptyCart);

    let all = orders.list(OrderFilter::All).await.unwrap();
    assert!(all.is_empty(), "a failed placement must leave no order behind");

    cart_mock.verify();
    drop(orders);
    handle.await.unwrap();
}

#[tokio::test]
async fn crew_assignment_requires_the_delivery_role() {
    let mut cart_mock = MockClient::<CartLine>::new();
    let mut user_mock = MockClient::<User>::new();
    let customer = UserId(7);

    cart_mock
        .expect_drain()
        .return_ok(vec![line(1, customer, 3, 1, dec!(9.50))]);
    // First lookup: a genuine crew member. Second: a customer. Third: nobody.
    user_mock
        .expect_get()
        .return_ok(Some(user_in_groups(21, "dana", &["Delivery crew"])));
    user_mock
        .expect_get()
        .return_ok(Some(user_in_groups(22, "carl", &[])));
    user_mock.expect_get().return_ok(None);

    let (orders, handle) = start_order_actor(&cart_mock, &user_mock);

    let order = match orders.place_order(customer).await.unwrap() {
        PlaceOrderOutcome::Placed(order) => order,
        other => panic!("expected a placed order, got {other:?}"),
    };

    let assigned = orders.assign_crew(order.id, UserId(21)).await.unwrap();
    assert_eq!(assigned.delivery_crew, Some(UserId(21)));

    let err = orders.assign_crew(order.id, UserId(22)).await.unwrap_err();
    assert!(matches!(err, OrderError::InvalidCrew(_)), "got {err:?}");

    let err = orders.assign_crew(order.id, UserId(99)).await.unwrap_err();
    assert!(matches!(err, OrderError::InvalidCrew(_)), "got {err:?}");

    // Failed assignments must not have clobbered the good one.
    let current = orders.get(order.id).await.unwrap().unwrap();
    assert_eq!(current.delivery_crew, Some(UserId(21)));

    cart_mock.verify();
    user_mock.verify();
    drop(orders);
    handle.await.unwrap();
}

#[tokio::test]
async fn status_moves_between_the_two_states() {
    let mut cart_mock = MockClient::<CartLine>::new();
    let user_mock = MockClient::<User>::new();
    let customer = UserId(7);

    cart_mock
        .expect_drain()
        .return_ok(vec![line(1, customer, 3, 1, dec!(9.50))]);

    let (orders, handle) = start_order_actor(&cart_mock, &user_mock);

    let order = match orders.place_order(customer).await.unwrap() {
        PlaceOrderOutcome::Placed(order) => order,
        other => panic!("expected a placed order, got {other:?}"),
    };

    let delivered = orders
        .set_status(order.id, OrderStatus::Delivered)
        .await
        .unwrap();
    assert_eq!(delivered.status, OrderStatus::Delivered);

    // Delivered is not terminal; a correction back to pending is allowed.
    let reverted = orders
        .set_status(order.id, OrderStatus::Pending)
        .await
        .unwrap();
    assert_eq!(reverted.status, OrderStatus::Pending);

    // Totals and items were untouched by the status churn.
    assert_eq!(reverted.total, order.total);
    assert_eq!(reverted.items, order.items);

    cart_mock.verify();
    drop(orders);
    handle.await.unwrap();
}
