//! # System Lifecycle
//!
//! Builds the running system: spawns the four actors, wires their contexts,
//! replays the order journal, and hands out clients and the router. Shutdown
//! is cooperative: dropping the clients closes the request channels and each
//! actor drains its loop and exits.

use crate::clients::{CartClient, MenuClient, OrderClient, UserClient};
use crate::config::AppConfig;
use crate::journal::{self, OrderJournal};
use crate::order_actor::OrderContext;
use crate::router::Router;
use crate::{cart_actor, menu_actor, order_actor, user_actor};
use std::sync::Arc;
use tracing::{error, info};

/// The assembled restaurant backend.
///
/// Actors are spawned once at startup and run until their channels close.
/// Dependency wiring follows the context-injection pattern: actors are
/// created first, then each is started with the clients it needs, so the
/// dependency graph (cart → menu, order → cart + users) is explicit at the
/// single place the system is assembled.
pub struct Bistro {
    pub users: UserClient,
    pub menu: MenuClient,
    pub carts: CartClient,
    pub orders: OrderClient,
    pub router: Router,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl Bistro {
    /// Starts every actor and replays the order journal, if one is configured.
    ///
    /// Fails only if the journal file exists but cannot be opened or read;
    /// starting without the configured durable history would silently fork it.
    pub fn start(config: AppConfig) -> std::io::Result<Self> {
        let (user_actor, user_resource) = user_actor::new();
        let (menu_actor, menu_resource) = menu_actor::new();
        let (cart_actor, cart_resource) = cart_actor::new();

        let (order_actor, order_resource, journal) = match &config.journal_path {
            Some(path) => {
                let (orders, next_id) = journal::replay(path)?;
                let (actor, resource) = order_actor::with_store(orders, next_id);
                (actor, resource, Some(Arc::new(OrderJournal::open(path)?)))
            }
            None => {
                let (actor, resource) = order_actor::new();
                (actor, resource, None)
            }
        };

        let users = UserClient::new(user_resource, config.roles.clone());
        let menu = MenuClient::new(menu_resource);
        let carts = CartClient::new(cart_resource);
        let orders = OrderClient::new(order_resource);

        let handles = vec![
            tokio::spawn(user_actor.run(())),
            tokio::spawn(menu_actor.run(())),
            tokio::spawn(cart_actor.run(menu.clone())),
            tokio::spawn(order_actor.run(OrderContext {
                carts: carts.clone(),
                users: users.clone(),
                journal,
            })),
        ];

        let router = Router::new(users.clone(), carts.clone(), orders.clone());
        info!(journaled = config.journal_path.is_some(), "System started");

        Ok(Self {
            users,
            menu,
            carts,
            orders,
            router,
            handles,
        })
    }

    /// Gracefully shuts the system down.
    ///
    /// Dropping the clients (including the router's copies) closes the
    /// request channels; actors holding clients in their contexts cascade:
    /// the order actor exits first, releasing its cart and user clients,
    /// which lets the remaining actors drain and exit in turn.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down");
        drop(self.router);
        drop(self.orders);
        drop(self.carts);
        drop(self.menu);
        drop(self.users);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = ?e, "Actor task failed");
                return Err(format!("Actor task failed: {e:?}"));
            }
        }
        info!("Shutdown complete");
        Ok(())
    }
}
