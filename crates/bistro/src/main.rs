//! Demo binary: walks one order through the whole system.
//!
//! Run with `RUST_LOG=info cargo run` to watch the actors talk. Set
//! `BISTRO_ORDER_JOURNAL=/tmp/orders.jsonl` to see placed orders survive a
//! second run.

use actor_framework::tracing::setup_tracing;
use bistro::config::AppConfig;
use bistro::lifecycle::Bistro;
use bistro::model::{MenuItemCreate, UserCreate};
use bistro::router::Method;
use rust_decimal::Decimal;
use std::collections::HashMap;
use tracing::{info, Instrument};

fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();
    info!("Starting bistro");

    let config = AppConfig::from_env();
    let manager_group = config.roles.manager_group.clone();
    let delivery_group = config.roles.delivery_group.clone();
    let system = Bistro::start(config).map_err(|e| e.to_string())?;

    // Seed the catalog and the three people of the story.
    let span = tracing::info_span!("seeding");
    let (customer, crew) = async {
        let pasta = system
            .menu
            .create_item(MenuItemCreate {
                title: "Pasta".to_string(),
                price: Decimal::new(950, 2),
                featured: true,
                category: "mains".to_string(),
            })
            .await
            .map_err(|e| e.to_string())?;
        info!(%pasta, "Menu seeded");

        let manager = system
            .users
            .create_user(UserCreate {
                username: "mario".to_string(),
                email: "mario@bistro.test".to_string(),
                is_staff: false,
            })
            .await
            .map_err(|e| e.to_string())?;
        system
            .users
            .join_group(manager, &manager_group)
            .await
            .map_err(|e| e.to_string())?;

        let crew = system
            .users
            .create_user(UserCreate {
                username: "dana".to_string(),
                email: "dana@bistro.test".to_string(),
                is_staff: false,
            })
            .await
            .map_err(|e| e.to_string())?;
        system
            .users
            .join_group(crew, &delivery_group)
            .await
            .map_err(|e| e.to_string())?;

        let customer = system
            .users
            .create_user(UserCreate {
                username: "carla".to_string(),
                email: "carla@example.test".to_string(),
                is_staff: false,
            })
            .await
            .map_err(|e| e.to_string())?;

        info!(%manager, %crew, %customer, "Users seeded");
        Ok::<_, String>((customer, crew))
    }
    .instrument(span)
    .await?;

    // Customer fills a cart and places the order.
    let span = tracing::info_span!("ordering");
    let order_id = async {
        let added = system
            .router
            .cart(
                customer,
                Method::Post,
                &params(&[("menuitem", "1"), ("quantity", "2")]),
            )
            .await
            .map_err(|e| e.to_string())?;
        info!(status = added.status, "Cart line added");

        let placed = system
            .router
            .orders(customer, Method::Post, &HashMap::new())
            .await
            .map_err(|e| e.to_string())?;
        info!(status = placed.status, body = %placed.body, "Order placed");

        placed.body["id"]
            .as_u64()
            .map(|raw| bistro::model::OrderId(raw as u32))
            .ok_or_else(|| "order body missing id".to_string())
    }
    .instrument(span)
    .await?;

    // Manager hands the order to the crew, who delivers it.
    let span = tracing::info_span!("fulfillment");
    async {
        let manager = system
            .users
            .find_by_username("mario")
            .await
            .map_err(|e| e.to_string())?
            .ok_or_else(|| "manager vanished".to_string())?;

        system
            .router
            .order(
                manager.id,
                Method::Put,
                order_id,
                &params(&[("username", "dana")]),
            )
            .await
            .map_err(|e| e.to_string())?;
        info!(%order_id, "Crew assigned");

        let delivered = system
            .router
            .order(crew, Method::Patch, order_id, &params(&[("status", "1")]))
            .await
            .map_err(|e| e.to_string())?;
        info!(%order_id, body = %delivered.body, "Delivered");
        Ok::<_, String>(())
    }
    .instrument(span)
    .await?;

    system.shutdown().await?;
    info!("Done");
    Ok(())
}
