//! # Role-Scoped Router
//!
//! Maps (method, role) onto domain operations. The dispatch tables are pure
//! total functions over two small enums: every cell is written out, and
//! every unwired cell is an explicit `Deny`. There is no registry to mutate
//! and nothing to forget at startup; adding a route is a compile-time change.
//!
//! The router is also the only place raw strings are interpreted: quantity,
//! status literals, and usernames are parsed here, and the actors below only
//! ever see typed values.
//!
//! On single-resource routes the existence check runs before the role check,
//! so a request for a missing order is 404 for everyone rather than 403 for
//! some; the uniform ordering keeps responses from leaking ownership.

use crate::cart_actor::CartError;
use crate::clients::{CartClient, OrderClient, PlaceOrderOutcome, UserClient};
use crate::error::ApiError;
use crate::model::{
    CartLine, CartLineCreate, MenuItemId, Order, OrderFilter, OrderId, OrderStatus, UserId,
};
use crate::order_actor::OrderError;
use crate::query::{self, Key, QueryParams};
use crate::roles::Role;
use crate::user_actor::UserError;
use actor_framework::ActorClient;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde_json::json;
use std::collections::HashMap;
use std::str::FromStr;

/// The request methods the router understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

/// Operations on the cart collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOp {
    /// List the caller's own lines.
    List,
    /// Add a line to the caller's cart.
    Add,
    /// Empty the caller's cart.
    Clear,
    Deny,
}

/// Operations on the orders collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrdersOp {
    /// List orders visible to the caller's role.
    ListScoped,
    /// Convert the caller's cart into an order.
    Place,
    Deny,
}

/// Operations on a single order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderOp {
    /// View the frozen items of an order the caller placed.
    ViewItems,
    /// Assign a delivery crew member.
    AssignCrew,
    /// Move the order between fulfillment states.
    UpdateStatus,
    /// Delete the order (items go with it).
    Remove,
    Deny,
}

/// Cart routes belong to customers; staff roles have no cart.
pub fn route_cart(method: Method, role: Role) -> CartOp {
    match (method, role) {
        (Method::Get, Role::Customer) => CartOp::List,
        (Method::Post, Role::Customer) => CartOp::Add,
        (Method::Delete, Role::Customer) => CartOp::Clear,
        (Method::Put, _) | (Method::Patch, _) => CartOp::Deny,
        (_, Role::Manager) | (_, Role::Delivery) => CartOp::Deny,
    }
}

/// Everyone can list (scoped); only customers can place.
pub fn route_orders(method: Method, role: Role) -> OrdersOp {
    match (method, role) {
        (Method::Get, _) => OrdersOp::ListScoped,
        (Method::Post, Role::Customer) => OrdersOp::Place,
        (Method::Post, _) => OrdersOp::Deny,
        (Method::Put, _) | (Method::Patch, _) | (Method::Delete, _) => OrdersOp::Deny,
    }
}

/// Single-order routes. PATCH is shared between managers and the assigned
/// crew member; the ownership half of that check happens at execution time.
pub fn route_order(method: Method, role: Role) -> OrderOp {
    match (method, role) {
        (Method::Get, Role::Customer) => OrderOp::ViewItems,
        (Method::Get, _) => OrderOp::Deny,
        (Method::Put, Role::Manager) => OrderOp::AssignCrew,
        (Method::Put, _) => OrderOp::Deny,
        (Method::Patch, Role::Manager) | (Method::Patch, Role::Delivery) => OrderOp::UpdateStatus,
        (Method::Patch, Role::Customer) => OrderOp::Deny,
        (Method::Delete, Role::Manager) => OrderOp::Remove,
        (Method::Delete, _) => OrderOp::Deny,
        (Method::Post, _) => OrderOp::Deny,
    }
}

/// A routed response: status code plus JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: serde_json::Value,
}

impl ApiResponse {
    fn ok(body: serde_json::Value) -> Self {
        Self { status: 200, body }
    }

    fn created(body: serde_json::Value) -> Self {
        Self { status: 201, body }
    }
}

/// Parses a quantity body value: a positive whole number, with or without a
/// trailing decimal point ("3" and "3.0" are both fine, "1.5" is not).
fn parse_quantity(raw: &str) -> Option<u32> {
    let value = Decimal::from_str(raw).ok()?;
    if value <= Decimal::ZERO || value.fract() != Decimal::ZERO {
        return None;
    }
    value.to_u32()
}

fn require<'a>(params: &'a HashMap<String, String>, field: &str) -> Result<&'a str, ApiError> {
    params
        .get(field)
        .map(String::as_str)
        .ok_or_else(|| ApiError::Validation { field: field.to_string() })
}

fn cart_key(line: &CartLine, field: &str) -> Option<Key> {
    match field {
        "quantity" => Some(Key::Number(Decimal::from(line.quantity))),
        "price" => Some(Key::Number(line.unit_price)),
        "total" => Some(Key::Number(line.line_total)),
        _ => None,
    }
}

fn order_key(order: &Order, field: &str) -> Option<Key> {
    match field {
        "total" => Some(Key::Number(order.total)),
        "status" => Some(Key::Text(order.status.to_string())),
        "date" => Some(Key::Stamp(order.placed_at)),
        _ => None,
    }
}

/// Executes routed operations against the live actors.
///
/// Holds no menu client: the catalog is only consulted by the cart actor
/// when it snapshots a price.
#[derive(Clone)]
pub struct Router {
    users: UserClient,
    carts: CartClient,
    orders: OrderClient,
}

impl Router {
    pub fn new(users: UserClient, carts: CartClient, orders: OrderClient) -> Self {
        Self {
            users,
            carts,
            orders,
        }
    }

    async fn role_of(&self, caller: UserId) -> Result<Role, ApiError> {
        match self.users.resolve_role(caller).await {
            Ok(role) => Ok(role),
            Err(UserError::NotFound(_)) => Err(ApiError::PermissionDenied),
            Err(e) => Err(ApiError::Internal(e.to_string())),
        }
    }

    /// Routes a request against the cart collection.
    #[tracing::instrument(skip(self, params))]
    pub async fn cart(
        &self,
        caller: UserId,
        method: Method,
        params: &HashMap<String, String>,
    ) -> Result<ApiResponse, ApiError> {
        let role = self.role_of(caller).await?;
        match route_cart(method, role) {
            CartOp::List => {
                let lines = self
                    .carts
                    .list_for(caller)
                    .await
                    .map_err(|e| ApiError::Internal(e.to_string()))?;
                let lines = query::apply(lines, &QueryParams::from_map(params), cart_key);
                Ok(ApiResponse::ok(json!({
                    "count": lines.len(),
                    "items": lines,
                })))
            }
            CartOp::Add => {
                let menu_item = require(params, "menuitem")?
                    .parse::<u32>()
                    .map(MenuItemId)
                    .map_err(|_| ApiError::Validation { field: "menuitem".to_string() })?;
                let quantity = parse_quantity(require(params, "quantity")?)
                    .ok_or_else(|| ApiError::Validation { field: "quantity".to_string() })?;
                let line = self
                    .carts
                    .add_item(CartLineCreate {
                        user: caller,
                        menu_item,
                        quantity,
                    })
                    .await
                    .map_err(|e| match e {
                        CartError::UnknownMenuItem(_) => ApiError::NotFound,
                        CartError::InvalidQuantity(_) => {
                            ApiError::Validation { field: "quantity".to_string() }
                        }
                        other => ApiError::Internal(other.to_string()),
                    })?;
                Ok(ApiResponse::created(json!(line)))
            }
            CartOp::Clear => {
                let removed = self
                    .carts
                    .clear_for(caller)
                    .await
                    .map_err(|e| ApiError::Internal(e.to_string()))?;
                Ok(ApiResponse::ok(json!({ "removed": removed })))
            }
            CartOp::Deny => Err(ApiError::PermissionDenied),
        }
    }

    /// Routes a request against the orders collection.
    #[tracing::instrument(skip(self, params))]
    pub async fn orders(
        &self,
        caller: UserId,
        method: Method,
        params: &HashMap<String, String>,
    ) -> Result<ApiResponse, ApiError> {
        let role = self.role_of(caller).await?;
        match route_orders(method, role) {
            OrdersOp::ListScoped => {
                let filter = match role {
                    Role::Manager => OrderFilter::All,
                    Role::Delivery => OrderFilter::ByCrew(caller),
                    Role::Customer => OrderFilter::ByCustomer(caller),
                };
                let orders = self
                    .orders
                    .list(filter)
                    .await
                    .map_err(|e| ApiError::Internal(e.to_string()))?;
                let orders = query::apply(orders, &QueryParams::from_map(params), order_key);
                Ok(ApiResponse::ok(json!({
                    "count": orders.len(),
                    "orders": orders,
                })))
            }
            OrdersOp::Place => {
                match self
                    .orders
                    .place_order(caller)
                    .await
                    .map_err(|e| ApiError::Internal(e.to_string()))?
                {
                    PlaceOrderOutcome::Placed(order) => Ok(ApiResponse::created(json!(order))),
                    PlaceOrderOutcome::EmptyCart => Ok(ApiResponse::ok(json!({
                        "message": "cart is empty, no order placed",
                    }))),
                }
            }
            OrdersOp::Deny => Err(ApiError::PermissionDenied),
        }
    }

    /// Routes a request against one order. The order is fetched first;
    /// a missing id is 404 regardless of who asks.
    #[tracing::instrument(skip(self, params))]
    pub async fn order(
        &self,
        caller: UserId,
        method: Method,
        id: OrderId,
        params: &HashMap<String, String>,
    ) -> Result<ApiResponse, ApiError> {
        let order = self
            .orders
            .get(id)
            .await
            .map_err(|e| ApiError::Internal(e.to_string()))?
            .ok_or(ApiError::NotFound)?;
        let role = self.role_of(caller).await?;

        match route_order(method, role) {
            OrderOp::ViewItems => {
                if order.placed_by != caller {
                    return Err(ApiError::PermissionDenied);
                }
                Ok(ApiResponse::ok(json!({
                    "order": order.id.to_string(),
                    "items": order.items,
                    "total": order.total,
                })))
            }
            OrderOp::AssignCrew => {
                let username = require(params, "username")?;
                let crew = self
                    .users
                    .find_by_username(username)
                    .await
                    .map_err(|e| ApiError::Internal(e.to_string()))?
                    .ok_or_else(|| ApiError::Validation { field: "username".to_string() })?;
                let order = self
                    .orders
                    .assign_crew(id, crew.id)
                    .await
                    .map_err(|e| match e {
                        OrderError::InvalidCrew(_) => {
                            ApiError::Validation { field: "username".to_string() }
                        }
                        OrderError::NotFound(_) => ApiError::NotFound,
                        other => ApiError::Internal(other.to_string()),
                    })?;
                Ok(ApiResponse::ok(json!(order)))
            }
            OrderOp::UpdateStatus => {
                if role == Role::Delivery && order.delivery_crew != Some(caller) {
                    return Err(ApiError::PermissionDenied);
                }
                let status = OrderStatus::from_wire(require(params, "status")?)
                    .ok_or_else(|| ApiError::Validation { field: "status".to_string() })?;
                let order = self
                    .orders
                    .set_status(id, status)
                    .await
                    .map_err(|e| match e {
                        OrderError::NotFound(_) => ApiError::NotFound,
                        other => ApiError::Internal(other.to_string()),
                    })?;
                Ok(ApiResponse::ok(json!(order)))
            }
            OrderOp::Remove => {
                self.orders.delete(id).await.map_err(|e| match e {
                    OrderError::NotFound(_) => ApiError::NotFound,
                    other => ApiError::Internal(other.to_string()),
                })?;
                Ok(ApiResponse::ok(json!({ "deleted": id.to_string() })))
            }
            OrderOp::Deny => Err(ApiError::PermissionDenied),
        }
    }
}
