//! E-commerce Order Processing
//!
//! This example drives an order record through its lifecycle, with every
//! transition request arriving as a JSON body the way an HTTP handler would
//! receive it.
//!
//! Key concepts:
//! - Actions that update a domain record guarded by its own lock
//! - A failing action (payment declined) that keeps the order in `created`
//! - Mapping transition errors onto client-facing status codes
//!
//! Run with: cargo run --example order_processing

use micromachine::core::{TransitionError, TransitionTable};
use micromachine::state_enum;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

state_enum! {
    #[serde(rename_all = "lowercase")]
    enum OrderState {
        Created,
        Paid,
        Shipped,
        Delivered,
        Cancelled,
    }
}

#[derive(Debug, Serialize)]
struct Order {
    id: u64,
    status: OrderState,
    items: Vec<String>,
    tracking_number: Option<String>,
    payment_attempts: u32,
}

#[derive(Debug, thiserror::Error)]
#[error("payment declined for order {order_id}")]
struct PaymentDeclined {
    order_id: u64,
}

#[derive(Deserialize)]
struct TransitionRequest {
    to: OrderState,
}

type SharedOrder = Arc<Mutex<Order>>;

fn lock(order: &SharedOrder) -> Result<std::sync::MutexGuard<'_, Order>, &'static str> {
    order.lock().map_err(|_| "order record poisoned")
}

fn order_machine(order: &SharedOrder) -> TransitionTable<OrderState> {
    let machine = TransitionTable::new(OrderState::Created);

    let o = Arc::clone(order);
    machine.add_transition_with_action(OrderState::Created, OrderState::Paid, move || {
        let mut order = lock(&o)?;
        order.payment_attempts += 1;
        // The first card on file is declined.
        if order.payment_attempts == 1 {
            return Err(PaymentDeclined { order_id: order.id }.into());
        }
        tracing::info!(order_id = order.id, "payment processed");
        order.status = OrderState::Paid;
        Ok(())
    });

    let o = Arc::clone(order);
    machine.add_transition_with_action(OrderState::Paid, OrderState::Shipped, move || {
        let mut order = lock(&o)?;
        order.tracking_number = Some(format!("TRACK-{}", order.id * 1000));
        order.status = OrderState::Shipped;
        tracing::info!(order_id = order.id, "order shipped");
        Ok(())
    });

    let o = Arc::clone(order);
    machine.add_transition_with_action(OrderState::Shipped, OrderState::Delivered, move || {
        let mut order = lock(&o)?;
        order.status = OrderState::Delivered;
        tracing::info!(order_id = order.id, "order delivered");
        Ok(())
    });

    for from in [OrderState::Created, OrderState::Paid] {
        let o = Arc::clone(order);
        machine.add_transition_with_action(from, OrderState::Cancelled, move || {
            let mut order = lock(&o)?;
            order.status = OrderState::Cancelled;
            tracing::info!(order_id = order.id, "order cancelled");
            Ok(())
        });
    }

    machine
}

/// Decode a transition request and apply it, returning a status code and body.
fn handle_transition(machine: &TransitionTable<OrderState>, body: &str) -> (u16, String) {
    let request: TransitionRequest = match serde_json::from_str(body) {
        Ok(request) => request,
        Err(err) => return (400, err.to_string()),
    };

    match machine.transition(request.to) {
        Ok(()) => (200, String::new()),
        Err(err @ TransitionError::InvalidTransition { .. }) => (409, err.to_string()),
        Err(err) => (422, err.to_string()),
    }
}

fn handle_get(order: &SharedOrder) -> (u16, String) {
    let body = lock(order)
        .map_err(str::to_string)
        .and_then(|order| serde_json::to_string(&*order).map_err(|e| e.to_string()));
    match body {
        Ok(body) => (200, body),
        Err(err) => (500, err),
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_target(false))
        .init();

    let order = Arc::new(Mutex::new(Order {
        id: 123,
        status: OrderState::Created,
        items: vec!["Product A".to_string(), "Product B".to_string()],
        tracking_number: None,
        payment_attempts: 0,
    }));
    let machine = order_machine(&order);

    let requests = [
        r#"{"to":"shipped"}"#,
        r#"{"to":"paid"}"#,
        r#"{"to":"paid"}"#,
        r#"{"to":"shipped"}"#,
        r#"{"to":"cancelled"}"#,
        r#"{"to":"delivered"}"#,
        r#"{"to":"teleported"}"#,
    ];

    for body in requests {
        let (status, message) = handle_transition(&machine, body);
        if status == 200 {
            tracing::info!(request = body, state = %machine.state(), "transition accepted");
        } else {
            tracing::warn!(request = body, status, %message, "transition rejected");
        }
    }

    let (status, body) = handle_get(&order);
    tracing::info!(status, %body, "final order");
}
