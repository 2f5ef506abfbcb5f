use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use food_ordering::domain::cart::Customization;
use food_ordering::domain::checkout::begin_checkout;
use food_ordering::domain::menu::{CustomizationPicker, MenuItem};
use food_ordering::domain::orders::OrderHistoryStore;
use food_ordering::metrics::Metrics;
use food_ordering::utils::{format_order_date, format_price, SystemClock, TimestampIdGenerator};
use food_ordering::{load_app_config, ShopSession};

const SAMPLE_MENU: &str = r#"[
    {"$id": "classic-burger", "name": "Classic Burger", "price": 10.0,
     "image_url": "https://cdn.example/menu/classic-burger.png"},
    {"$id": "veggie-wrap", "name": "Veggie Wrap", "price": 8.5,
     "image_url": "https://cdn.example/menu/veggie-wrap.png",
     "description": "Grilled vegetables and hummus"}
]"#;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_app_config()?;

    // RUST_LOG overrides the configured filter
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();

    tracing::info!("🍔 Starting food ordering session");

    // === 1. Metrics and storage ===
    let metrics = Arc::new(Metrics::new()?);
    let storage = config.storage.open().await?;

    // === 2. Order history (hydrated from storage) ===
    let orders = OrderHistoryStore::open(
        storage,
        &config.orders_key,
        Arc::new(TimestampIdGenerator),
        Arc::new(SystemClock),
        metrics.clone(),
    )
    .await?;

    let mut session = ShopSession::new(
        orders,
        config.pricing(),
        config.checkout_delay(),
        metrics.clone(),
    );

    // === 3. Build a cart from the menu ===
    let menu: Vec<MenuItem> = serde_json::from_str(SAMPLE_MENU)?;

    for item in menu {
        let mut picker = CustomizationPicker::new(item);
        picker.toggle(Customization::topping("Cheese", 1.0));
        picker.toggle(Customization::side("Fries", 2.5));
        picker.increment();

        tracing::info!(
            item = %picker.item().name,
            quantity = picker.quantity(),
            total = %format_price(picker.total_price()),
            "Adding selection to cart"
        );
        session.add_selection(&picker);
    }

    let summary = session.checkout_summary();
    tracing::info!(
        items = summary.total_items,
        subtotal = %format_price(summary.subtotal),
        total = %format_price(summary.total),
        "🛒 Cart ready"
    );

    // === 4. Checkout ===
    let session = session.into_shared();
    let pending = begin_checkout(session.clone(), config.default_address.clone()).await?;

    tracing::info!("⏳ Processing order...");
    let order = pending.completed().await?;

    tracing::info!(
        order_id = %order.id,
        date = %format_order_date(&order.date),
        status = order.status.label(),
        total = %format_price(order.total_price),
        "✅ Order placed"
    );

    // === 5. History ===
    let guard = session.lock().await;
    for order in guard.orders().orders() {
        tracing::info!(
            order_id = %order.id,
            items = order.item_count(),
            total = %format_price(order.total_price),
            date = %format_order_date(&order.date),
            "Order history entry"
        );
    }
    guard.orders().flush().await;

    tracing::debug!(metrics = %metrics.render()?, "Session metrics");
    tracing::info!("🎉 Done");

    Ok(())
}
