use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

use crate::domain::cart::{CartEvent, CartStore};
use crate::domain::checkout::{CheckoutDraft, CheckoutError, CheckoutSummary, PricingPolicy};
use crate::domain::menu::CustomizationPicker;
use crate::domain::orders::{NewOrder, Order, OrderHistoryStore};
use crate::metrics::Metrics;
use crate::store::core::EventEnvelope;

/// Default processing delay between confirming and recording an order.
pub const DEFAULT_CHECKOUT_DELAY: Duration = Duration::from_secs(2);

/// Session shared with deferred checkout tasks.
pub type SharedSession = Arc<Mutex<ShopSession>>;

// ============================================================================
// Shop Session - Explicitly owned state handed to UI code
// ============================================================================

#[derive(Debug)]
pub struct ShopSession {
    cart: CartStore,
    orders: OrderHistoryStore,
    pricing: PricingPolicy,
    checkout_delay: Duration,
    metrics: Arc<Metrics>,
}

impl ShopSession {
    pub fn new(
        orders: OrderHistoryStore,
        pricing: PricingPolicy,
        checkout_delay: Duration,
        metrics: Arc<Metrics>,
    ) -> Self {
        let mut cart = CartStore::new();

        let cart_metrics = metrics.clone();
        cart.subscribe(move |envelope: &EventEnvelope<CartEvent>| {
            cart_metrics.record_cart_event(&envelope.event_type);
        });

        Self {
            cart,
            orders,
            pricing,
            checkout_delay,
            metrics,
        }
    }

    pub fn into_shared(self) -> SharedSession {
        Arc::new(Mutex::new(self))
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }

    pub fn orders(&self) -> &OrderHistoryStore {
        &self.orders
    }

    pub fn orders_mut(&mut self) -> &mut OrderHistoryStore {
        &mut self.orders
    }

    pub fn pricing(&self) -> &PricingPolicy {
        &self.pricing
    }

    pub fn checkout_delay(&self) -> Duration {
        self.checkout_delay
    }

    pub fn metrics(&self) -> &Arc<Metrics> {
        &self.metrics
    }

    /// Add the picker's selection to the cart with the picker's quantity
    pub fn add_selection(&mut self, picker: &CustomizationPicker) {
        self.cart.add_units(picker.to_cart_item(), picker.quantity());
    }

    pub fn checkout_summary(&self) -> CheckoutSummary {
        self.pricing.summarize(self.cart.cart())
    }

    /// Snapshot the cart for an order; fails on an empty cart or address
    pub fn prepare_checkout(
        &self,
        address: impl Into<String>,
    ) -> Result<CheckoutDraft, CheckoutError> {
        let address = address.into();

        let rejection = if self.cart.total_items() == 0 {
            Some(CheckoutError::EmptyCart)
        } else if address.trim().is_empty() {
            Some(CheckoutError::EmptyAddress)
        } else {
            None
        };

        if let Some(error) = rejection {
            self.metrics.record_checkout_failure(error.reason());
            tracing::warn!(reason = error.reason(), "Checkout rejected");
            return Err(error);
        }

        Ok(CheckoutDraft {
            items: self.cart.items().to_vec(),
            summary: self.checkout_summary(),
            address,
        })
    }

    /// Record the drafted order and empty the cart
    pub fn commit_checkout(&mut self, draft: CheckoutDraft) -> Order {
        let order = self.orders.add_order(NewOrder {
            items: draft.items,
            total_price: draft.summary.total,
            address: draft.address,
        });

        self.cart.clear_cart();
        self.metrics.record_order_placed(order.total_price);

        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::{Customization, MenuItemId};
    use crate::domain::checkout::begin_checkout;
    use crate::domain::menu::MenuItem;
    use crate::domain::orders::DEFAULT_ORDERS_KEY;
    use crate::store::persistence::MemoryStorage;
    use crate::utils::{SequentialIdGenerator, SystemClock};

    async fn session(delay: Duration) -> ShopSession {
        let metrics = Arc::new(Metrics::new().unwrap());
        let orders = OrderHistoryStore::open(
            Arc::new(MemoryStorage::new()),
            DEFAULT_ORDERS_KEY,
            Arc::new(SequentialIdGenerator::new()),
            Arc::new(SystemClock),
            metrics.clone(),
        )
        .await
        .unwrap();

        ShopSession::new(orders, PricingPolicy::default(), delay, metrics)
    }

    fn burger_picker() -> CustomizationPicker {
        CustomizationPicker::new(MenuItem {
            id: MenuItemId::new("burger"),
            name: "Classic Burger".to_string(),
            price: 10.0,
            image_url: "https://cdn.example/burger.png".to_string(),
            description: None,
        })
    }

    #[tokio::test]
    async fn test_add_selection_honors_quantity() {
        let mut session = session(Duration::ZERO).await;
        let mut picker = burger_picker();
        picker.toggle(Customization::topping("Cheese", 1.0));
        picker.set_quantity(3);

        session.add_selection(&picker);

        assert_eq!(session.cart().items().len(), 1);
        assert_eq!(session.cart().total_items(), 3);
        assert_eq!(session.cart().total_price(), 33.0);
        assert_eq!(
            session.metrics().cart_events.with_label_values(&["CartLineAdded"]).get(),
            1
        );
        assert_eq!(
            session.metrics().cart_events.with_label_values(&["CartQuantityChanged"]).get(),
            0
        );
    }

    #[tokio::test]
    async fn test_large_quantity_is_single_dispatch() {
        let mut session = session(Duration::ZERO).await;
        let mut picker = burger_picker();
        picker.set_quantity(u32::MAX);

        session.add_selection(&picker);
        session.add_selection(&picker);

        assert_eq!(session.cart().items()[0].quantity, u32::MAX);
        assert_eq!(
            session.metrics().cart_events.with_label_values(&["CartQuantityChanged"]).get(),
            1
        );
    }

    #[tokio::test]
    async fn test_prepare_checkout_rejects_empty_cart() {
        let session = session(Duration::ZERO).await;

        let result = session.prepare_checkout("1 Elm St");
        assert!(matches!(result, Err(CheckoutError::EmptyCart)));
        assert_eq!(
            session.metrics().checkout_failures.with_label_values(&["empty_cart"]).get(),
            1
        );
    }

    #[tokio::test]
    async fn test_prepare_checkout_rejects_blank_address() {
        let mut session = session(Duration::ZERO).await;
        session.add_selection(&burger_picker());

        let result = session.prepare_checkout("   ");
        assert!(matches!(result, Err(CheckoutError::EmptyAddress)));
    }

    #[tokio::test]
    async fn test_commit_records_order_and_clears_cart() {
        let mut session = session(Duration::ZERO).await;
        session.add_selection(&burger_picker());
        session.add_selection(&burger_picker());

        let draft = session.prepare_checkout("1 Elm St").unwrap();
        let order = session.commit_checkout(draft);

        assert_eq!(order.total_price, 24.5);
        assert_eq!(order.items[0].quantity, 2);
        assert_eq!(session.orders().orders()[0].id, order.id);
        assert_eq!(session.cart().total_items(), 0);
        assert_eq!(session.metrics().orders_placed.get(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_checkout_commits_after_delay() {
        let mut session = session(DEFAULT_CHECKOUT_DELAY).await;
        session.add_selection(&burger_picker());
        let shared = session.into_shared();

        let pending = begin_checkout(shared.clone(), "1 Elm St").await.unwrap();
        assert_eq!(pending.summary().total, 14.5);

        tokio::time::sleep(Duration::from_millis(1_900)).await;
        assert!(shared.lock().await.orders().orders().is_empty());

        let order = pending.completed().await.unwrap();
        let guard = shared.lock().await;
        assert_eq!(guard.orders().orders()[0].id, order.id);
        assert_eq!(guard.cart().total_items(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_checkout_still_commits() {
        let mut session = session(DEFAULT_CHECKOUT_DELAY).await;
        session.add_selection(&burger_picker());
        let shared = session.into_shared();

        let pending = begin_checkout(shared.clone(), "1 Elm St").await.unwrap();
        drop(pending);

        tokio::time::sleep(Duration::from_secs(3)).await;
        assert_eq!(shared.lock().await.orders().orders().len(), 1);
    }

    #[tokio::test]
    async fn test_order_snapshot_is_independent_of_cart() {
        let mut session = session(Duration::ZERO).await;
        session.add_selection(&burger_picker());

        let draft = session.prepare_checkout("1 Elm St").unwrap();
        session.cart_mut().increase_qty(&MenuItemId::new("burger"), &[]);
        let order = session.commit_checkout(draft);

        assert_eq!(order.items[0].quantity, 1);
        assert_eq!(session.orders().orders()[0].items[0].quantity, 1);
    }
}
