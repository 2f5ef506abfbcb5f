use prometheus::{
    Histogram, HistogramOpts, IntCounter, IntCounterVec, Opts, Registry, TextEncoder,
};

// ============================================================================
// Metrics Module - Prometheus metrics for observability
// ============================================================================
//
// Provides metrics for:
// - Cart activity (applied cart events by type)
// - Orders placed and their value
// - Order history persistence writes
// - Checkout rejections
//
// ============================================================================

/// Central metrics registry for a shop session
pub struct Metrics {
    registry: Registry,

    pub cart_events: IntCounterVec,
    pub orders_placed: IntCounter,
    pub order_value: Histogram,
    pub persist_writes: IntCounterVec,
    pub checkout_failures: IntCounterVec,
}

impl Metrics {
    pub fn new() -> prometheus::Result<Self> {
        let registry = Registry::new();

        let cart_events = IntCounterVec::new(
            Opts::new("cart_events_total", "Total cart events applied"),
            &["event_type"],
        )?;
        registry.register(Box::new(cart_events.clone()))?;

        let orders_placed = IntCounter::new("orders_placed_total", "Total orders placed")?;
        registry.register(Box::new(orders_placed.clone()))?;

        let order_value = Histogram::with_opts(
            HistogramOpts::new("order_value", "Final charged amount per order")
                .buckets(vec![5.0, 10.0, 20.0, 50.0, 100.0, 200.0]),
        )?;
        registry.register(Box::new(order_value.clone()))?;

        let persist_writes = IntCounterVec::new(
            Opts::new("order_persist_writes_total", "Order history snapshot writes"),
            &["outcome"],
        )?;
        registry.register(Box::new(persist_writes.clone()))?;

        let checkout_failures = IntCounterVec::new(
            Opts::new("checkout_failures_total", "Checkouts rejected before commit"),
            &["reason"],
        )?;
        registry.register(Box::new(checkout_failures.clone()))?;

        Ok(Self {
            registry,
            cart_events,
            orders_placed,
            order_value,
            persist_writes,
            checkout_failures,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Render all metrics in the Prometheus text exposition format
    pub fn render(&self) -> prometheus::Result<String> {
        TextEncoder::new().encode_to_string(&self.registry.gather())
    }

    pub fn record_cart_event(&self, event_type: &str) {
        self.cart_events.with_label_values(&[event_type]).inc();
    }

    pub fn record_order_placed(&self, total_price: f64) {
        self.orders_placed.inc();
        self.order_value.observe(total_price);
    }

    pub fn record_persist_write(&self, success: bool) {
        let outcome = if success { "ok" } else { "error" };
        self.persist_writes.with_label_values(&[outcome]).inc();
    }

    pub fn record_checkout_failure(&self, reason: &str) {
        self.checkout_failures.with_label_values(&[reason]).inc();
    }

    /// Current count of persistence writes with the given outcome (`ok`/`error`)
    pub fn persist_writes(&self, outcome: &str) -> u64 {
        self.persist_writes.with_label_values(&[outcome]).get()
    }
}

impl std::fmt::Debug for Metrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Metrics").finish_non_exhaustive()
    }
}
