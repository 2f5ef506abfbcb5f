use tokio::task::JoinHandle;

use crate::domain::cart::CartLine;
use crate::domain::orders::Order;
use crate::session::SharedSession;
use super::errors::CheckoutError;
use super::pricing::CheckoutSummary;

// ============================================================================
// Checkout Service
// ============================================================================
//
// Orchestrates: prepare (snapshot cart) → processing delay → commit
// (record order, clear cart).
//
// The commit runs on a detached task. Dropping the PendingCheckout does not
// cancel it; the order is recorded even if nobody waits for it.
//
// ============================================================================

/// Cart snapshot taken when the customer confirms the order
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutDraft {
    pub items: Vec<CartLine>,
    pub summary: CheckoutSummary,
    pub address: String,
}

#[derive(Debug)]
pub struct PendingCheckout {
    summary: CheckoutSummary,
    handle: JoinHandle<Order>,
}

impl PendingCheckout {
    pub fn summary(&self) -> &CheckoutSummary {
        &self.summary
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the commit and return the recorded order
    pub async fn completed(self) -> Result<Order, CheckoutError> {
        Ok(self.handle.await?)
    }
}

/// Snapshot the cart now and schedule the commit after the session's
/// checkout delay.
pub async fn begin_checkout(
    session: SharedSession,
    address: impl Into<String>,
) -> Result<PendingCheckout, CheckoutError> {
    let (draft, delay) = {
        let guard = session.lock().await;
        (guard.prepare_checkout(address)?, guard.checkout_delay())
    };

    let summary = draft.summary.clone();

    tracing::info!(
        items = summary.total_items,
        total = summary.total,
        delay_ms = delay.as_millis() as u64,
        "Checkout started"
    );

    let handle = tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let mut guard = session.lock().await;
        guard.commit_checkout(draft)
    });

    Ok(PendingCheckout { summary, handle })
}
