//! Checkout
//!
//! Turns the cart into an order, hands it to an [`OrderSubmitter`] and clears the
//! cart once the order exists.

use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::{
    orders::{CustomerDetails, OrderError, OrderRequest},
    storage::Storage,
    store::CartStore,
};

/// Prefix of every order failure message shown to the customer.
const FAILURE_PREFIX: &str = "Có lỗi xảy ra khi đặt hàng: ";

/// Shown when the order service gives no detail.
const FALLBACK_DETAIL: &str = "Vui lòng thử lại";

/// Shown when the order service cannot be reached.
const NETWORK_FAILURE_MESSAGE: &str = "Có lỗi xảy ra khi đặt hàng. Vui lòng thử lại!";

/// An order accepted by the order service.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct OrderConfirmation {
    /// Order id assigned by the service
    pub id: u64,
}

impl OrderConfirmation {
    /// Page the customer is sent to after ordering.
    pub fn success_path(&self) -> String {
        format!("/order-success/?order_id={}", self.id)
    }
}

/// Failures reported by an [`OrderSubmitter`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SubmissionError {
    /// The service refused the order
    #[error("order rejected: {}", .detail.as_deref().unwrap_or("no detail given"))]
    Rejected {
        /// Reason given by the service, if any
        detail: Option<String>,
    },

    /// The service could not be reached
    #[error("order service unreachable: {0}")]
    Transport(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

impl SubmissionError {
    /// Rejection parsed from an error response body such as
    /// `{"detail": "Sản phẩm không tồn tại."}`. Bodies without a detail give a
    /// rejection without one.
    pub fn rejected_from_body(body: &str) -> Self {
        let detail = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|body| body.detail)
            .filter(|detail| !detail.trim().is_empty());

        SubmissionError::Rejected { detail }
    }

    /// Message shown to the customer.
    pub fn user_message(&self) -> String {
        match self {
            SubmissionError::Rejected { detail } => {
                format!("{FAILURE_PREFIX}{}", detail.as_deref().unwrap_or(FALLBACK_DETAIL))
            }
            SubmissionError::Transport(_) => NETWORK_FAILURE_MESSAGE.to_string(),
        }
    }
}

/// Sends orders to the order service.
pub trait OrderSubmitter {
    /// Submit `request`.
    ///
    /// # Errors
    ///
    /// Returns a [`SubmissionError`] if the service rejects the order or cannot be
    /// reached.
    fn submit(&mut self, request: &OrderRequest) -> Result<OrderConfirmation, SubmissionError>;
}

/// Why a checkout did not produce an order.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// The request was invalid and never sent
    #[error(transparent)]
    Invalid(#[from] OrderError),

    /// The service did not accept the order
    #[error(transparent)]
    Submission(#[from] SubmissionError),
}

impl CheckoutError {
    /// Message shown to the customer.
    pub fn user_message(&self) -> String {
        match self {
            CheckoutError::Invalid(err) => format!("{FAILURE_PREFIX}{err}"),
            CheckoutError::Submission(err) => err.user_message(),
        }
    }
}

/// Place an order for everything in the cart.
///
/// The cart is cleared only once the order has been accepted; on any error it is
/// left exactly as it was.
///
/// # Errors
///
/// Returns a [`CheckoutError`] if the customer details or cart are not a valid
/// order, or the submitter fails.
#[tracing::instrument(level = "debug", skip_all, fields(lines = store.len()))]
pub fn checkout<S: Storage>(
    store: &mut CartStore<S>,
    customer: &CustomerDetails,
    submitter: &mut impl OrderSubmitter,
) -> Result<OrderConfirmation, CheckoutError> {
    let request = OrderRequest::new(customer, store.snapshot_for_order())?;

    let confirmation = submitter
        .submit(&request)
        .inspect_err(|err| warn!(error = %err, "order submission failed; cart kept"))?;

    info!(
        order_id = confirmation.id,
        total_quantity = request.total_quantity(),
        "order placed"
    );

    store.clear();

    Ok(confirmation)
}
