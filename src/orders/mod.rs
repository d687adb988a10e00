//! Orders
//!
//! The order request built from the cart at checkout, and the status and payment
//! vocabularies the order API uses.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cart::{OrderLine, OrderLines};

pub mod checkout;

/// Longest customer name the order API accepts.
pub const MAX_NAME_LENGTH: usize = 100;

/// Longest phone number the order API accepts.
pub const MAX_PHONE_LENGTH: usize = 15;

/// Problems with an order request detected before submission.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderError {
    /// The cart is empty.
    #[error("Đơn hàng phải có ít nhất một sản phẩm.")]
    EmptyCart,

    /// A required field is blank.
    #[error("{} không được để trống.", field_label(.0))]
    MissingField(&'static str),

    /// A field is longer than the API allows.
    #[error("{} không được vượt quá {max} ký tự.", field_label(.field))]
    TooLong {
        /// Field name
        field: &'static str,
        /// Maximum length in characters
        max: usize,
    },

    /// The email address is not valid.
    #[error("Email không hợp lệ: {0}")]
    InvalidEmail(String),
}

/// How the customer pays.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Cash on delivery
    #[default]
    Cod,

    /// Paid online
    Online,
}

impl PaymentMethod {
    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            PaymentMethod::Cod => "Thanh toán khi nhận hàng",
            PaymentMethod::Online => "Thanh toán online",
        }
    }
}

/// Where an order is in its lifecycle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Waiting to be processed
    #[default]
    Pending,

    /// Accepted by the shop
    Confirmed,

    /// Being made
    Preparing,

    /// Ready for pick-up or delivery
    Ready,

    /// Delivered to the customer
    Delivered,

    /// Cancelled
    Cancelled,
}

impl OrderStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [OrderStatus; 6] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    /// Code used by the order API.
    pub fn code(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Chờ xử lý",
            OrderStatus::Confirmed => "Đã xác nhận",
            OrderStatus::Preparing => "Đang chuẩn bị",
            OrderStatus::Ready => "Sẵn sàng",
            OrderStatus::Delivered => "Đã giao",
            OrderStatus::Cancelled => "Đã hủy",
        }
    }
}

/// Details the customer enters on the checkout form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CustomerDetails {
    /// Customer name
    pub name: String,

    /// Phone number
    pub phone: String,

    /// Delivery address
    pub address: String,

    /// Optional email address
    pub email: Option<String>,

    /// Payment method
    pub payment_method: PaymentMethod,

    /// Free-form notes for the shop
    pub notes: String,
}

/// Body of an order creation request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    /// Customer name
    pub customer_name: String,

    /// Phone number
    pub customer_phone: String,

    /// Delivery address
    pub customer_address: String,

    /// Email address, omitted when not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,

    /// Payment method
    pub payment_method: PaymentMethod,

    /// Notes for the shop
    #[serde(default)]
    pub notes: String,

    /// Products and quantities
    pub items: Vec<OrderLine>,
}

impl OrderRequest {
    /// Build a request for `lines`, checking the customer details the way the order
    /// API does.
    ///
    /// # Errors
    ///
    /// Returns an [`OrderError`] if there are no lines, a required field is blank, a
    /// field is too long or the email address is malformed.
    pub fn new(customer: &CustomerDetails, lines: OrderLines<'_>) -> Result<Self, OrderError> {
        if lines.is_empty() {
            return Err(OrderError::EmptyCart);
        }

        let customer_name = required("customer_name", &customer.name)?;
        let customer_phone = required("customer_phone", &customer.phone)?;
        let customer_address = required("customer_address", &customer.address)?;

        check_length("customer_name", &customer_name, MAX_NAME_LENGTH)?;
        check_length("customer_phone", &customer_phone, MAX_PHONE_LENGTH)?;

        let customer_email = customer
            .email
            .as_deref()
            .map(str::trim)
            .filter(|email| !email.is_empty())
            .map(validate_email)
            .transpose()?;

        Ok(Self {
            customer_name,
            customer_phone,
            customer_address,
            customer_email,
            payment_method: customer.payment_method,
            notes: customer.notes.trim().to_string(),
            items: lines.iter().collect(),
        })
    }

    /// Total units ordered.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|line| u64::from(line.quantity)).sum()
    }
}

/// Name of an order API field as the checkout form shows it.
fn field_label(field: &str) -> &str {
    match field {
        "customer_name" => "Tên khách hàng",
        "customer_phone" => "Số điện thoại",
        "customer_address" => "Địa chỉ giao hàng",
        "customer_email" => "Email",
        other => other,
    }
}

fn required(field: &'static str, value: &str) -> Result<String, OrderError> {
    let value = value.trim();

    if value.is_empty() {
        Err(OrderError::MissingField(field))
    } else {
        Ok(value.to_string())
    }
}

fn check_length(field: &'static str, value: &str, max: usize) -> Result<(), OrderError> {
    if value.chars().count() > max {
        Err(OrderError::TooLong { field, max })
    } else {
        Ok(())
    }
}

fn validate_email(email: &str) -> Result<String, OrderError> {
    let valid = email.split_once('@').is_some_and(|(local, domain)| {
        !local.is_empty()
            && !domain.contains('@')
            && domain
                .split_once('.')
                .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
            && !email.contains(char::is_whitespace)
    });

    if valid {
        Ok(email.to_string())
    } else {
        Err(OrderError::InvalidEmail(email.to_string()))
    }
}
