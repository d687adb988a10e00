//! Cart CLI configuration

use clap::{Args, Parser, Subcommand};

use crate::{
    orders::{CustomerDetails, PaymentMethod},
    products::ProductId,
};

pub mod logging;
pub mod storage;

pub use logging::{LogFormat, LoggingConfig};
pub use storage::StorageConfig;

/// Storefront cart configuration
#[derive(Debug, Parser)]
#[command(name = "cart", about = "Storefront cart", long_about = None)]
pub struct CartConfig {
    /// Cart slot and catalog locations.
    #[command(flatten)]
    pub storage: StorageConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// What to do with the cart.
    #[command(subcommand)]
    pub command: Command,
}

impl CartConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}

/// Cart commands.
#[derive(Debug, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// List the products in the catalog
    Products {
        /// Only list featured products
        #[arg(long)]
        featured: bool,
    },

    /// Add one unit of a product
    Add {
        /// Product id
        id: ProductId,
    },

    /// Add one more unit of a product already in the cart
    Increase {
        /// Product id
        id: ProductId,
    },

    /// Take away one unit of a product, keeping at least one
    Decrease {
        /// Product id
        id: ProductId,
    },

    /// Remove a product from the cart
    Remove {
        /// Product id
        id: ProductId,
    },

    /// Empty the cart
    Clear,

    /// Print the cart
    Show,

    /// Print the order request the cart would be submitted as
    OrderPayload(OrderArgs),
}

/// Customer details for an order.
#[derive(Debug, PartialEq, Eq, Args)]
pub struct OrderArgs {
    /// Customer name
    #[arg(long)]
    pub name: String,

    /// Phone number
    #[arg(long)]
    pub phone: String,

    /// Delivery address
    #[arg(long)]
    pub address: String,

    /// Email address
    #[arg(long)]
    pub email: Option<String>,

    /// Payment method
    #[arg(long, value_enum, default_value_t = PaymentMethod::Cod)]
    pub payment: PaymentMethod,

    /// Notes for the shop
    #[arg(long, default_value = "")]
    pub notes: String,
}

impl From<OrderArgs> for CustomerDetails {
    fn from(args: OrderArgs) -> Self {
        CustomerDetails {
            name: args.name,
            phone: args.phone,
            address: args.address,
            email: args.email,
            payment_method: args.payment,
            notes: args.notes,
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parses_product_commands() -> TestResult {
        let config = CartConfig::try_parse_from(["cart", "add", "3"])?;
        assert_eq!(config.command, Command::Add { id: ProductId::new(3) });

        let config = CartConfig::try_parse_from(["cart", "decrease", "7"])?;
        assert_eq!(config.command, Command::Decrease { id: ProductId::new(7) });

        Ok(())
    }

    #[test]
    fn rejects_non_numeric_product_ids() {
        assert!(CartConfig::try_parse_from(["cart", "remove", "tra-sua"]).is_err());
    }

    #[test]
    fn order_payload_defaults_to_cash_on_delivery() -> TestResult {
        let config = CartConfig::try_parse_from([
            "cart",
            "order-payload",
            "--name",
            "Lê Văn C",
            "--phone",
            "0987654321",
            "--address",
            "7 Hai Bà Trưng",
        ])?;

        let Command::OrderPayload(args) = config.command else {
            return Err("expected order-payload".into());
        };

        let customer = CustomerDetails::from(args);

        assert_eq!(customer.payment_method, PaymentMethod::Cod);
        assert_eq!(customer.email, None);
        assert_eq!(customer.notes, "");

        Ok(())
    }

    #[test]
    fn order_payload_accepts_online_payment() -> TestResult {
        let config = CartConfig::try_parse_from([
            "cart",
            "order-payload",
            "--name",
            "Lê Văn C",
            "--phone",
            "0987654321",
            "--address",
            "7 Hai Bà Trưng",
            "--payment",
            "online",
        ])?;

        assert!(matches!(
            config.command,
            Command::OrderPayload(OrderArgs {
                payment: PaymentMethod::Online,
                ..
            })
        ));

        Ok(())
    }
}
