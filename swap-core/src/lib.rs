//! # DeFiSwap Core Library
//!
//! Wallet-connection and swap-submission logic for the DeFiSwap demo,
//! independent of any rendering framework or browser API.
//!
//! ## Structure
//!
//! - **[`session`]**: Wallet connection state and the [`WalletManager`]
//! - **[`swap`]**: Swap form state and the [`SwapController`]
//! - **[`provider`]**: The [`WalletProvider`] trait the browser layer implements
//! - **[`units`]**: Decimal-string to base-unit conversion
//! - **[`format`]**: Address and hash formatting for display
//! - **[`notice`]**: User-facing notices for success/failure paths
//! - **[`error`]**: Application error taxonomy
//!
//! ## Design
//!
//! The wallet provider is injected into [`WalletManager`] and
//! [`SwapController`] as a generic parameter rather than reached through
//! ambient globals, so tests can substitute a mock provider. Both
//! orchestrators expose a split-phase API alongside their async entry
//! points: the UI thread begins an operation synchronously, awaits the
//! provider on its own, and applies the outcome synchronously. That keeps
//! the reactive state accessible while a request is suspended on the
//! external wallet UI.

pub mod constants;
pub mod error;
pub mod format;
pub mod notice;
pub mod provider;
pub mod session;
pub mod swap;
pub mod units;

// Re-export commonly used types for convenience
pub use error::AppError;
pub use format::{format_address, truncate_address};
pub use notice::{Notice, NoticeLevel};
pub use provider::{ProviderError, TransactionRequest, TxReceipt, WalletProvider};
pub use session::{WalletManager, WalletSession};
pub use swap::{SwapController, SwapRequest, SwapStatus};
pub use units::parse_units;
