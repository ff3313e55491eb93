//! Reactive app state
//!
//! Each context wraps core state in a signal so transitions made through
//! the core types re-render the UI. The contexts are provided once at the
//! app root and looked up by the components that need them.

pub mod notices;
pub mod swap;
pub mod wallet;

pub use notices::{provide_notice_context, use_notice_context, NoticeContext};
pub use swap::{provide_swap_context, use_swap_context, SwapContext};
pub use wallet::{provide_wallet_context, use_wallet_context, WalletContext};
