//! Tab content - swap form plus static placeholders

pub mod analytics;
pub mod liquidity;
pub mod swap;

pub use analytics::AnalyticsPage;
pub use liquidity::LiquidityPage;
pub use swap::SwapPage;
