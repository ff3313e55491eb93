//! Wallet session state and connection flow
//!
//! A session starts `Disconnected` and becomes `Connected` only through a
//! successful account request. There is no disconnect affordance; the one
//! path back to `Disconnected` is the host signaling that all accounts
//! were removed.

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::format::truncate_address;
use crate::notice::Notice;
use crate::provider::{ProviderError, WalletProvider};

/// Connection state of the browser wallet. The account exists exactly
/// when the session is connected.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WalletSession {
    #[default]
    Disconnected,
    Connected { account: String },
}

impl WalletSession {
    pub fn is_connected(&self) -> bool {
        matches!(self, WalletSession::Connected { .. })
    }

    pub fn account(&self) -> Option<&str> {
        match self {
            WalletSession::Connected { account } => Some(account),
            WalletSession::Disconnected => None,
        }
    }

    /// Truncated display form of the connected account
    /// (`"0xABCD...cdef"`), if any.
    pub fn display_account(&self) -> Option<String> {
        self.account().map(truncate_address)
    }
}

/// Owns the session state and talks to the injected wallet provider.
///
/// `provider` is `None` when the host environment has no wallet extension;
/// every connect attempt then fails with [`AppError::ProviderUnavailable`]
/// without touching the session.
#[derive(Debug, Clone)]
pub struct WalletManager<P> {
    provider: Option<P>,
    session: WalletSession,
}

impl<P: WalletProvider + Clone> WalletManager<P> {
    pub fn new(provider: Option<P>) -> Self {
        Self {
            provider,
            session: WalletSession::Disconnected,
        }
    }

    pub fn session(&self) -> &WalletSession {
        &self.session
    }

    /// Handle to the injected provider, or `ProviderUnavailable` if the
    /// host has none. The clone is what callers await on so the manager
    /// itself stays borrowable during the suspension.
    pub fn provider(&self) -> Result<P, AppError> {
        self.provider.clone().ok_or(AppError::ProviderUnavailable)
    }

    /// Apply the outcome of an account request.
    ///
    /// First returned account wins. An empty list or a provider error maps
    /// to [`AppError::ConnectionRejected`] and leaves the session as it was.
    pub fn apply_accounts(
        &mut self,
        outcome: Result<Vec<String>, ProviderError>,
    ) -> Result<Notice, AppError> {
        let accounts = outcome.map_err(|e| AppError::ConnectionRejected(e.to_string()))?;
        let account = accounts.into_iter().next().ok_or_else(|| {
            AppError::ConnectionRejected("provider returned no accounts".to_string())
        })?;

        let display = truncate_address(&account);
        self.session = WalletSession::Connected { account };
        Ok(Notice::success(format!("Wallet connected: {}", display)))
    }

    /// Request account access and bind the first returned account.
    ///
    /// Suspends while the user approves or rejects in the wallet UI.
    /// Calling this while already connected simply re-requests accounts.
    pub async fn connect(&mut self) -> Result<Notice, AppError> {
        let provider = self.provider()?;
        let outcome = provider.request_accounts().await;
        self.apply_accounts(outcome)
    }

    /// React to the host's `accountsChanged` signal.
    ///
    /// An empty list means the wallet revoked access, so the session drops
    /// back to `Disconnected`. A non-empty list rebinds the account only if
    /// a session was already established.
    pub fn handle_accounts_changed(&mut self, accounts: Vec<String>) {
        match accounts.into_iter().next() {
            None => self.session = WalletSession::Disconnected,
            Some(account) if self.session.is_connected() => {
                self.session = WalletSession::Connected { account };
            }
            Some(_) => {}
        }
    }
}
