//! Swap form state and submission flow
//!
//! [`SwapRequest`] holds what the user typed; [`SwapController`] gates
//! submission on the wallet session, builds the transaction, and drives
//! it through the provider. Exactly one submission is in flight at a
//! time and the status always returns to `Idle` on both outcomes.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_TOKEN_IN, DEFAULT_TOKEN_OUT, SWAP_GAS_LIMIT, SWAP_ROUTER_ADDRESS, TOKEN_DECIMALS,
};
use crate::error::AppError;
use crate::format::truncate_address;
use crate::notice::Notice;
use crate::provider::{ProviderError, TransactionRequest, TxReceipt, WalletProvider};
use crate::session::WalletSession;
use crate::units::parse_units;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwapStatus {
    #[default]
    Idle,
    Submitting,
}

/// The two amount fields and the in-flight/idle status of a swap.
///
/// Amounts are raw user input: they may be empty, non-numeric, or stale
/// at any time. Validation happens once, at submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapRequest {
    pub token_in: String,
    pub token_out: String,
    pub amount_in: String,
    pub amount_out: String,
    status: SwapStatus,
}

impl Default for SwapRequest {
    fn default() -> Self {
        Self::new(DEFAULT_TOKEN_IN, DEFAULT_TOKEN_OUT)
    }
}

impl SwapRequest {
    pub fn new(token_in: impl Into<String>, token_out: impl Into<String>) -> Self {
        Self {
            token_in: token_in.into(),
            token_out: token_out.into(),
            amount_in: String::new(),
            amount_out: String::new(),
            status: SwapStatus::Idle,
        }
    }

    pub fn status(&self) -> SwapStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SwapStatus::Submitting
    }

    /// Setters never validate and succeed regardless of status; edits made
    /// while a submission is in flight land in the form, not in the
    /// transaction already sent.
    pub fn set_amount_in(&mut self, value: impl Into<String>) {
        self.amount_in = value.into();
    }

    pub fn set_amount_out(&mut self, value: impl Into<String>) {
        self.amount_out = value.into();
    }

    /// Derived submit-button predicate: both fields non-empty and nothing
    /// in flight.
    pub fn can_submit(&self) -> bool {
        !self.amount_in.is_empty()
            && !self.amount_out.is_empty()
            && self.status != SwapStatus::Submitting
    }

    /// Claim the single in-flight slot.
    pub(crate) fn begin(&mut self) -> Result<(), AppError> {
        if self.status == SwapStatus::Submitting {
            return Err(AppError::SubmissionInFlight);
        }
        self.status = SwapStatus::Submitting;
        Ok(())
    }

    /// A confirmed swap's only data effect: the two displayed amounts
    /// trade places. Placeholder for a real conversion, kept deliberately.
    pub(crate) fn complete(&mut self) {
        std::mem::swap(&mut self.amount_in, &mut self.amount_out);
        self.status = SwapStatus::Idle;
    }

    pub(crate) fn abort(&mut self) {
        self.status = SwapStatus::Idle;
    }
}

/// Drives a [`SwapRequest`] through the injected wallet provider.
///
/// [`SwapController::submit`] is the whole flow in one await. The
/// [`SwapController::begin_submission`] / [`SwapController::finish_submission`]
/// pair is the same flow split around the provider suspension, for callers
/// that must not hold a borrow across the await (the UI thread keeps
/// accepting amount edits while a swap is pending).
#[derive(Debug, Clone)]
pub struct SwapController<P> {
    provider: Option<P>,
    request: SwapRequest,
}

impl<P: WalletProvider + Clone> SwapController<P> {
    pub fn new(provider: Option<P>) -> Self {
        Self {
            provider,
            request: SwapRequest::default(),
        }
    }

    pub fn request(&self) -> &SwapRequest {
        &self.request
    }

    pub fn set_amount_in(&mut self, value: impl Into<String>) {
        self.request.set_amount_in(value);
    }

    pub fn set_amount_out(&mut self, value: impl Into<String>) {
        self.request.set_amount_out(value);
    }

    pub fn can_submit(&self) -> bool {
        self.request.can_submit()
    }

    /// Guard and build phase.
    ///
    /// Checks authorization, claims the in-flight slot, and snapshots
    /// `amount_in` into a transaction addressed to the swap router. On any
    /// failure the request is back at `Idle` with amounts untouched and
    /// the provider has not been called.
    pub fn begin_submission(
        &mut self,
        session: &WalletSession,
    ) -> Result<(TransactionRequest, P), AppError> {
        let from = session
            .account()
            .ok_or(AppError::NotAuthorized)?
            .to_string();

        self.request.begin()?;

        let value = match parse_units(&self.request.amount_in, TOKEN_DECIMALS) {
            Ok(value) => value,
            Err(e) => {
                self.request.abort();
                return Err(e);
            }
        };
        let provider = match self.provider.clone() {
            Some(provider) => provider,
            None => {
                // Connected session without a provider cannot happen through
                // the normal flow; fail the submission rather than panic.
                self.request.abort();
                return Err(AppError::SubmissionFailed(
                    "wallet provider is unavailable".to_string(),
                ));
            }
        };

        let tx = TransactionRequest {
            from,
            to: SWAP_ROUTER_ADDRESS.to_string(),
            value,
            gas: SWAP_GAS_LIMIT,
        };
        Ok((tx, provider))
    }

    /// Outcome phase: releases the in-flight slot unconditionally.
    ///
    /// Success exchanges the two amount fields and reports the truncated
    /// transaction hash; failure leaves the amounts exactly as they were.
    pub fn finish_submission(
        &mut self,
        outcome: Result<TxReceipt, ProviderError>,
    ) -> Result<Notice, AppError> {
        match outcome {
            Ok(receipt) => {
                self.request.complete();
                Ok(Notice::success(format!(
                    "Swap submitted: {}",
                    truncate_address(&receipt.transaction_hash)
                )))
            }
            Err(e) => {
                self.request.abort();
                Err(AppError::SubmissionFailed(e.to_string()))
            }
        }
    }

    /// Submit the current form through the provider.
    pub async fn submit(&mut self, session: &WalletSession) -> Result<Notice, AppError> {
        let (tx, provider) = self.begin_submission(session)?;
        let outcome = provider.send_transaction(&tx).await;
        self.finish_submission(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::mock::MockProvider;

    const ACCOUNT: &str = "0xABCDEF1234567890abcdef";

    fn connected() -> WalletSession {
        WalletSession::Connected {
            account: ACCOUNT.to_string(),
        }
    }

    fn controller(provider: MockProvider) -> SwapController<MockProvider> {
        SwapController::new(Some(provider))
    }

    #[test]
    fn test_can_submit_requires_both_amounts() {
        let mut request = SwapRequest::default();
        assert!(!request.can_submit());

        request.set_amount_in("1.5");
        assert!(!request.can_submit());

        request.set_amount_out("300");
        assert!(request.can_submit());

        request.set_amount_in("");
        assert!(!request.can_submit());

        // Order of updates never matters, only the current field contents.
        request.set_amount_in("2");
        assert!(request.can_submit());
    }

    #[test]
    fn test_can_submit_false_while_submitting() {
        let mut request = SwapRequest::default();
        request.set_amount_in("1");
        request.set_amount_out("2");
        request.begin().unwrap();
        assert!(!request.can_submit());

        request.abort();
        assert!(request.can_submit());
    }

    #[test]
    fn test_setters_accept_anything() {
        let mut request = SwapRequest::default();
        request.set_amount_in("not a number");
        request.set_amount_out("-5");
        assert_eq!(request.amount_in, "not a number");
        assert_eq!(request.amount_out, "-5");
        assert_eq!(request.status(), SwapStatus::Idle);
    }

    #[tokio::test]
    async fn test_submit_unauthorized_never_calls_provider() {
        let provider = MockProvider::with_accounts(&[ACCOUNT]);
        let mut ctl = controller(provider.clone());
        ctl.set_amount_in("1.5");
        ctl.set_amount_out("300");

        let err = ctl.submit(&WalletSession::Disconnected).await.unwrap_err();
        assert_eq!(err, AppError::NotAuthorized);
        assert_eq!(provider.sent_count(), 0);
        assert_eq!(ctl.request().status(), SwapStatus::Idle);
    }

    #[tokio::test]
    async fn test_successful_submit_exchanges_amounts() {
        let provider = MockProvider::with_accounts(&[ACCOUNT]);
        let mut ctl = controller(provider.clone());
        ctl.set_amount_in("1.5");
        ctl.set_amount_out("300");

        let notice = ctl.submit(&connected()).await.unwrap();

        assert_eq!(ctl.request().amount_in, "300");
        assert_eq!(ctl.request().amount_out, "1.5");
        assert_eq!(ctl.request().status(), SwapStatus::Idle);
        assert!(notice.message.starts_with("Swap submitted:"));
        assert_eq!(provider.sent_count(), 1);
    }

    #[tokio::test]
    async fn test_transaction_is_built_from_snapshot() {
        let provider = MockProvider::with_accounts(&[ACCOUNT]);
        let mut ctl = controller(provider.clone());
        ctl.set_amount_in("1.5");
        ctl.set_amount_out("300");

        ctl.submit(&connected()).await.unwrap();

        let sent = provider.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].from, ACCOUNT);
        assert_eq!(sent[0].to, SWAP_ROUTER_ADDRESS);
        assert_eq!(sent[0].value, 1_500_000_000_000_000_000);
        assert_eq!(sent[0].gas, SWAP_GAS_LIMIT);
    }

    #[tokio::test]
    async fn test_failed_submit_leaves_amounts_untouched() {
        let provider = MockProvider::with_accounts(&[ACCOUNT]).failing_send("user denied signing");
        let mut ctl = controller(provider);
        ctl.set_amount_in("1.5");
        ctl.set_amount_out("300");

        let err = ctl.submit(&connected()).await.unwrap_err();

        assert!(matches!(err, AppError::SubmissionFailed(ref m) if m.contains("user denied")));
        assert_eq!(ctl.request().amount_in, "1.5");
        assert_eq!(ctl.request().amount_out, "300");
        assert_eq!(ctl.request().status(), SwapStatus::Idle);
    }

    #[tokio::test]
    async fn test_second_submit_while_in_flight_is_a_noop() {
        let provider = MockProvider::with_accounts(&[ACCOUNT]);
        let mut ctl = controller(provider.clone());
        ctl.set_amount_in("1.5");
        ctl.set_amount_out("300");

        // First submission suspended between its two phases.
        let (tx, p) = ctl.begin_submission(&connected()).unwrap();

        let err = ctl.submit(&connected()).await.unwrap_err();
        assert_eq!(err, AppError::SubmissionInFlight);
        assert!(err.is_silent());
        assert_eq!(provider.sent_count(), 0);

        // The first submission still completes normally.
        let outcome = p.send_transaction(&tx).await;
        ctl.finish_submission(outcome).unwrap();
        assert_eq!(provider.sent_count(), 1);
        assert_eq!(ctl.request().status(), SwapStatus::Idle);
    }

    #[tokio::test]
    async fn test_edits_during_flight_survive_and_get_exchanged() {
        let provider = MockProvider::with_accounts(&[ACCOUNT]);
        let mut ctl = controller(provider.clone());
        ctl.set_amount_in("1.5");
        ctl.set_amount_out("300");

        let (tx, p) = ctl.begin_submission(&connected()).unwrap();
        // User keeps typing while the wallet UI is open.
        ctl.set_amount_in("7");
        let outcome = p.send_transaction(&tx).await;
        ctl.finish_submission(outcome).unwrap();

        // The sent value came from the build-time snapshot...
        assert_eq!(provider.sent.borrow()[0].value, 1_500_000_000_000_000_000);
        // ...while the exchange applies to the current field contents.
        assert_eq!(ctl.request().amount_in, "300");
        assert_eq!(ctl.request().amount_out, "7");
    }

    #[tokio::test]
    async fn test_invalid_amount_fails_cleanly_before_provider() {
        let provider = MockProvider::with_accounts(&[ACCOUNT]);
        let mut ctl = controller(provider.clone());
        ctl.set_amount_in("lots");
        ctl.set_amount_out("300");

        let err = ctl.submit(&connected()).await.unwrap_err();

        assert!(matches!(err, AppError::InvalidAmount(_)));
        assert_eq!(provider.sent_count(), 0);
        assert_eq!(ctl.request().amount_in, "lots");
        assert_eq!(ctl.request().status(), SwapStatus::Idle);
    }

    #[tokio::test]
    async fn test_submission_cycle_repeats() {
        let provider = MockProvider::with_accounts(&[ACCOUNT]);
        let mut ctl = controller(provider.clone());
        ctl.set_amount_in("1");
        ctl.set_amount_out("2");

        ctl.submit(&connected()).await.unwrap();
        ctl.submit(&connected()).await.unwrap();

        assert_eq!(provider.sent_count(), 2);
        // Two exchanges land the amounts back where they started.
        assert_eq!(ctl.request().amount_in, "1");
        assert_eq!(ctl.request().amount_out, "2");
    }
}
