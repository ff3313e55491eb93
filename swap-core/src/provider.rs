//! Wallet provider abstraction
//!
//! The browser wallet is a single process-wide external resource. Instead
//! of reaching it through an ambient global, the session manager and swap
//! controller take an implementation of [`WalletProvider`] at construction,
//! so tests can drive the flows against a scripted mock.

use thiserror::Error;

/// Error raised by the external wallet provider (user rejection, network
/// failure, malformed response). Carries the provider's own message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ProviderError(pub String);

impl ProviderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Transaction payload handed to the provider: `{from, to, value, gas}`.
///
/// `value` is already in base units; the browser layer is responsible for
/// whatever wire encoding the provider expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRequest {
    pub from: String,
    pub to: String,
    pub value: u128,
    pub gas: u64,
}

/// The provider's confirmation record for a submitted transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxReceipt {
    pub transaction_hash: String,
}

/// Operations the injected browser wallet must expose.
///
/// Both calls suspend until the external wallet UI responds. Cancellation
/// is not supported; callers that want a timeout can wrap the returned
/// futures without changing these signatures.
#[allow(async_fn_in_trait)]
pub trait WalletProvider {
    /// Request account access. Returns the ordered account list on
    /// approval, or an error on rejection.
    async fn request_accounts(&self) -> Result<Vec<String>, ProviderError>;

    /// Submit a transaction and wait for the provider's receipt.
    async fn send_transaction(
        &self,
        tx: &TransactionRequest,
    ) -> Result<TxReceipt, ProviderError>;
}

#[cfg(test)]
pub(crate) mod mock {
    //! Scripted provider for driving the connect and swap flows in tests.

    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone)]
    pub struct MockProvider {
        accounts: Result<Vec<String>, ProviderError>,
        send_result: Result<TxReceipt, ProviderError>,
        /// Every transaction the provider was asked to send.
        pub sent: Rc<RefCell<Vec<TransactionRequest>>>,
        /// Number of account requests received.
        pub account_requests: Rc<RefCell<usize>>,
    }

    impl MockProvider {
        pub fn new(accounts: Result<Vec<String>, ProviderError>) -> Self {
            Self {
                accounts,
                send_result: Ok(TxReceipt {
                    transaction_hash: "0xfeedbeef00000000000000000000000000000000000000000000000000001234"
                        .to_string(),
                }),
                sent: Rc::new(RefCell::new(Vec::new())),
                account_requests: Rc::new(RefCell::new(0)),
            }
        }

        pub fn with_accounts(accounts: &[&str]) -> Self {
            Self::new(Ok(accounts.iter().map(|a| a.to_string()).collect()))
        }

        pub fn rejecting_connect(message: &str) -> Self {
            Self::new(Err(ProviderError::new(message)))
        }

        pub fn failing_send(mut self, message: &str) -> Self {
            self.send_result = Err(ProviderError::new(message));
            self
        }

        pub fn sent_count(&self) -> usize {
            self.sent.borrow().len()
        }
    }

    impl WalletProvider for MockProvider {
        async fn request_accounts(&self) -> Result<Vec<String>, ProviderError> {
            *self.account_requests.borrow_mut() += 1;
            self.accounts.clone()
        }

        async fn send_transaction(
            &self,
            tx: &TransactionRequest,
        ) -> Result<TxReceipt, ProviderError> {
            self.sent.borrow_mut().push(tx.clone());
            self.send_result.clone()
        }
    }
}
