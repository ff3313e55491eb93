//! Browser Wallet Integration via wasm-bindgen
//!
//! JavaScript interop for the injected `window.ethereum` provider
//! (EIP-1193 style). Presence is detected once at startup; the resulting
//! [`BrowserProvider`] handle is what gets injected into the core
//! `WalletManager` and `SwapController`.

use js_sys::Reflect;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use swap_core::{ProviderError, TransactionRequest, TxReceipt, WalletProvider};

#[wasm_bindgen(inline_js = "
export function hasEthereumProvider() {
    return typeof window.ethereum !== 'undefined' && window.ethereum !== null;
}

export async function ethRequestAccounts() {
    return await window.ethereum.request({ method: 'eth_requestAccounts' });
}

export async function ethSendTransaction(tx) {
    return await window.ethereum.request({ method: 'eth_sendTransaction', params: [tx] });
}

export function onAccountsChanged(callback) {
    if (window.ethereum && typeof window.ethereum.on === 'function') {
        window.ethereum.on('accountsChanged', (accounts) => callback(accounts));
    }
}
")]
extern "C" {
    /// Check whether a wallet extension injected a provider
    fn hasEthereumProvider() -> bool;

    /// Request account access (suspends on the wallet's approval dialog)
    #[wasm_bindgen(catch)]
    async fn ethRequestAccounts() -> Result<JsValue, JsValue>;

    /// Submit a transaction and wait for the transaction hash
    #[wasm_bindgen(catch)]
    async fn ethSendTransaction(tx: JsValue) -> Result<JsValue, JsValue>;

    /// Register a callback for the provider's accountsChanged event
    fn onAccountsChanged(callback: &js_sys::Function);
}

/// Wire form of a transaction for `eth_sendTransaction`: quantities are
/// hex-encoded strings.
#[derive(Serialize)]
struct EthTransaction {
    from: String,
    to: String,
    value: String,
    gas: String,
}

impl From<&TransactionRequest> for EthTransaction {
    fn from(tx: &TransactionRequest) -> Self {
        Self {
            from: tx.from.clone(),
            to: tx.to.clone(),
            value: format!("{:#x}", tx.value),
            gas: format!("{:#x}", tx.gas),
        }
    }
}

/// Handle to the injected `window.ethereum` object.
///
/// The provider itself is ambient browser state; this zero-sized handle
/// exists so the core crate receives it as an explicit dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowserProvider;

impl BrowserProvider {
    /// Detect the injected provider. `None` means no wallet extension is
    /// installed, which the core maps to `ProviderUnavailable`.
    pub fn detect() -> Option<Self> {
        hasEthereumProvider().then_some(Self)
    }

    /// Subscribe to the host's `accountsChanged` signal. The callback
    /// stays registered for the lifetime of the page.
    pub fn on_accounts_changed(mut callback: impl FnMut(Vec<String>) + 'static) {
        let closure = Closure::<dyn FnMut(JsValue)>::new(move |accounts: JsValue| {
            let accounts: Vec<String> =
                serde_wasm_bindgen::from_value(accounts).unwrap_or_default();
            callback(accounts);
        });
        onAccountsChanged(closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

impl WalletProvider for BrowserProvider {
    async fn request_accounts(&self) -> Result<Vec<String>, ProviderError> {
        let accounts = ethRequestAccounts().await.map_err(js_error)?;
        serde_wasm_bindgen::from_value(accounts)
            .map_err(|e| ProviderError::new(format!("unexpected accounts payload: {}", e)))
    }

    async fn send_transaction(&self, tx: &TransactionRequest) -> Result<TxReceipt, ProviderError> {
        let payload = serde_wasm_bindgen::to_value(&EthTransaction::from(tx))
            .map_err(|e| ProviderError::new(format!("failed to encode transaction: {}", e)))?;
        let hash = ethSendTransaction(payload).await.map_err(js_error)?;
        let transaction_hash = hash
            .as_string()
            .ok_or_else(|| ProviderError::new("provider returned no transaction hash"))?;
        Ok(TxReceipt { transaction_hash })
    }
}

/// Extract a readable message from a provider error. EIP-1193 errors are
/// objects carrying a `message` field; fall back to the raw value.
fn js_error(e: JsValue) -> ProviderError {
    let message = e
        .as_string()
        .or_else(|| {
            Reflect::get(&e, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{:?}", e));
    ProviderError::new(message)
}
