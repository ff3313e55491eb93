//! Wallet state management

use leptos::prelude::*;
use leptos::task::spawn_local;

use swap_core::{WalletManager, WalletProvider, WalletSession};

use crate::services::BrowserProvider;
use crate::state::notices::NoticeContext;

/// Global wallet context
///
/// The manager lives inside a signal so session transitions re-render
/// anything that reads it. Connect is split around the provider await:
/// the signal is only borrowed before and after the suspension, never
/// across it.
#[derive(Clone, Copy)]
pub struct WalletContext {
    manager: RwSignal<WalletManager<BrowserProvider>>,
    pub connecting: RwSignal<bool>,
}

impl WalletContext {
    pub fn new() -> Self {
        Self {
            manager: RwSignal::new(WalletManager::new(BrowserProvider::detect())),
            connecting: RwSignal::new(false),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.manager.with(|m| m.session().is_connected())
    }

    pub fn display_account(&self) -> Option<String> {
        self.manager.with(|m| m.session().display_account())
    }

    /// Untracked snapshot for submission-time authorization checks.
    pub fn session(&self) -> WalletSession {
        self.manager.with_untracked(|m| m.session().clone())
    }

    /// Run the connect flow: request accounts, bind the first one, surface
    /// the outcome as a notice. Re-entrant clicks while the wallet dialog
    /// is open are dropped.
    pub fn connect(&self, notices: NoticeContext) {
        if self.connecting.get_untracked() {
            return;
        }
        notices.clear();

        let provider = match self.manager.with_untracked(|m| m.provider()) {
            Ok(provider) => provider,
            Err(e) => {
                notices.report(&e);
                return;
            }
        };

        self.connecting.set(true);
        let ctx = *self;
        spawn_local(async move {
            let outcome = provider.request_accounts().await;
            if let Some(result) = ctx.manager.try_update(|m| m.apply_accounts(outcome)) {
                match result {
                    Ok(notice) => {
                        log::info!("wallet connected");
                        notices.push(notice);
                    }
                    Err(e) => notices.report(&e),
                }
            }
            ctx.connecting.set(false);
        });
    }

    pub fn accounts_changed(&self, accounts: Vec<String>) {
        log::info!("accountsChanged: {} account(s)", accounts.len());
        self.manager.update(|m| m.handle_accounts_changed(accounts));
    }
}

pub fn provide_wallet_context() -> WalletContext {
    let context = WalletContext::new();

    // Follow the host if the user switches or revokes accounts in the
    // wallet extension.
    if context.manager.with_untracked(|m| m.provider().is_ok()) {
        BrowserProvider::on_accounts_changed(move |accounts| context.accounts_changed(accounts));
    }

    provide_context(context);
    context
}

pub fn use_wallet_context() -> WalletContext {
    expect_context::<WalletContext>()
}
