//! Swap form state management

use leptos::prelude::*;
use leptos::task::spawn_local;

use swap_core::{SwapController, WalletProvider, WalletSession};

use crate::services::BrowserProvider;
use crate::state::notices::NoticeContext;

/// Global swap context
///
/// Wraps the core controller in a signal. Amount edits go straight
/// through at any time, including while a submission is awaiting the
/// wallet; the in-flight transaction keeps its build-time snapshot.
#[derive(Clone, Copy)]
pub struct SwapContext {
    controller: RwSignal<SwapController<BrowserProvider>>,
}

impl SwapContext {
    pub fn new() -> Self {
        Self {
            controller: RwSignal::new(SwapController::new(BrowserProvider::detect())),
        }
    }

    pub fn token_in(&self) -> String {
        self.controller.with(|c| c.request().token_in.clone())
    }

    pub fn token_out(&self) -> String {
        self.controller.with(|c| c.request().token_out.clone())
    }

    pub fn amount_in(&self) -> String {
        self.controller.with(|c| c.request().amount_in.clone())
    }

    pub fn amount_out(&self) -> String {
        self.controller.with(|c| c.request().amount_out.clone())
    }

    pub fn can_submit(&self) -> bool {
        self.controller.with(|c| c.can_submit())
    }

    pub fn is_submitting(&self) -> bool {
        self.controller.with(|c| c.request().is_submitting())
    }

    pub fn set_amount_in(&self, value: String) {
        self.controller.update(|c| c.set_amount_in(value));
    }

    pub fn set_amount_out(&self, value: String) {
        self.controller.update(|c| c.set_amount_out(value));
    }

    /// Run the submission flow for the current form contents.
    ///
    /// Guards and transaction build happen synchronously; only the
    /// provider wait is spawned. Failures surface as notices, a duplicate
    /// submit is silently dropped by `report`.
    pub fn submit(&self, session: WalletSession, notices: NoticeContext) {
        notices.clear();

        let begun = self
            .controller
            .try_update(|c| c.begin_submission(&session))
            .unwrap_or_else(|| Err(swap_core::AppError::SubmissionInFlight));

        let (tx, provider) = match begun {
            Ok(begun) => begun,
            Err(e) => {
                notices.report(&e);
                return;
            }
        };

        log::info!("submitting swap: {} base units from {}", tx.value, tx.from);
        let ctx = *self;
        spawn_local(async move {
            let outcome = provider.send_transaction(&tx).await;
            if let Some(result) = ctx.controller.try_update(|c| c.finish_submission(outcome)) {
                match result {
                    Ok(notice) => notices.push(notice),
                    Err(e) => notices.report(&e),
                }
            }
        });
    }
}

pub fn provide_swap_context() -> SwapContext {
    let context = SwapContext::new();
    provide_context(context);
    context
}

pub fn use_swap_context() -> SwapContext {
    expect_context::<SwapContext>()
}
