//! Notice state management
//!
//! One slot holding the latest user-facing notice. Every success/failure
//! path in the connect and swap flows lands here; guard no-ops (like a
//! duplicate submit) are dropped silently.

use leptos::prelude::*;
use swap_core::{AppError, Notice};

/// Global notice context
#[derive(Clone, Copy)]
pub struct NoticeContext {
    pub current: RwSignal<Option<Notice>>,
}

impl NoticeContext {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
        }
    }

    pub fn push(&self, notice: Notice) {
        self.current.set(Some(notice));
    }

    /// Surface an error as a notice unless it is a silent guard outcome.
    pub fn report(&self, error: &AppError) {
        if error.is_silent() {
            log::debug!("suppressed: {}", error);
            return;
        }
        log::warn!("{}", error);
        self.current.set(Some(error.notice()));
    }

    pub fn clear(&self) {
        self.current.set(None);
    }
}

pub fn provide_notice_context() -> NoticeContext {
    let context = NoticeContext::new();
    provide_context(context);
    context
}

pub fn use_notice_context() -> NoticeContext {
    expect_context::<NoticeContext>()
}
