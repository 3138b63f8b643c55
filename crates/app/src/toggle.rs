//! Confirm-then-mutate for boolean admin toggles.
//!
//! The prompt comes first; a declined prompt ends the action without a
//! request or a toast. After a successful call only the targeted record's
//! flag is patched in the list already on screen. A failed call leaves the
//! list exactly as it was.

use std::future::Future;

use carelink_core::{
    envelope::Ack,
    errors::CareResult,
    toggle::{Toggleable, apply_toggle},
};
use tracing::{info, warn};

use crate::notify::{Confirmer, Notifier, toast_failure};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Declined,
    Applied,
    Failed,
}

pub struct ConfirmToggle<'a> {
    confirmer: &'a dyn Confirmer,
    notifier: &'a dyn Notifier,
}

impl<'a> ConfirmToggle<'a> {
    pub fn new(confirmer: &'a dyn Confirmer, notifier: &'a dyn Notifier) -> Self {
        Self { confirmer, notifier }
    }

    /// Asks to move the flag of record `id` to `value`, then runs `call`.
    /// `subject` names the record in the prompt and toasts ("user", "blog").
    pub async fn run<T, F, Fut>(
        &self,
        records: &mut [T],
        id: &str,
        value: bool,
        subject: &str,
        call: F,
    ) -> ToggleOutcome
    where
        T: Toggleable,
        F: FnOnce() -> Fut,
        Fut: Future<Output = CareResult<Ack>>,
    {
        let action = T::KIND.action(value);
        if !self
            .confirmer
            .confirm(&format!("Are you sure you want to {action} this {subject}?"))
        {
            return ToggleOutcome::Declined;
        }

        if toast_failure(self.notifier, &format!("{action} {subject}"), call().await).is_none() {
            return ToggleOutcome::Failed;
        }

        if apply_toggle(records, id, value) {
            info!("{} {} {}", action, subject, id);
        } else {
            warn!("{} {} succeeded but {} is not in the current page", action, subject, id);
        }
        self.notifier.success(&format!("{} {}ed successfully", capitalize(subject), action));
        ToggleOutcome::Applied
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
