use carelink_app::{AppContext, pagination::PagedList};
use carelink_core::pagination::PageQuery;
use eyre::{Result, eyre};

use crate::{
    cli::{Command, PageArgs},
    terminal::{TerminalConfirmer, TerminalNotifier},
};

mod account;
mod admin;
mod provider;
mod user;

/// What every command handler is given.
pub struct Shell<'a> {
    pub ctx: &'a AppContext,
    pub notifier: &'a TerminalNotifier,
    pub confirmer: &'a TerminalConfirmer,
}

pub async fn run(command: Command, shell: &Shell<'_>) -> Result<()> {
    match command {
        Command::Account(command) => account::run(command, shell).await,
        Command::User { action } => user::run(action, shell).await,
        Command::Provider { action } => provider::run(action, shell).await,
        Command::Admin { action } => admin::run(action, shell).await,
    }
}

fn page_list<T>(page: PageArgs) -> PagedList<T> {
    PagedList::new(PageQuery::from(page))
}

/// Turns a controller's `None` (already toasted) into a non-zero exit.
fn loaded<T>(value: Option<T>) -> Result<T> {
    value.ok_or_else(|| eyre!("Request did not complete"))
}

/// Same for the `false` a list or mutation returns after a failure toast.
fn done(ok: bool) -> Result<()> {
    if ok {
        Ok(())
    } else {
        Err(eyre!("Request did not complete"))
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}
