//! Boolean toggles shared by the admin screens: block/unblock for accounts,
//! list/unlist for categories and blogs.

/// Which boolean a record exposes for toggling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleKind {
    Block,
    List,
}

impl ToggleKind {
    /// Verb for moving the flag to `value` (`block`, `unlist`, ...). Also the
    /// last path segment of the matching admin endpoint.
    pub fn action(self, value: bool) -> &'static str {
        match (self, value) {
            (ToggleKind::Block, true) => "block",
            (ToggleKind::Block, false) => "unblock",
            (ToggleKind::List, true) => "list",
            (ToggleKind::List, false) => "unlist",
        }
    }
}

pub trait Toggleable {
    const KIND: ToggleKind;

    fn record_id(&self) -> &str;

    fn flag(&self) -> bool;

    fn set_flag(&mut self, value: bool);
}

/// Sets the flag of the record with `id` to `value`, leaving every other
/// record untouched. Returns `false` when no record has that id.
pub fn apply_toggle<T: Toggleable>(records: &mut [T], id: &str, value: bool) -> bool {
    match records.iter_mut().find(|record| record.record_id() == id) {
        Some(record) => {
            record.set_flag(value);
            true
        }
        None => false,
    }
}
