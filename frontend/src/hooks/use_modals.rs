//! Which modal is open, and what it is open for.
//!
//! Only one modal exists at a time. The debt target travels inside the
//! `AddDebt` state, so closing any modal forgets it.

use shared::{Party, PartyKind};
use yew::prelude::*;

/// The party a debt is being recorded against
#[derive(Debug, Clone, PartialEq)]
pub struct DebtTarget {
    pub kind: PartyKind,
    pub id: u64,
    pub name: String,
}

impl From<(PartyKind, &Party)> for DebtTarget {
    fn from((kind, party): (PartyKind, &Party)) -> Self {
        Self { kind, id: party.id, name: party.name.clone() }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum ModalState {
    #[default]
    Closed,
    AddParty { kind: PartyKind },
    EditParty { kind: PartyKind, party: Party },
    AddDebt { target: DebtTarget },
    QuickAdd,
    Details { kind: PartyKind, id: u64 },
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        !matches!(self, ModalState::Closed)
    }

    pub fn debt_target(&self) -> Option<&DebtTarget> {
        match self {
            ModalState::AddDebt { target } => Some(target),
            _ => None,
        }
    }
}

pub fn debt_modal_title(target: &DebtTarget) -> String {
    format!("Add debt - {}", target.name)
}

/// Entries of the quick-add menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    Customer,
    Supplier,
    Debt,
    Payment,
}

/// What a quick-add entry leads to once the menu has closed
#[derive(Debug, Clone, PartialEq)]
pub enum QuickActionResult {
    Open(ModalState),
    Hint(&'static str),
}

impl QuickAction {
    pub fn resolve(self) -> QuickActionResult {
        match self {
            QuickAction::Customer => QuickActionResult::Open(ModalState::AddParty { kind: PartyKind::Customer }),
            QuickAction::Supplier => QuickActionResult::Open(ModalState::AddParty { kind: PartyKind::Supplier }),
            QuickAction::Debt => QuickActionResult::Hint("Select a customer to add a debt"),
            QuickAction::Payment => QuickActionResult::Hint("Select a customer to record a payment"),
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct ModalController {
    state: UseStateHandle<ModalState>,
}

impl ModalController {
    pub fn current(&self) -> &ModalState {
        &self.state
    }

    pub fn open(&self, modal: ModalState) {
        self.state.set(modal);
    }

    pub fn close_all(&self) {
        self.state.set(ModalState::Closed);
    }

    pub fn open_callback(&self) -> Callback<ModalState> {
        let state = self.state.clone();
        Callback::from(move |modal| state.set(modal))
    }

    pub fn close_callback(&self) -> Callback<()> {
        let state = self.state.clone();
        Callback::from(move |_| state.set(ModalState::Closed))
    }
}

#[hook]
pub fn use_modals() -> ModalController {
    let state = use_state(ModalState::default);
    ModalController { state }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ali() -> Party {
        Party {
            id: 42,
            name: "Ali".to_string(),
            phone: String::new(),
            category: String::new(),
            notes: String::new(),
            balance: 0.0,
            created_at: String::new(),
            transactions: Vec::new(),
        }
    }

    #[test]
    fn test_debt_modal_carries_its_target() {
        let target = DebtTarget::from((PartyKind::Customer, &ali()));
        let modal = ModalState::AddDebt { target: target.clone() };

        assert!(modal.is_open());
        assert_eq!(modal.debt_target(), Some(&target));
        assert_eq!(debt_modal_title(&target), "Add debt - Ali");
    }

    #[test]
    fn test_closing_forgets_the_target() {
        let mut modal = ModalState::AddDebt { target: DebtTarget::from((PartyKind::Customer, &ali())) };
        assert!(modal.debt_target().is_some());

        modal = ModalState::Closed;
        assert!(!modal.is_open());
        assert_eq!(modal.debt_target(), None);
    }

    #[test]
    fn test_other_modals_have_no_target() {
        for modal in [
            ModalState::QuickAdd,
            ModalState::AddParty { kind: PartyKind::Supplier },
            ModalState::Details { kind: PartyKind::Customer, id: 42 },
        ] {
            assert_eq!(modal.debt_target(), None);
        }
    }

    #[test]
    fn test_quick_actions() {
        assert_eq!(
            QuickAction::Supplier.resolve(),
            QuickActionResult::Open(ModalState::AddParty { kind: PartyKind::Supplier })
        );
        assert_eq!(QuickAction::Debt.resolve(), QuickActionResult::Hint("Select a customer to add a debt"));
        assert_eq!(
            QuickAction::Payment.resolve(),
            QuickActionResult::Hint("Select a customer to record a payment")
        );
    }
}
