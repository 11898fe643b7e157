//! Independently toggled popups that close on outside interaction.
//!
//! Menus are not mutually exclusive: opening one leaves the others as they are. Each menu only
//! reacts to its own trigger and to document clicks that miss both its trigger and its panel.

use crate::model::UiRegion;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuId {
    Start,
    Account,
    /// The popup next to the billing timer.
    Billing,
}

impl MenuId {
    pub const ALL: [MenuId; 3] = [MenuId::Start, MenuId::Account, MenuId::Billing];

    /// Trigger and panel regions; a click inside either keeps the menu open.
    pub fn regions(self) -> [UiRegion; 2] {
        match self {
            Self::Start => [UiRegion::StartButton, UiRegion::StartMenu],
            Self::Account => [UiRegion::AccountButton, UiRegion::AccountDropdown],
            Self::Billing => [UiRegion::BillingTimer, UiRegion::BillingPopup],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Flips the menu and returns the new open flag.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Closes the menu, returning whether it was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// Closes the menu unless `path` passes through one of `regions`.
    pub fn close_if_outside(&mut self, regions: &[UiRegion], path: &[UiRegion]) -> bool {
        if !self.open || path.iter().any(|region| regions.contains(region)) {
            return false;
        }
        self.close()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuSet {
    start: MenuState,
    account: MenuState,
    billing: MenuState,
}

impl MenuSet {
    pub fn get(&self, id: MenuId) -> MenuState {
        match id {
            MenuId::Start => self.start,
            MenuId::Account => self.account,
            MenuId::Billing => self.billing,
        }
    }

    pub fn get_mut(&mut self, id: MenuId) -> &mut MenuState {
        match id {
            MenuId::Start => &mut self.start,
            MenuId::Account => &mut self.account,
            MenuId::Billing => &mut self.billing,
        }
    }

    pub fn is_open(&self, id: MenuId) -> bool {
        self.get(id).is_open()
    }

    /// Evaluates one document click against every menu and returns the ones it closed.
    pub fn close_outside(&mut self, path: &[UiRegion]) -> Vec<MenuId> {
        MenuId::ALL
            .into_iter()
            .filter(|id| self.get_mut(*id).close_if_outside(&id.regions(), path))
            .collect()
    }
}
