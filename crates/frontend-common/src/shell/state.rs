//! Shell state: session gate plus mobile menu

use crate::session::SessionRecord;
use std::rc::Rc;
use yew::prelude::*;

/// Outcome of inspecting the stored session
#[derive(Clone, Debug, PartialEq)]
pub enum Verdict {
    Authorized(SessionRecord),
    Redirect,
}

impl Verdict {
    pub fn from_session(session: Option<SessionRecord>) -> Self {
        match session {
            Some(record) if record.authenticated => Self::Authorized(record),
            _ => Self::Redirect,
        }
    }
}

/// Where the gate currently stands
#[derive(Clone, Debug, Default, PartialEq)]
pub enum GateState {
    #[default]
    Unresolved,
    Authorized(SessionRecord),
    /// Sent to the login route; terminal for this mount
    Redirected,
    /// Logged out by the user; terminal for this mount
    SignedOut,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShellState {
    pub gate: GateState,
    pub mobile_menu_open: bool,
}

pub enum ShellAction {
    Resolve(Verdict),
    ToggleMobileMenu,
    CloseMobileMenu,
    SignOut,
}

impl ShellState {
    /// The record to render with, if and only if content may be shown
    pub fn session(&self) -> Option<&SessionRecord> {
        match &self.gate {
            GateState::Authorized(record) => Some(record),
            _ => None,
        }
    }

    pub fn needs_redirect(&self) -> bool {
        self.gate == GateState::Redirected
    }
}

impl Reducible for ShellState {
    type Action = ShellAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ShellAction::Resolve(verdict) => {
                // Only the first verdict counts, so a redirect is issued at most once
                if self.gate != GateState::Unresolved {
                    return self;
                }
                let gate = match verdict {
                    Verdict::Authorized(record) => GateState::Authorized(record),
                    Verdict::Redirect => GateState::Redirected,
                };
                Rc::new(Self {
                    gate,
                    ..(*self).clone()
                })
            }
            ShellAction::ToggleMobileMenu => Rc::new(Self {
                mobile_menu_open: !self.mobile_menu_open,
                ..(*self).clone()
            }),
            ShellAction::CloseMobileMenu => {
                if !self.mobile_menu_open {
                    return self;
                }
                Rc::new(Self {
                    mobile_menu_open: false,
                    ..(*self).clone()
                })
            }
            ShellAction::SignOut => Rc::new(Self {
                gate: GateState::SignedOut,
                mobile_menu_open: false,
            }),
        }
    }
}
