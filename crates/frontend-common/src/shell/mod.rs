//! Shell state and context

pub mod context;
pub mod state;

pub use context::{
    use_close_mobile_menu, use_shell, use_sign_out, use_toggle_mobile_menu, ShellContext,
};
pub use state::{GateState, ShellAction, ShellState, Verdict};
