//! Pure text view layer
//!
//! A pure function from state to displayed output, plus the mapping from
//! input commands to actions. The view never mutates state: it consumes
//! snapshots and hands exactly one action per control back to the caller
//! for dispatch.

use crate::app::{AppAction, AppState};

/// Result of parsing one line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Dispatch the contained action
    Dispatch(AppAction),
    /// Exit the application
    Quit,
}

/// Map one line of input to a command
///
/// Each control maps to exactly one action:
/// `+` / `-` increment and decrement, `+N` / `-N` increase by a delta,
/// `toggle` flips counter visibility, `login` / `logout` drive the auth
/// slice, and `quit` exits. Unrecognized input yields `None`.
#[must_use]
pub fn parse_command(input: &str) -> Option<Command> {
    let input = input.trim();
    match input {
        "+" => Some(Command::Dispatch(AppAction::Increment)),
        "-" => Some(Command::Dispatch(AppAction::Decrement)),
        "toggle" => Some(Command::Dispatch(AppAction::ToggleVisibility)),
        "login" => Some(Command::Dispatch(AppAction::Login)),
        "logout" => Some(Command::Dispatch(AppAction::Logout)),
        "quit" | "exit" => Some(Command::Quit),
        _ => input
            .parse::<i64>()
            .ok()
            .map(|delta| Command::Dispatch(AppAction::IncreaseBy(delta))),
    }
}

/// Render the full application view from a state snapshot
///
/// - Header shows a logout control only while authenticated
/// - Body is the auth-entry view when unauthenticated, the profile view
///   otherwise
/// - The counter value is shown only while `visible` is true
#[must_use]
pub fn render(state: &AppState) -> String {
    let mut out = String::new();
    out.push_str(&render_header(state));
    out.push('\n');
    if state.auth.authenticated {
        out.push_str(&render_profile());
    } else {
        out.push_str(&render_auth_entry());
    }
    out.push('\n');
    out.push_str(&render_counter(state));
    out
}

fn render_header(state: &AppState) -> String {
    if state.auth.authenticated {
        "== Uniflow Auth ==  [My Products] [My Sales] [logout]".to_string()
    } else {
        "== Uniflow Auth ==".to_string()
    }
}

fn render_auth_entry() -> String {
    "Please log in.  (command: login)".to_string()
}

fn render_profile() -> String {
    "My User Profile".to_string()
}

fn render_counter(state: &AppState) -> String {
    let mut out = String::from("-- Counter --\n");
    if state.counter.visible {
        out.push_str(&format!("value: {}\n", state.counter.count));
    }
    out.push_str("(commands: +, -, <n>, toggle)");
    out
}
