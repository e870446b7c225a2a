//! Interactive TUI interface

pub mod app;
mod rendering;

pub use app::{Action, App, Message, MessageStyle, Statistics, action_for, run_tui};
