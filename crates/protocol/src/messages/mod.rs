//! # Message Definitions
//!
//! One module per gameplay area. `Sys*` messages are the session and
//! stage plumbing shared by every server; `Mhf*` messages carry game
//! features. Types are re-exported flat so callers can name any message as
//! `messages::MsgSysPing` without knowing which area defines it.
//!
//! Slots without a type here are served by
//! [`Placeholder`](crate::message::Placeholder).

pub mod event;
pub mod guild;
pub mod house;
pub mod mail;
pub mod object;
pub mod quest;
pub mod reward;
pub mod save;
pub mod semaphore;
pub mod stage;
pub mod sys;

pub use event::*;
pub use guild::*;
pub use house::*;
pub use mail::*;
pub use object::*;
pub use quest::*;
pub use reward::*;
pub use save::*;
pub use semaphore::*;
pub use stage::*;
pub use sys::*;
