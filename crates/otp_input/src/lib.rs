#![forbid(unsafe_code)]
// Allow pedantic lints for early-stage API ergonomics.
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::nursery)]
#![allow(clippy::pedantic)]

//! # otp_input
//!
//! A segmented one-time-passcode input for terminal applications.
//!
//! One hidden text field receives every keystroke; a row of display cells
//! each show one character of its value. The field's native selection is
//! re-projected onto the cells so that exactly one cell (or a shift-selected
//! range) is highlighted, which makes the row feel like separate boxes
//! while typing, deleting, pasting and navigating all go through one input.
//!
//! - **root** - [`Otp`] and its builder: state ownership, callbacks, view
//! - **controller** - the hidden field and its selection policy
//! - **native** - the text field model the controller drives
//! - **cell** / **caret** - display cells and their caret indicator
//! - **tree** - declarative layout and item numbering
//! - **markup** - element tree with `data-qds-otp-*` attributes
//! - **config** - TOML/JSON settings for the standard layout
//!
//! ## Example
//!
//! ```rust
//! use otp_input::prelude::*;
//!
//! let mut otp = Otp::builder()
//!     .child(Node::hidden_input())
//!     .child(Node::row([Node::item(), Node::item(), Node::text("-"), Node::item()]))
//!     .on_complete(|| println!("done"))
//!     .build()
//!     .unwrap();
//!
//! otp.update(InputEvent::Focus);
//! otp.update(InputEvent::Paste("907".into()));
//! assert!(otp.is_complete());
//! ```

pub mod caret;
pub mod cell;
pub mod config;
pub mod controller;
pub mod error;
pub mod event;
pub mod key;
pub mod markup;
pub mod native;
pub mod pattern;
pub mod root;
pub mod signal;
pub mod state;
pub mod style;
pub mod tree;

pub use caret::{Caret, CaretMode};
pub use cell::{Cell, CellSnapshot};
pub use config::OtpConfig;
pub use controller::HiddenInput;
pub use error::{Error, Result};
pub use event::InputEvent;
pub use key::{Key, KeyEvent};
pub use markup::{Attribute, Content, Element};
pub use native::{NativeInput, SelectionDirection};
pub use pattern::{DEFAULT_PATTERN, Pattern};
pub use root::{Otp, OtpBuilder};
pub use signal::Signal;
pub use state::{OtpState, SelectionPhase, SharedState};
pub use style::Styles;
pub use tree::{Direction, Node, standard_layout};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::caret::CaretMode;
    pub use crate::config::OtpConfig;
    pub use crate::event::InputEvent;
    pub use crate::key::{Key, KeyEvent};
    pub use crate::root::{Otp, OtpBuilder};
    pub use crate::signal::Signal;
    pub use crate::state::SelectionPhase;
    pub use crate::style::Styles;
    pub use crate::tree::Node;
}
