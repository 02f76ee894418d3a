//! # ansictl-markup — inline attribute markup for terminal text
//!
//! Turns strings like `"#[bd;fg red]Error:#[] disk full"` into text with
//! SGR escape sequences, or strips the markup to get the plain text back.
//!
//! # Architecture
//!
//! ```text
//! input string
//!     │
//!     ▼
//! delimiters.rs: find each #[...] occurrence (non-greedy, single pass)
//!     │
//!     ▼
//! token.rs:      split the clause on ';' and ' ', classify each token
//!     │
//!     ▼
//! resolve.rs:    instructions → SGR parameters, consulting defaults.rs
//!     │
//!     ▼
//! markup.rs:     splice one ESC[...m per occurrence back into the text
//! ```
//!
//! # Grammar
//!
//! ```text
//! clause      := token (";" token)*
//! token       := "" | "reset"
//!              | style | "not" SP style
//!              | channel SP "default"
//!              | channel SP color
//! channel     := "fg" | "bg"
//! color       := "#" HEX{3} | "#" HEX{6} | DEC "," DEC "," DEC
//!              | DEC | name | "bright" SP name
//! name        := black | red | green | yellow | blue | magenta | cyan | white
//! style       := bd | ft | it | ul | bk | iv | co | ol
//! ```
//!
//! Malformed tokens are dropped silently. Parsing never fails.
//!
//! # Configuration
//!
//! [`Markup`] holds the delimiters and default colors and is the primary
//! API. The [`global`] module wraps one process-wide instance for callers
//! that prefer free functions.

pub mod defaults;
pub mod delimiters;
pub mod error;
pub mod global;
pub mod markup;
pub mod resolve;
pub mod token;

pub use defaults::DefaultColors;
pub use delimiters::Delimiters;
pub use error::{Error, Result};
pub use markup::Markup;
pub use token::Instruction;
