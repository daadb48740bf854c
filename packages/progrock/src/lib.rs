//! Immutable progress bars for the command line
//!
//! # General Principle
//! A bar is a plain value. [`ProgressState`] holds the current and total steps,
//! the done flag and the instant it was created. Every transition
//! ([`tick`](ProgressState::tick), [`tick_by`](ProgressState::tick_by),
//! [`mark_done`](ProgressState::mark_done)) returns a new state, and the caller
//! keeps the latest one. There is no shared mutable state, no background thread
//! and no terminal management.
//!
//! ```rust
//! let bar = progrock::ProgressState::new(50);
//! let bar = bar.tick_by(25);
//! assert_eq!(bar.percent(), 50);
//! ```
//!
//! # Rendering
//! [`RenderOptions`] configures how a state turns into text: the bar length,
//! the fill characters and a format template. The template recognizes the
//! following tokens:
//!
//! | token | replaced with |
//! |-|-|
//! | `:bar` | the bar itself |
//! | `:progress` | the current step, right-aligned to the width of the total |
//! | `:total` | the total steps |
//! | `:percent` | the percentage done, right-aligned to 3 characters |
//! | `:elapsed` | elapsed time as `MM:SS` |
//! | `:remaining` | estimated remaining time as `MM:SS`, or `--:--` if unknown |
//!
//! Anything else in the template is kept as is.
//!
//! ```rust
//! use progrock::{ProgressState, RenderOptions};
//!
//! let options = RenderOptions::builder().format("(:bar)").length(10).build();
//! let text = ProgressState::new(50).tick_by(25).render_with(&options);
//! assert_eq!(text, "(=====     )");
//! ```
//!
//! # Printing
//! [`ProgressState::write_to`] writes `\r` followed by the rendered text to any
//! [`std::io::Write`], so that repeated writes overwrite the same line. A bar
//! marked as done also terminates the line. [`ProgressState::print`] does the
//! same on stdout.
//!
//! # `serde` integration
//! With the `serde` feature, [`RenderOptions`] can be (de)serialized, and
//! [`RenderOptionsBuilder`] can be deserialized from a partial configuration.
//! Fields missing from the configuration take the default values.
//!
//! The configuration tests in `tests/config.rs` need the feature:
//! `cargo test -p progrock --features serde` (or `cargo test --workspace`,
//! where `progrock-cli` turns it on).

mod options;
pub use options::{RenderOptions, RenderOptionsBuilder};

mod state;
pub use state::ProgressState;

mod render;
pub use render::Token;

mod print;

// re-exports from libraries
pub use anyhow::{Error, Result};
