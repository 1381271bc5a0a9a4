//! mediator-demo - two components coordinated by a mediator
//!
//! `Component1` and `Component2` never reference each other. Each one prints
//! what it did and notifies its mediator; the mediator decides which other
//! operations follow.
//!
//! # Architecture
//!
//! ```text
//!             Client
//!           /        \
//!   Component1    Component2
//!   do_a, do_b    do_c, do_d
//!        \   notify   /
//!       ConcreteMediator
//!   A -> [C]    D -> [B, C]
//! ```
//!
//! Everything runs synchronously on one call stack. A notification may call
//! back into components, which notify again before the outer call returns.
//!
//! # Example
//!
//! ```
//! use mediator_demo::{Client, Console, EventId};
//!
//! let console = Console::capture();
//! let client = Client::wire(console.clone());
//! client.trigger(EventId::A)?;
//! assert_eq!(console.lines().last().map(String::as_str), Some("Component 2 does C."));
//! # Ok::<(), mediator_demo::Error>(())
//! ```

pub mod cli;
pub mod client;
pub mod component;
pub mod config;
pub mod console;
pub mod error;
pub mod event;
pub mod mediator;

pub use client::{Client, DEFAULT_SCENARIO};
pub use component::{Component, Component1, Component2};
pub use config::Config;
pub use console::Console;
pub use error::{Error, Result};
pub use event::EventId;
pub use mediator::{ConcreteMediator, Mediator};
