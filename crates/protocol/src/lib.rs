//! Wire types for the W3C WebDriver protocol.
//!
//! This crate contains the serde-serializable types exchanged with a
//! WebDriver server (chromedriver, geckodriver, a Selenium grid) over HTTP.
//! These types represent the "protocol layer": the shapes of request and
//! response bodies as they appear on the wire.
//!
//! # Design Philosophy
//!
//! Types in this crate are:
//! * Pure data: No behavior beyond serialization/deserialization
//! * 1:1 with protocol: Match the W3C WebDriver recommendation
//! * Stable: Changes only when the wire protocol changes
//!
//! Session-level behavior is built on top of these types in `notedraft-runtime`.
//!
//! See: <https://www.w3.org/TR/webdriver2/>

pub mod capabilities;
pub mod element;
pub mod envelope;

pub use capabilities::*;
pub use element::*;
pub use envelope::*;
