//! # craftcore Demo Entry Point
//!
//! Runs the headless scripted demo of both prototype games. Rendering and
//! input devices are host concerns; this binary stands in for a host by
//! feeding scripted key sequences into the sessions.
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

fn main() {
    craftcore::run();
}
