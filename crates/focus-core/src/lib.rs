//! Platform-free core of the focus dial.
//!
//! Everything in here runs on the host as well as on `wasm32`: pointer
//! geometry, the wedge path, the countdown driver, the session ritual, the
//! day checklist and the confetti particles.
//! The web frontend only translates DOM events in and paints frames out.

pub mod checklist;
pub mod confetti;
pub mod constants;
pub mod controller;
pub mod countdown;
pub mod cycle;
pub mod dial;
pub mod face;
pub mod geometry;
pub mod indicator;
pub mod readout;
pub mod ritual;
pub mod state;
pub mod subject;
pub mod wedge;

pub use checklist::*;
pub use confetti::*;
pub use constants::*;
pub use controller::*;
pub use countdown::*;
pub use cycle::*;
pub use dial::*;
pub use face::*;
pub use geometry::*;
pub use indicator::*;
pub use readout::*;
pub use ritual::*;
pub use state::*;
pub use subject::*;
pub use wedge::*;
