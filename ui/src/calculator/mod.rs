//! Party calculator: guest-based recommendation, product picker and the
//! WhatsApp order hand-off. State rules live in `core::selection`; this
//! module only adapts them to form inputs.

pub mod input;
pub mod view;

pub use view::PartyCalculator;
