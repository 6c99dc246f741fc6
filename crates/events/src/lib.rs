//! `fridgekeeper-events` — the event vocabulary shared by domain aggregates.

pub mod event;

pub use event::Event;
