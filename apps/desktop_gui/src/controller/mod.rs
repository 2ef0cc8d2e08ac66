//! Controller layer: UI events, routing, and command orchestration.

pub mod events;
pub mod orchestration;
pub mod routes;
