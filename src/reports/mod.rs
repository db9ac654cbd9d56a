//! Reports built on top of the settlement engine

pub mod flow;

pub use flow::{FlowLink, FlowTarget, SpendingFlow};
