//! Application layer containing the purchase orchestration logic.
//!
//! This module defines the `TicketService`, the single public entry point for
//! buying tickets. It sequences validation, pricing and the collaborator
//! calls, and owns no per-purchase state.

pub mod service;
