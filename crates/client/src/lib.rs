//! Client side of the project board.
//!
//! Holds the local [`store::ProjectStore`], derives the four-column
//! [`board::Board`] from it, and runs drag-and-drop status moves through the
//! optimistic [`drag::DragController`]. Persistence goes through the
//! [`gateway::ProjectGateway`] seam; [`http::HttpGateway`] is the reqwest
//! implementation against the board API.

pub mod board;
pub mod drag;
pub mod error;
pub mod gateway;
pub mod http;
pub mod model;
pub mod notice;
pub mod session;
pub mod store;
