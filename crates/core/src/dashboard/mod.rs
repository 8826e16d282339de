//! Per-platform dashboard views.
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +---------------------+
//! |   Host app / UI  | --> | DashboardController |  (state machine, one per platform)
//! +------------------+     +---------------------+
//!                               |       |      |
//!              rating data      |       |      |  bookmark set
//!        (cache -> adapter) <---+       |      +---> (store, always fresh)
//!                                       v
//!                               +--------------+
//!                               | PlatformView |  (cards, chart, links)
//!                               +--------------+
//! ```
//!
//! One controller type serves all platforms: it is parameterized by a
//! [`RatingProvider`](kodekaro_platform_data::RatingProvider) and picks the
//! matching strategy from the provider's platform. The state machine is
//! `Idle -> Loading -> Ready | Error`; an `Error` after a transient failure
//! keeps the last good view so the screen never goes blank over a hiccup.

mod controller;
mod model;

pub use controller::DashboardController;
pub use model::{ChartPoint, ContestCard, PlatformView, ViewState};
