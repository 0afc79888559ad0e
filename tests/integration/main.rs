//! Engine and view behavior over time, driven on a paused tokio clock.

mod engine_tests;
mod view_tests;
