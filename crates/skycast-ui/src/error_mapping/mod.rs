//! Maps UI service errors to skycast_core::AppError for consistent
//! user-facing messages.

mod weather;
