//! Cab fare estimator.
//!
//! Answers: "What is the shortest way across town from here to there,
//! how long will it take, and what will it cost?"

pub mod domain;
pub mod fare;
pub mod network;
pub mod planner;
pub mod report;
