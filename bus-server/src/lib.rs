//! Bus route planner server.
//!
//! A web application that answers: "Which buses get me from this stop to
//! that one, with at most two changes, in the least time?"

pub mod catalog;
pub mod config;
pub mod domain;
pub mod logging;
pub mod persist;
pub mod planner;
pub mod web;
