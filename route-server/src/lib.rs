//! Cheapest-route planner server.
//!
//! A web application that answers: "given these priced connections, what
//! is the cheapest way from here to there?"

pub mod config;
pub mod connections;
pub mod domain;
pub mod graph;
pub mod planner;
pub mod web;
