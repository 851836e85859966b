#![doc = "The `planhub` library crate."]
#![doc = ""]
#![doc = "Backend of a personal planner: calendar events, per-user tasks, and the"]
#![doc = "activity feed fed by task creation. This crate holds the domain models,"]
#![doc = "the service layer over Postgres, authentication middleware, routing"]
#![doc = "configuration, and error handling. The binary (`main.rs`) wires it all"]
#![doc = "into an HTTP server."]

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
