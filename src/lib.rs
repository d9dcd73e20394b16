//! Shortener - a tiny in-memory URL shortener
//!
//! `POST /` with a `text/plain` URL body returns `<prefix>/<alias>`;
//! `GET /{alias}` answers with a 307 redirect to the stored URL.
//!
//! # Architecture
//! - `storage`: the bidirectional alias <-> URL index
//! - `services`: alias generation and the shorten/resolve logic
//! - `api`: HTTP handlers, routes and middleware
//! - `config`: layered static configuration and CLI flags
//! - `runtime`: server lifecycle
//! - `system`: logging setup

pub mod api;
pub mod config;
pub mod errors;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod system;
pub mod utils;
