// envprobe: API key environment diagnostics
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                                 check / options / files
//!                                      |
//!           +-----------+--------------+-----------+
//!           v           v              v           v
//!        dotenv       probe          smoke      config
//!      .env file   mask + report       |      TOML + env
//!                                      v
//!                              service::material
//!                                 API keys
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod dotenv;
pub mod error;
pub mod logging;
pub mod probe;
pub mod service;
pub mod smoke;
