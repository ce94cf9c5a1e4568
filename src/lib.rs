// rushmm: Rush Mod Manager for Haste: Broken Worlds
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
//!                |        list / enable / disable / install
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |         workspace         |
//!              |  ~/rushmm: config, mods,  |
//!              |        enabled.txt        |
//!              '--+-----------+--------+---'
//!                 |           |        |
//!                 v           v        v
//!             locator      config     mods ----> roster
//!          Steam / fixed   TOML+env   manager
//!                                       |
//!                                    archive
//!                                     (zip)
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging, utility   |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod locator;
pub mod logging;
pub mod mods;
pub mod roster;
pub mod utility;
pub mod workspace;
