// rushmm: Rush Mod Manager for Haste: Broken Worlds
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> session::run_with_manager --> cmd::run_* handlers
//!   list, enable, disable, install
//! ```

pub mod disable;
pub mod enable;
pub mod install;
pub mod list;
pub mod session;

#[cfg(test)]
mod tests;
