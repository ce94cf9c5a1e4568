// rushmm: Rush Mod Manager for Haste: Broken Worlds
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Utility modules.
//!
//! ```text
//! fs
//!   read(), write(), remove_file()           typed FsError
//!   ignore_missing()                         soft-fail on Missing
//!   write_atomic()                           tempfile + persist
//! ```

pub mod fs;
