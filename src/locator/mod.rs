// rushmm: Rush Mod Manager for Haste: Broken Worlds
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Game installation discovery.
//!
//! ```text
//! GameLocator::locate()
//!   FixedLocator   --haste-path / RUSHMM_HASTE_PATH
//!   SteamLocator   well-known Steam libraries
//!
//! Windows:  GetLogicalDrives() --> A..Z (ascending)
//!             <D>:\Program Files (x86)\Steam\steamapps\common\<game>
//!             <D>:\SteamLibrary\steamapps\common\<game>
//! Linux:    ~/.steam/steam, ~/.local/share/Steam, Flatpak Steam
//! macOS:    ~/Library/Application Support/Steam
//!
//! First existing directory wins, otherwise RushError::PathNotFound.
//! ```

use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::error::{RushError, RushResult};

/// Folder name of the game under `steamapps/common`.
pub const GAME_FOLDER: &str = "Haste Broken Worlds Demo";

/// Library-relative Steam roots tested on each Windows drive, in order.
#[cfg(windows)]
const DRIVE_LIBRARIES: &[&str] = &[r"Program Files (x86)\Steam", "SteamLibrary"];

/// Home-relative Steam roots on Linux, in order.
#[cfg(target_os = "linux")]
const HOME_LIBRARIES: &[&str] = &[
    ".steam/steam",
    ".local/share/Steam",
    ".var/app/com.valvesoftware.Steam/.local/share/Steam",
];

/// Home-relative Steam roots on macOS.
#[cfg(target_os = "macos")]
const HOME_LIBRARIES: &[&str] = &["Library/Application Support/Steam"];

/// Resolves the absolute path of the game installation.
pub trait GameLocator {
    /// Returns the game root directory.
    ///
    /// # Errors
    ///
    /// Returns [`RushError::PathNotFound`] if no installation exists.
    fn locate(&self) -> RushResult<PathBuf>;
}

/// Locator that always answers with a user-supplied directory.
#[derive(Debug, Clone)]
pub struct FixedLocator {
    path: PathBuf,
}

impl FixedLocator {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl GameLocator for FixedLocator {
    fn locate(&self) -> RushResult<PathBuf> {
        if self.path.is_dir() {
            debug!(path = %self.path.display(), "Using configured game path");
            std::path::absolute(&self.path).map_err(|_| RushError::PathNotFound)
        } else {
            debug!(path = %self.path.display(), "Configured game path is not a directory");
            Err(RushError::PathNotFound)
        }
    }
}

/// Locator searching the standard Steam library locations of the host.
#[derive(Debug, Clone, Default)]
pub struct SteamLocator {
    #[cfg_attr(windows, allow(dead_code))]
    home: Option<PathBuf>,
}

impl SteamLocator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `home` instead of the user's home directory for home-relative libraries.
    #[must_use]
    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        Self {
            home: Some(home.into()),
        }
    }

    /// Candidate game directories in search order.
    ///
    /// # Errors
    ///
    /// Returns an error if the available drives cannot be queried (Windows).
    pub fn candidates(&self) -> RushResult<Vec<PathBuf>> {
        #[cfg(windows)]
        {
            Ok(drive_candidates(&available_drives()?))
        }

        #[cfg(any(target_os = "linux", target_os = "macos"))]
        {
            let home = self.home.clone().or_else(dirs::home_dir);
            Ok(home.map(|h| home_candidates(&h)).unwrap_or_default())
        }

        #[cfg(not(any(windows, target_os = "linux", target_os = "macos")))]
        {
            Ok(Vec::new())
        }
    }
}

impl GameLocator for SteamLocator {
    fn locate(&self) -> RushResult<PathBuf> {
        let candidates = self.candidates()?;
        debug!(count = candidates.len(), "Searching Steam libraries for the game");
        first_existing_dir(&candidates).ok_or(RushError::PathNotFound)
    }
}

/// Returns the first candidate that is an existing directory.
pub fn first_existing_dir(candidates: &[PathBuf]) -> Option<PathBuf> {
    candidates
        .iter()
        .inspect(|c| trace!(candidate = %c.display(), "Checking"))
        .find(|c| c.is_dir())
        .inspect(|found| debug!(path = %found.display(), "Found game installation"))
        .cloned()
}

/// Converts a `GetLogicalDrives` bitmask into drive letters (bit 0 = `A`).
#[must_use]
pub fn bits_to_drives(mask: u32) -> Vec<char> {
    (b'A'..=b'Z')
        .enumerate()
        .filter(|(bit, _)| mask & (1 << bit) != 0)
        .map(|(_, letter)| char::from(letter))
        .collect()
}

/// Game candidates for each drive, drive-major, Steam install before `SteamLibrary`.
#[cfg(windows)]
fn drive_candidates(drives: &[char]) -> Vec<PathBuf> {
    drives
        .iter()
        .flat_map(|drive| {
            DRIVE_LIBRARIES.iter().map(move |library| {
                PathBuf::from(format!(r"{drive}:\"))
                    .join(library)
                    .join("steamapps")
                    .join("common")
                    .join(GAME_FOLDER)
            })
        })
        .collect()
}

#[cfg(any(target_os = "linux", target_os = "macos"))]
fn home_candidates(home: &Path) -> Vec<PathBuf> {
    HOME_LIBRARIES
        .iter()
        .map(|library| library_game_dir(&home.join(library)))
        .collect()
}

/// `<library>/steamapps/common/<game>`.
#[must_use]
pub fn library_game_dir(library: &Path) -> PathBuf {
    library.join("steamapps").join("common").join(GAME_FOLDER)
}

#[cfg(windows)]
fn available_drives() -> RushResult<Vec<char>> {
    use windows::Win32::Storage::FileSystem::GetLogicalDrives;

    // SAFETY: GetLogicalDrives takes no arguments and only returns a bitmask
    let mask = unsafe { GetLogicalDrives() };
    if mask == 0 {
        let err = std::io::Error::last_os_error();
        return Err(RushError::other(format!(
            "failed to enumerate drives: {err}"
        )));
    }
    Ok(bits_to_drives(mask))
}
