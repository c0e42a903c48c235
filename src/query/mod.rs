// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stratbook-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stratbook and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Read-only queries over the document.
//!
//! Queries provide the derived views (per-category lists, filtered lineups, bind lookup) that
//! the CLI renders.

pub mod binds;
pub mod maps;

pub use binds::{filter_binds, BindFilter};
pub use maps::{
    maps_in_category, overview, strategies_for_side, utilities_for, CategoryCount, Overview,
};
