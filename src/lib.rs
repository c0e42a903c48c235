// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stratbook-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stratbook and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Stratbook: a local strategy notebook for CS2 maps, utility lineups and binds.
//!
//! The whole notebook is one JSON document in a key-value store. [`store::DocumentStore`] loads
//! it (seeding or migrating as needed) and applies every edit as a full rewrite.

pub mod auth;
pub mod clock;
pub mod config;
pub mod model;
pub mod onboarding;
pub mod ops;
pub mod query;
pub mod store;
