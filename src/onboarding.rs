// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stratbook-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stratbook and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! "Has the first-run message been shown" flag.

use crate::store::{KeyValueStore, StorageError};

pub const ONBOARDING_KEY: &str = "cs2-strategy-app-onboarding-shown";

pub fn is_shown<S: KeyValueStore + ?Sized>(storage: &S) -> Result<bool, StorageError> {
    Ok(storage.get(ONBOARDING_KEY)?.as_deref() == Some("true"))
}

pub fn mark_shown<S: KeyValueStore + ?Sized>(storage: &mut S) -> Result<(), StorageError> {
    storage.set(ONBOARDING_KEY, "true")
}
