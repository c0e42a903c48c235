// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stratbook-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stratbook and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Local admin gate for editing.
//!
//! Credentials are plain JSON in the same key-value storage as the document and are compared in
//! plaintext. This is an editing toggle for a single device, not an access-control boundary.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::store::{KeyValueStore, StorageError};

pub const CREDENTIALS_KEY: &str = "cs2-admin-credentials";
pub const LOGGED_IN_KEY: &str = "cs2-admin-logged-in";

const LOGGED_IN_VALUE: &str = "true";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            username: "admin".to_owned(),
            password: "admin123".to_owned(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("not logged in as admin")]
    NotAuthenticated,
    #[error("current password is incorrect")]
    CurrentPasswordMismatch,
    #[error("new password and confirmation do not match")]
    ConfirmationMismatch,
    #[error("new password must differ from the current one")]
    PasswordUnchanged,
    #[error("failed to encode credentials: {0}")]
    Encode(#[source] serde_json::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminAuth {
    credentials: Credentials,
    logged_in: bool,
}

impl AdminAuth {
    /// Reads the stored credentials and login flag, writing the default credentials when none
    /// are stored or the stored value is unreadable.
    pub fn load<S: KeyValueStore + ?Sized>(storage: &mut S) -> Result<Self, AuthError> {
        let stored = storage
            .get(CREDENTIALS_KEY)?
            .map(|raw| serde_json::from_str::<Credentials>(&raw));

        let credentials = match stored {
            Some(Ok(credentials)) => credentials,
            Some(Err(err)) => {
                warn!(error = %err, "stored admin credentials are unreadable, resetting to defaults");
                let credentials = Credentials::default();
                write_credentials(storage, &credentials)?;
                credentials
            }
            None => {
                let credentials = Credentials::default();
                write_credentials(storage, &credentials)?;
                credentials
            }
        };

        let logged_in = storage.get(LOGGED_IN_KEY)?.as_deref() == Some(LOGGED_IN_VALUE);
        Ok(Self {
            credentials,
            logged_in,
        })
    }

    pub fn is_authenticated(&self) -> bool {
        self.logged_in
    }

    pub fn username(&self) -> &str {
        &self.credentials.username
    }

    /// Returns whether the credentials matched; a mismatch leaves the login state unchanged.
    pub fn login<S: KeyValueStore + ?Sized>(
        &mut self,
        storage: &mut S,
        username: &str,
        password: &str,
    ) -> Result<bool, AuthError> {
        if username != self.credentials.username || password != self.credentials.password {
            return Ok(false);
        }
        storage.set(LOGGED_IN_KEY, LOGGED_IN_VALUE)?;
        self.logged_in = true;
        info!(username, "admin logged in");
        Ok(true)
    }

    pub fn logout<S: KeyValueStore + ?Sized>(&mut self, storage: &mut S) -> Result<(), AuthError> {
        storage.remove(LOGGED_IN_KEY)?;
        self.logged_in = false;
        Ok(())
    }

    pub fn require_admin(&self) -> Result<(), AuthError> {
        if self.logged_in {
            Ok(())
        } else {
            Err(AuthError::NotAuthenticated)
        }
    }

    /// Replaces the password after checking the current one and the confirmation.
    pub fn change_password<S: KeyValueStore + ?Sized>(
        &mut self,
        storage: &mut S,
        current: &str,
        new: &str,
        confirm: &str,
    ) -> Result<(), AuthError> {
        self.require_admin()?;
        if current != self.credentials.password {
            return Err(AuthError::CurrentPasswordMismatch);
        }
        if new != confirm {
            return Err(AuthError::ConfirmationMismatch);
        }
        if new == current {
            return Err(AuthError::PasswordUnchanged);
        }

        let updated = Credentials {
            username: self.credentials.username.clone(),
            password: new.to_owned(),
        };
        write_credentials(storage, &updated)?;
        self.credentials = updated;
        info!(username = %self.credentials.username, "admin password changed");
        Ok(())
    }
}

fn write_credentials<S: KeyValueStore + ?Sized>(
    storage: &mut S,
    credentials: &Credentials,
) -> Result<(), AuthError> {
    let raw = serde_json::to_string(credentials).map_err(AuthError::Encode)?;
    storage.set(CREDENTIALS_KEY, &raw)?;
    Ok(())
}
