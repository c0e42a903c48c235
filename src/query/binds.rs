// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stratbook-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stratbook and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{Bind, BindCategory};

/// Category plus free-text search; both optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindFilter {
    pub category: Option<BindCategory>,
    pub search: Option<String>,
}

impl BindFilter {
    fn matches(&self, bind: &Bind, needle: Option<&str>) -> bool {
        if self.category.is_some_and(|c| c != bind.category()) {
            return false;
        }
        let Some(needle) = needle else {
            return true;
        };
        bind.key().to_lowercase().contains(needle)
            || bind.description().to_lowercase().contains(needle)
    }
}

/// Binds matching `filter`: the search is a case-insensitive substring match on key or
/// description.
pub fn filter_binds<'a>(binds: &'a [Bind], filter: &BindFilter) -> Vec<&'a Bind> {
    let needle = filter
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);
    binds
        .iter()
        .filter(|bind| filter.matches(bind, needle.as_deref()))
        .collect()
}
