// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::ResultItem;

/// Consecutive rows under one category header.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultGroup<'a, P> {
    /// Category name, or `None` for uncategorised items.
    pub category: Option<&'a str>,
    /// Items in source order.
    pub items: Vec<&'a ResultItem<P>>,
}

/// Groups items by [`ResultItem::category`].
///
/// Groups appear in the order their first item appears; items keep their
/// relative order inside a group.
///
/// ```
/// use understory_typeahead::{ResultItem, ResultKind, group_by_category};
///
/// let items = [
///     ResultItem::plain("1", "rust", ResultKind::Recent).with_category("Recent"),
///     ResultItem::plain("2", "rustfmt", ResultKind::Trending).with_category("Trending"),
///     ResultItem::plain("3", "rustup", ResultKind::Recent).with_category("Recent"),
/// ];
/// let groups = group_by_category(&items);
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups[0].category, Some("Recent"));
/// assert_eq!(groups[0].items.len(), 2);
/// ```
pub fn group_by_category<P>(items: &[ResultItem<P>]) -> Vec<ResultGroup<'_, P>> {
    let mut index: HashMap<Option<&str>, usize> = HashMap::new();
    let mut groups: Vec<ResultGroup<'_, P>> = Vec::new();
    for item in items {
        let category = item.category.as_deref();
        let slot = *index.entry(category).or_insert_with(|| {
            groups.push(ResultGroup {
                category,
                items: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].items.push(item);
    }
    groups
}
