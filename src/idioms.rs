//! Catalog of traversal idioms.
//!
//! Every idiom walks a slice, applies a predicate and produces a
//! [`Selection`]. The container differs per idiom but the selected elements
//! do not: all idioms pick the same elements, and all but
//! [`Idiom::ReverseLoop`] keep input order.

use crate::data::Record;

/// One named strategy for traversing and filtering a slice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Idiom {
    /// `iter().filter().collect()`.
    Filter,
    /// Forward index loop appending matches.
    IndexedLoop,
    /// Index loop writing into a buffer sized to the whole input.
    PreallocatedLoop,
    /// Index loop from the last element down to the first.
    ReverseLoop,
    /// `for item in items` without an explicit index.
    IterLoop,
    /// `iter().map(pred).collect()`; tags elements instead of filtering.
    MapMask,
    /// `iter().for_each()` with a side-effecting push.
    ForEach,
}

impl Idiom {
    /// Catalog order; the harness and the report both follow it.
    pub const ALL: [Idiom; 7] = [
        Idiom::Filter,
        Idiom::IndexedLoop,
        Idiom::PreallocatedLoop,
        Idiom::ReverseLoop,
        Idiom::IterLoop,
        Idiom::MapMask,
        Idiom::ForEach,
    ];

    /// Human readable name used in progress output and tables.
    pub fn label(self) -> &'static str {
        match self {
            Idiom::Filter => "Filter",
            Idiom::IndexedLoop => "For Loop",
            Idiom::PreallocatedLoop => "For Loop Preallocated",
            Idiom::ReverseLoop => "Reverse For Loop",
            Idiom::IterLoop => "For Each Element Loop",
            Idiom::MapMask => "Map",
            Idiom::ForEach => "forEach",
        }
    }

    /// Stable machine-readable key.
    pub fn key(self) -> &'static str {
        match self {
            Idiom::Filter => "filter",
            Idiom::IndexedLoop => "indexed_loop",
            Idiom::PreallocatedLoop => "preallocated_loop",
            Idiom::ReverseLoop => "reverse_loop",
            Idiom::IterLoop => "iter_loop",
            Idiom::MapMask => "map_mask",
            Idiom::ForEach => "for_each",
        }
    }

    /// Runs this idiom over `items`.
    pub fn apply<'a, T, P>(self, items: &'a [T], pred: P) -> Selection<'a, T>
    where
        P: Fn(&T) -> bool,
    {
        match self {
            Idiom::Filter => Selection::Items(filter(items, pred)),
            Idiom::IndexedLoop => Selection::Items(indexed_loop(items, pred)),
            Idiom::PreallocatedLoop => Selection::Slots(preallocated_loop(items, pred)),
            Idiom::ReverseLoop => Selection::Items(reverse_loop(items, pred)),
            Idiom::IterLoop => Selection::Items(iter_loop(items, pred)),
            Idiom::MapMask => Selection::Mask(map_mask(items, pred)),
            Idiom::ForEach => Selection::Items(for_each(items, pred)),
        }
    }
}

/// Output of one idiom execution.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection<'a, T> {
    /// Matches collected in traversal order.
    Items(Vec<&'a T>),
    /// Buffer as long as the input; matches fill it from slot 0 and the
    /// remaining slots stay `None`.
    Slots(Vec<Option<&'a T>>),
    /// One flag per input element.
    Mask(Vec<bool>),
}

impl<'a, T> Selection<'a, T> {
    /// Selected elements in the order this idiom produced them.
    ///
    /// `input` must be the slice the selection was computed from; only the
    /// mask form needs it.
    pub fn selected(&self, input: &'a [T]) -> Vec<&'a T> {
        match self {
            Selection::Items(items) => items.clone(),
            Selection::Slots(slots) => slots.iter().flatten().copied().collect(),
            Selection::Mask(mask) => input
                .iter()
                .zip(mask)
                .filter_map(|(item, keep)| keep.then_some(item))
                .collect(),
        }
    }

    /// Number of entries in the output container, including empty slots.
    pub fn container_len(&self) -> usize {
        match self {
            Selection::Items(items) => items.len(),
            Selection::Slots(slots) => slots.len(),
            Selection::Mask(mask) => mask.len(),
        }
    }
}

/// Parity predicate for integer inputs.
pub fn is_even(value: &u32) -> bool {
    value % 2 == 0
}

/// Parity predicate for record inputs, applied to `age`.
pub fn age_is_even(record: &Record) -> bool {
    record.age % 2 == 0
}

fn filter<'a, T, P: Fn(&T) -> bool>(items: &'a [T], pred: P) -> Vec<&'a T> {
    items.iter().filter(|&item| pred(item)).collect()
}

#[allow(clippy::needless_range_loop)]
fn indexed_loop<'a, T, P: Fn(&T) -> bool>(items: &'a [T], pred: P) -> Vec<&'a T> {
    let mut res = Vec::new();
    for i in 0..items.len() {
        if pred(&items[i]) {
            res.push(&items[i]);
        }
    }
    res
}

#[allow(clippy::needless_range_loop)]
fn preallocated_loop<'a, T, P: Fn(&T) -> bool>(items: &'a [T], pred: P) -> Vec<Option<&'a T>> {
    let mut res = vec![None; items.len()];
    let mut index = 0;
    for i in 0..items.len() {
        if pred(&items[i]) {
            res[index] = Some(&items[i]);
            index += 1;
        }
    }
    // Left untrimmed: slots past `index` stay empty.
    res
}

fn reverse_loop<'a, T, P: Fn(&T) -> bool>(items: &'a [T], pred: P) -> Vec<&'a T> {
    let mut res = Vec::new();
    for i in (0..items.len()).rev() {
        if pred(&items[i]) {
            res.push(&items[i]);
        }
    }
    res
}

fn iter_loop<'a, T, P: Fn(&T) -> bool>(items: &'a [T], pred: P) -> Vec<&'a T> {
    let mut res = Vec::new();
    for item in items {
        if pred(item) {
            res.push(item);
        }
    }
    res
}

fn map_mask<T, P: Fn(&T) -> bool>(items: &[T], pred: P) -> Vec<bool> {
    items.iter().map(pred).collect()
}

fn for_each<'a, T, P: Fn(&T) -> bool>(items: &'a [T], pred: P) -> Vec<&'a T> {
    let mut res = Vec::new();
    items.iter().for_each(|item| {
        if pred(item) {
            res.push(item);
        }
    });
    res
}
