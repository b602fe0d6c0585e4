//! Sorter Module
//!
//! Stateless sorting routines producing freshly ordered copies of a product
//! collection. None of them mutate their input.
//!
//! Only the merge sort guarantees stability; the quicksort and bubble sort
//! make no promise about the relative order of equal keys.

use std::fmt;

use chrono::NaiveDate;

use crate::inventory::Product;

// == Sort Key ==
/// The orderings exposed over the product collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Quicksort on expiry date
    Expiry,
    /// Merge sort on urgency level
    Priority,
    /// Bubble sort on quantity
    Quantity,
}

impl SortKey {
    /// Parses a key case-insensitively, accepting `urgency` for `priority`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "expiry" => Some(SortKey::Expiry),
            "priority" | "urgency" => Some(SortKey::Priority),
            "quantity" => Some(SortKey::Quantity),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Expiry => "expiry",
            SortKey::Priority => "priority",
            SortKey::Quantity => "quantity",
        }
    }

    pub fn algorithm(self) -> &'static str {
        match self {
            SortKey::Expiry => "Quick Sort",
            SortKey::Priority => "Merge Sort",
            SortKey::Quantity => "Bubble Sort",
        }
    }

    pub fn complexity(self) -> &'static str {
        match self {
            SortKey::Expiry => "O(n log n) average, O(n²) worst case",
            SortKey::Priority => "O(n log n) guaranteed",
            SortKey::Quantity => "O(n²) worst case, O(n) when already sorted",
        }
    }

    // == Apply ==
    /// Runs the algorithm bound to this key. `today` feeds the urgency
    /// derivation used by the priority ordering.
    pub fn apply(self, products: &[Product], today: NaiveDate) -> Vec<Product> {
        match self {
            SortKey::Expiry => quick_sort_by_expiry(products),
            SortKey::Priority => merge_sort_by_urgency(products, today),
            SortKey::Quantity => bubble_sort_by_quantity(products),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// == Quick Sort ==
/// Sorts by expiry date using quicksort with the last element as pivot.
///
/// Already-sorted input hits the quadratic worst case.
pub fn quick_sort_by_expiry(products: &[Product]) -> Vec<Product> {
    let mut sorted = products.to_vec();
    quick_sort(&mut sorted);
    sorted
}

/// Recurses into the smaller partition and loops on the larger one, so the
/// stack depth stays logarithmic even when every partition is lopsided.
fn quick_sort(mut items: &mut [Product]) {
    while items.len() > 1 {
        let pivot_index = partition(items);
        let (left, right) = std::mem::take(&mut items).split_at_mut(pivot_index);
        let right = &mut right[1..];
        if left.len() < right.len() {
            quick_sort(left);
            items = right;
        } else {
            quick_sort(right);
            items = left;
        }
    }
}

/// Lomuto partition: everything `<=` the pivot moves left of it.
/// Returns the pivot's final index.
fn partition(items: &mut [Product]) -> usize {
    let high = items.len() - 1;
    let pivot = items[high].expiry_date;
    let mut store = 0;

    for j in 0..high {
        if items[j].expiry_date <= pivot {
            items.swap(store, j);
            store += 1;
        }
    }

    items.swap(store, high);
    store
}

// == Merge Sort ==
/// Sorts by urgency level (as of `today`) using a stable top-down merge sort.
pub fn merge_sort_by_urgency(products: &[Product], today: NaiveDate) -> Vec<Product> {
    let mut sorted = products.to_vec();
    merge_sort(&mut sorted, &|p: &Product| p.urgency_on(today));
    sorted
}

fn merge_sort<K, F>(items: &mut [Product], key: &F)
where
    K: Ord,
    F: Fn(&Product) -> K,
{
    if items.len() <= 1 {
        return;
    }
    let mid = items.len() / 2;
    merge_sort(&mut items[..mid], key);
    merge_sort(&mut items[mid..], key);
    merge(items, mid, key);
}

fn merge<K, F>(items: &mut [Product], mid: usize, key: &F)
where
    K: Ord,
    F: Fn(&Product) -> K,
{
    let left = items[..mid].to_vec();
    let right = items[mid..].to_vec();
    let (mut i, mut j, mut k) = (0, 0, 0);

    while i < left.len() && j < right.len() {
        // `<=` keeps the left element first on ties.
        if key(&left[i]) <= key(&right[j]) {
            items[k] = left[i].clone();
            i += 1;
        } else {
            items[k] = right[j].clone();
            j += 1;
        }
        k += 1;
    }

    for product in left[i..].iter().chain(right[j..].iter()) {
        items[k] = product.clone();
        k += 1;
    }
}

// == Bubble Sort ==
/// Sorts by quantity using bubble sort, stopping after the first pass that
/// performs no swap.
pub fn bubble_sort_by_quantity(products: &[Product]) -> Vec<Product> {
    let mut sorted = products.to_vec();
    let n = sorted.len();

    for pass in 0..n.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..n - pass - 1 {
            if sorted[j].quantity > sorted[j + 1].quantity {
                sorted.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }

    sorted
}
