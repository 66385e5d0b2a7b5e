use crate::Extent;

use core::cmp::Ordering;

/// Decides which of two boxes is placed first.
///
/// `Ordering::Less` means that `a` is placed before `b`.
pub type BoxSizeHeuristicFn = dyn Fn(&Extent, &Extent) -> Ordering;

/// Larger volume first. Boxes with the same volume are ordered by their longest side, longest
/// first.
///
/// Boxes that compare equal keep the order that they were declared in, as long as the caller sorts
/// with a stable sort.
pub fn larger_box_first(a: &Extent, b: &Extent) -> Ordering {
    b.volume()
        .total_cmp(&a.volume())
        .then_with(|| b.largest_side().total_cmp(&a.largest_side()))
}
