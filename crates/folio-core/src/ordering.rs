//! Gallery ordering: featured projects first, then by name.

use std::cmp::Ordering;

use crate::project::ProjectRecord;

/// Featured records sort ahead of non-featured ones; within the same group,
/// names compare by letter first and by case only to break ties, lowercase
/// ahead of uppercase.
#[must_use]
pub fn gallery_order(a: &ProjectRecord, b: &ProjectRecord) -> Ordering {
    b.featured
        .cmp(&a.featured)
        .then_with(|| name_order(&a.name, &b.name))
}

fn name_order(a: &str, b: &str) -> Ordering {
    let folded = |s: &str| s.chars().flat_map(char::to_lowercase).collect::<Vec<_>>();
    folded(a).cmp(&folded(b)).then_with(|| b.cmp(a))
}

/// Sort records into gallery order. Stable, so equal keys keep their
/// relative order and sorting a sorted slice is a no-op.
pub fn sort_gallery(records: &mut [ProjectRecord]) {
    records.sort_by(gallery_order);
}
