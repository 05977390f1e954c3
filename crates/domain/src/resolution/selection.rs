//! Bucket selection for modifier sources.

use crate::entities::{Improvement, ImprovementKind, ModifierSource};

/// Pick the improvement bucket that applies to a source.
///
/// Choice-kind sources with a selected option that names an existing bucket
/// use that bucket; everything else falls back to the default bucket. Absent
/// or sparse data degrades to "no improvements from this source" - this never
/// fails.
pub fn resolve_bucket(source: &ModifierSource) -> &[Improvement] {
    let Some(spec) = source.improvements.as_ref() else {
        return &[];
    };

    if spec.kind == ImprovementKind::Choice {
        if let Some(option) = source.selected_option.as_deref() {
            if let Some(bucket) = spec.bucket(option) {
                return bucket;
            }
        }
    }

    spec.default_bucket()
}
