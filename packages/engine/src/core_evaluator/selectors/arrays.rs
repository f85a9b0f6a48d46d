//! Index and slice selection

use serde_json::Value;

use crate::ast::Slice;
use crate::normalized_paths::PathStep;

/// Resolve a possibly negative index against an array length
#[inline]
pub(crate) fn resolve_index(index: i64, len: usize) -> Option<usize> {
    let resolved = if index < 0 {
        i64::try_from(len).ok()?.checked_add(index)?
    } else {
        index
    };
    usize::try_from(resolved).ok().filter(|&i| i < len)
}

pub(super) fn visit_index<'a>(
    index: i64,
    node: &'a Value,
    emit: &mut dyn FnMut(PathStep<'a>, &'a Value),
) {
    let Some(items) = node.as_array() else {
        return;
    };
    if let Some(i) = resolve_index(index, items.len()) {
        emit(PathStep::Index(i), &items[i]);
    }
}

pub(super) fn visit_slice<'a>(
    slice: &Slice,
    node: &'a Value,
    emit: &mut dyn FnMut(PathStep<'a>, &'a Value),
) {
    let Some(items) = node.as_array() else {
        return;
    };
    for i in slice.indices(items.len()) {
        emit(PathStep::Index(i), &items[i]);
    }
}

/// Indexes selected by a slice, in selection order
#[derive(Debug, Clone)]
pub(crate) struct SliceIndices {
    current: i64,
    bound: i64,
    step: i64,
}

impl Iterator for SliceIndices {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let in_range = (self.step > 0 && self.current < self.bound)
            || (self.step < 0 && self.current > self.bound);
        if !in_range {
            return None;
        }
        let index = usize::try_from(self.current).ok()?;
        self.current = self.current.saturating_add(self.step);
        Some(index)
    }
}

impl Slice {
    /// Resolve bounds against an array of `len` elements
    ///
    /// Negative bounds count from the end and are clamped to `[0, len]`, or
    /// to `[-1, len - 1]` when stepping backwards. A zero step selects
    /// nothing.
    pub(crate) fn indices(&self, len: usize) -> SliceIndices {
        let len = i64::try_from(len).unwrap_or(i64::MAX);
        let step = self.step.unwrap_or(1);
        let normalize = |bound: i64| if bound >= 0 { bound } else { len + bound };

        let (current, bound) = match step {
            0 => (0, 0),
            s if s > 0 => (
                self.start.map_or(0, |start| normalize(start).clamp(0, len)),
                self.end.map_or(len, |end| normalize(end).clamp(0, len)),
            ),
            _ => (
                self.start
                    .map_or(len - 1, |start| normalize(start).clamp(-1, len - 1)),
                self.end.map_or(-1, |end| normalize(end).clamp(-1, len - 1)),
            ),
        };

        SliceIndices {
            current,
            bound,
            step,
        }
    }
}
