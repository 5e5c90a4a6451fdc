//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::tuples::{TupleShape, TupleTable};

impl TupleTable {
    pub(crate) fn ensure_name(&self, shape: &TupleShape) -> &str {
        self.name_of(shape).unwrap_or_else(|| {
            panic!(
                "TupleTable: shape `{}` was never registered \
                 (pipeline must register every filtered tuple before building)",
                shape.to_type_ref()
            )
        })
    }
}
