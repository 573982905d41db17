use alloc::vec::Vec;

/// Per-cell marker for drawing the source array.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellMark {
    #[default]
    Plain,
    /// Inside the pending query range.
    InQuery,
    /// The pending update target. Wins over `InQuery`.
    Update,
}

/// Marks `len` cells given the pending (signed, possibly invalid) query range and update index.
pub fn cell_marks(len: usize, query: (i64, i64), update_index: i64) -> Vec<CellMark> {
    let (start, end) = query;
    (0..len)
        .map(|i| {
            let i = i as i64;
            if i == update_index {
                CellMark::Update
            } else if start <= i && i <= end {
                CellMark::InQuery
            } else {
                CellMark::Plain
            }
        })
        .collect()
}
