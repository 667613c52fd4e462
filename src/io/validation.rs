//! Reference counts for validating enumeration results
//!
//! Figures follow the established counting sequences for free, one-sided,
//! and fixed polyominoes. The tables are a front-end correctness check and
//! are never consulted by the engine.

use crate::algorithm::symmetry::SymmetryMode;

/// Free polyomino counts for sizes 1 through 28
const FREE_COUNTS: [u64; 28] = [
    1,
    1,
    2,
    5,
    12,
    35,
    108,
    369,
    1_285,
    4_655,
    17_414,
    63_600,
    235_276,
    878_570,
    3_287_604,
    12_408_500,
    47_160_284,
    179_862_604,
    688_626_106,
    2_646_244_748,
    10_185_113_832,
    39_253_596_008,
    151_681_137_845,
    586_318_555_560,
    2_271_460_081_634,
    8_818_899_287_013,
    34_292_650_679_456,
    133_943_708_915_991,
];

/// One-sided polyomino counts for sizes 1 through 18
const ONE_SIDED_COUNTS: [u64; 18] = [
    1,
    1,
    2,
    7,
    18,
    60,
    196,
    704,
    2_500,
    9_189,
    33_896,
    126_759,
    476_270,
    1_802_312,
    6_849_777,
    26_152_418,
    100_203_194,
    385_221_143,
];

/// Fixed polyomino counts for sizes 1 through 18
const FIXED_COUNTS: [u64; 18] = [
    1,
    2,
    6,
    19,
    63,
    216,
    760,
    2_725,
    9_910,
    36_446,
    135_268,
    505_861,
    1_903_890,
    7_204_874,
    27_394_666,
    104_592_937,
    400_795_844,
    1_540_820_542,
];

/// Known shape count for a size and mode, when the tables carry one
pub fn known_count(size: usize, mode: SymmetryMode) -> Option<u64> {
    let table: &[u64] = match mode {
        SymmetryMode::Free => &FREE_COUNTS,
        SymmetryMode::OneSided => &ONE_SIDED_COUNTS,
        SymmetryMode::Fixed => &FIXED_COUNTS,
    };
    size.checked_sub(1)
        .and_then(|index| table.get(index))
        .copied()
}
