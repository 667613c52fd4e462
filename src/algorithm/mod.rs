/// Size-by-size growth engine and generation sets
pub mod growth;
/// Bit-grid occupancy masks for frontier computation
pub mod occupancy;
/// Symmetry modes and canonical-form selection
pub mod symmetry;
