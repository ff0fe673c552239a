/// Above this many grapheme clusters (removed plus inserted) the differ
/// trusts the trimmed replacement without running Myers' algorithm on it.
pub const DEFAULT_GEOMETRY_CHECK_LIMIT: usize = 512;

pub const NO_BREAK_SPACE: u16 = 0x00A0;
pub const SPACE: u16 = 0x0020;
