pub mod common_prefix_len;
pub mod common_suffix_len;
pub mod memoize;
pub mod myers_diff;
pub mod raw_operation;
pub mod string_builder;
