//! Rest classification

use crate::models::RestRule;

use super::chunks::Chunk;

/// Width the popcount is rendered at before its own bits are counted
pub const POPCOUNT_RENDER_WIDTH: usize = 7;

/// Decide whether `chunk` is silence under `rule`
pub fn is_rest(chunk: &Chunk, rule: RestRule) -> bool {
    match rule {
        RestRule::NestedPopcount => nested_popcount(chunk.popcount()) == 1,
        RestRule::OddParity => chunk.popcount() % 2 == 1,
        RestRule::Never => false,
    }
}

/// Set bits in the zero-padded binary rendering of `popcount`
///
/// Padding never truncates, so this is the popcount of the popcount.
fn nested_popcount(popcount: u32) -> u32 {
    format!("{:0width$b}", popcount, width = POPCOUNT_RENDER_WIDTH)
        .bytes()
        .filter(|&b| b == b'1')
        .count() as u32
}
