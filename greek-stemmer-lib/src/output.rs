// Output formatting for stem results.

use crate::types::StemResult;

/// `word<TAB>stem`, the default line format of the command-line tool.
pub fn to_tab_separated(result: &StemResult) -> String {
    format!("{}\t{}", result.word, result.stem)
}

/// One tab-separated line per result.
pub fn to_lines(results: &[StemResult]) -> String {
    results
        .iter()
        .map(to_tab_separated)
        .collect::<Vec<_>>()
        .join("\n")
}
