//! Last-resort printable-content extraction from raw stream bytes.

/// Minimum length for a run to count as a fragment, matching the classic
/// `strings`-style threshold.
pub const MIN_RUN_LEN: usize = 4;

/// Return the maximal runs of printable ASCII bytes (`0x20..=0x7E`) of
/// length >= [`MIN_RUN_LEN`], in order of appearance. No qualifying run
/// yields an empty vector, which the pipeline treats as stage failure.
pub fn printable_runs(data: &[u8]) -> Vec<&[u8]> {
    let mut runs = Vec::new();
    let mut start = None;

    for (i, &b) in data.iter().enumerate() {
        if (0x20..=0x7e).contains(&b) {
            if start.is_none() {
                start = Some(i);
            }
        } else if let Some(s) = start.take() {
            if i - s >= MIN_RUN_LEN {
                runs.push(&data[s..i]);
            }
        }
    }
    if let Some(s) = start {
        if data.len() - s >= MIN_RUN_LEN {
            runs.push(&data[s..]);
        }
    }
    runs
}
