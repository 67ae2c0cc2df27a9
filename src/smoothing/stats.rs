//! Window aggregates: median for counts, mode for counts and labels

/// Median of the values, averaging the two middle values for even lengths
///
/// Returns None for an empty slice.
pub fn median(values: &[u8]) -> Option<f32> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_unstable();

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] as f32 + sorted[mid] as f32) / 2.0)
    } else {
        Some(sorted[mid] as f32)
    }
}

/// Most frequent value, iterating oldest to newest
///
/// Ties go to the value whose latest occurrence is most recent, so a
/// tied window follows the hand's current reading.
pub fn mode<T, I>(values: I) -> Option<T>
where
    T: PartialEq + Copy,
    I: IntoIterator<Item = T>,
{
    // (value, occurrences, position of latest occurrence)
    let mut tally: Vec<(T, usize, usize)> = Vec::new();

    for (position, value) in values.into_iter().enumerate() {
        match tally.iter_mut().find(|(v, _, _)| *v == value) {
            Some(entry) => {
                entry.1 += 1;
                entry.2 = position;
            }
            None => tally.push((value, 1, position)),
        }
    }

    tally
        .into_iter()
        .max_by_key(|&(_, count, last_seen)| (count, last_seen))
        .map(|(value, _, _)| value)
}
