// file: src/summarizer/selector.rs
// description: top-k sentence selection restored to document order
// reference: stable ranking with lower index winning ties

use std::cmp::Ordering;

/// Indices of the `k` highest scores in ascending index order. Ties go to the
/// earlier sentence; NaN ranks below every number.
pub fn select_top(scores: &[f64], k: usize) -> Vec<usize> {
    if k == 0 {
        return Vec::new();
    }

    let mut ranked: Vec<usize> = (0..scores.len()).collect();
    ranked.sort_by(|&a, &b| compare_desc(scores[a], scores[b]).then(a.cmp(&b)));
    ranked.truncate(k);
    ranked.sort_unstable();
    ranked
}

pub fn join_selected<S: AsRef<str>>(sentences: &[S], selected: &[usize]) -> String {
    selected
        .iter()
        .map(|&i| sentences[i].as_ref())
        .collect::<Vec<_>>()
        .join(" ")
}

fn compare_desc(a: f64, b: f64) -> Ordering {
    let key = |x: f64| if x.is_nan() { f64::NEG_INFINITY } else { x };
    key(b).total_cmp(&key(a))
}
