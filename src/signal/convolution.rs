//! Direct-form linear convolution

/// Full linear convolution of `a` and `b`.
///
/// Output length is `a.len() + b.len() - 1`; an empty input gives an empty
/// output. Zero-valued samples of either input contribute nothing, so a
/// sparse series convolved with a wavelet stays exactly zero away from its
/// spikes.
pub fn convolve(a: &[f64], b: &[f64]) -> Vec<f64> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let len = a.len() + b.len() - 1;
    let mut out = vec![0.0; len];
    for (j, &bj) in b.iter().enumerate() {
        if bj == 0.0 {
            continue;
        }
        for (i, &ai) in a.iter().enumerate() {
            out[i + j] += ai * bj;
        }
    }
    out
}

/// Triangular smoothing kernel `[1, 2, .., w-1, w-2, .., 1] / w`.
///
/// Widths below 2 collapse to the two-point kernel `[0.5]`.
pub fn triangular_filter(width: usize) -> Vec<f64> {
    let width = width.max(2);
    let scale = 1.0 / width as f64;

    let rising = 1..width;
    let falling = (1..width - 1).rev();
    rising.chain(falling).map(|k| k as f64 * scale).collect()
}
