/// First difference of a column.
///
/// The output has the same length as `values`. Row 0 has no predecessor and
/// is `None`; every later row is `values[i] - values[i - 1]`, or `None` when
/// either side is NaN.
pub fn first_difference(values: &[f64]) -> Vec<Option<f64>> {
    let mut out = Vec::with_capacity(values.len());
    if values.is_empty() {
        return out;
    }

    out.push(None);
    out.extend(
        values
            .windows(2)
            .map(|w| Some(w[1] - w[0]).filter(|d| !d.is_nan())),
    );
    out
}
