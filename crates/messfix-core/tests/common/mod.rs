use messfix_core::Reconciler;

/// Build one day's raw snapshot from string literals
#[allow(dead_code)]
pub fn day(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|r| r.to_string()).collect()
}

/// Create a reconciler that has already absorbed the given days
///
/// Panics if any of the setup days is rejected.
#[allow(dead_code)]
pub fn reconciler_after(days: &[&[&str]]) -> Reconciler {
    let reconciler = Reconciler::new();
    for &raw in days {
        reconciler.apply_snapshot(raw).unwrap();
    }
    reconciler
}

/// Split a serialized hierarchy back into its entries
#[allow(dead_code)]
pub fn entries(serialized: &str) -> Vec<String> {
    let inner = serialized
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap();
    if inner.is_empty() {
        return Vec::new();
    }
    inner.split(',').map(str::to_string).collect()
}
