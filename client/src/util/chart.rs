//! Bar-chart geometry for the dashboard and financial SVG charts.
//!
//! Charts plot one group per date with one bar per series. All series share
//! a single vertical scale so revenue and commission bars stay comparable.

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;

/// Drawable rectangle in SVG user units, origin top-left.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Fraction of each group slot left empty between groups.
const GROUP_GAP: f64 = 0.2;

/// Lay out `groups[i][s]` (value of series `s` on point `i`) in a
/// `width` x `height` plot. Non-finite and negative values draw as empty.
#[allow(clippy::cast_precision_loss)]
pub fn layout(groups: &[Vec<f64>], width: f64, height: f64) -> Vec<Vec<Bar>> {
    if groups.is_empty() || width <= 0.0 || height <= 0.0 {
        return Vec::new();
    }
    let max = groups
        .iter()
        .flatten()
        .copied()
        .map(clamp_value)
        .fold(0.0_f64, f64::max);

    let slot = width / groups.len() as f64;
    let inner = slot * (1.0 - GROUP_GAP);

    groups
        .iter()
        .enumerate()
        .map(|(i, series)| {
            if series.is_empty() {
                return Vec::new();
            }
            let bar_width = inner / series.len() as f64;
            let left = slot * i as f64 + (slot - inner) / 2.0;
            series
                .iter()
                .enumerate()
                .map(|(s, value)| {
                    let h = if max > 0.0 { clamp_value(*value) / max * height } else { 0.0 };
                    Bar { x: left + bar_width * s as f64, y: height - h, width: bar_width, height: h }
                })
                .collect()
        })
        .collect()
}

fn clamp_value(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 { value } else { 0.0 }
}

/// Horizontal centre of group `index` for axis labels.
#[allow(clippy::cast_precision_loss)]
pub fn group_center(index: usize, groups: usize, width: f64) -> f64 {
    if groups == 0 {
        return 0.0;
    }
    let slot = width / groups as f64;
    slot * index as f64 + slot / 2.0
}

/// Share of `part` in `total` as a percentage for distribution bars.
#[allow(clippy::cast_precision_loss)]
pub fn share(part: u64, total: u64) -> f64 {
    if total == 0 { 0.0 } else { part as f64 / total as f64 * 100.0 }
}
