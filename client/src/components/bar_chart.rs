//! Grouped SVG bar chart.
//!
//! Each point is a date label with one value per series; geometry comes from
//! `util::chart` so scaling is shared and tested.

use leptos::prelude::*;

use crate::util::chart::{group_center, layout};
use crate::util::format::short_date;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 200.0;
const LABEL_BAND: f64 = 24.0;

/// One x-axis point: date plus one value per series.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartPoint {
    pub date: String,
    pub values: Vec<f64>,
}

#[component]
pub fn BarChart(
    title: &'static str,
    /// Series names in value order, used for the legend and CSS modifiers.
    series: &'static [&'static str],
    #[prop(into)] points: Signal<Vec<ChartPoint>>,
) -> impl IntoView {
    let view_box = format!("0 0 {WIDTH} {}", HEIGHT + LABEL_BAND);

    view! {
        <section class="chart">
            <header class="chart__header">
                <h3>{title}</h3>
                <ul class="chart__legend">
                    {series
                        .iter()
                        .enumerate()
                        .map(|(i, name)| {
                            view! { <li class=format!("chart__key chart__key--{i}")>{*name}</li> }
                        })
                        .collect_view()}
                </ul>
            </header>
            {move || {
                let points = points.get();
                if points.is_empty() {
                    return view! { <p class="chart__empty">"No data for this period"</p> }.into_any();
                }
                let groups: Vec<Vec<f64>> = points.iter().map(|p| p.values.clone()).collect();
                let bars = layout(&groups, WIDTH, HEIGHT);
                let count = points.len();
                let labels = points
                    .iter()
                    .enumerate()
                    .map(|(i, p)| {
                        view! {
                            <text
                                class="chart__label"
                                x=group_center(i, count, WIDTH)
                                y=HEIGHT + LABEL_BAND - 6.0
                                text-anchor="middle"
                            >
                                {short_date(&p.date)}
                            </text>
                        }
                    })
                    .collect_view();
                let rects = bars
                    .into_iter()
                    .zip(points)
                    .flat_map(|(group, point)| {
                        let date = point.date;
                        group
                            .into_iter()
                            .zip(point.values)
                            .enumerate()
                            .map(move |(s, (bar, value))| {
                                let name = series.get(s).copied().unwrap_or("");
                                view! {
                                    <rect
                                        class=format!("chart__bar chart__bar--{s}")
                                        x=bar.x
                                        y=bar.y
                                        width=bar.width
                                        height=bar.height
                                    >
                                        <title>{format!("{date} {name}: {value:.2}")}</title>
                                    </rect>
                                }
                            })
                            .collect::<Vec<_>>()
                    })
                    .collect_view();
                view! {
                    <svg class="chart__plot" viewBox=view_box.clone() preserveAspectRatio="none">
                        <line class="chart__axis" x1="0" y1=HEIGHT x2=WIDTH y2=HEIGHT></line>
                        {rects}
                        {labels}
                    </svg>
                }
                    .into_any()
            }}
        </section>
    }
}
