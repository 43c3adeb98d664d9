//! Inline SVG charts for the analytics view. Geometry is computed by the
//! pure helpers below; the components only map report rows onto it.

use yew::prelude::*;

pub const PALETTE: [&str; 5] = ["#6366f1", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6"];

const PAD: f64 = 30.0;

/// Upper bound of the value axis; never zero so ratios stay finite.
pub fn max_value(values: &[f64]) -> f64 {
    values.iter().cloned().fold(0.0, f64::max).max(1.0)
}

pub fn point_x(index: usize, count: usize, width: f64) -> f64 {
    let plot = width - 2.0 * PAD;
    if count <= 1 {
        return PAD + plot / 2.0;
    }
    PAD + plot * (index as f64) / ((count - 1) as f64)
}

pub fn point_y(value: f64, max: f64, height: f64) -> f64 {
    let plot = height - 2.0 * PAD;
    PAD + plot * (1.0 - value / max)
}

/// `points` attribute for an SVG polyline spanning the plot box.
pub fn polyline_points(values: &[f64], width: f64, height: f64) -> String {
    let max = max_value(values);
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            format!(
                "{:.1},{:.1}",
                point_x(i, values.len(), width),
                point_y(*v, max, height)
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub const DONUT_RADIUS: f64 = 50.0;

/// Splits the ring circumference proportionally: one `(length, offset)`
/// dash pair per value. Empty when the values sum to nothing.
pub fn donut_segments(values: &[f64]) -> Vec<(f64, f64)> {
    let total: f64 = values.iter().sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let circumference = 2.0 * std::f64::consts::PI * DONUT_RADIUS;
    let mut offset = 0.0;
    values
        .iter()
        .map(|v| {
            let length = circumference * v / total;
            let segment = (length, offset);
            offset += length;
            segment
        })
        .collect()
}

pub fn bar_height(value: f64, max: f64, plot_height: f64) -> f64 {
    (value / max * plot_height).max(0.0)
}

#[derive(Properties, PartialEq)]
pub struct LineChartProps {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

#[function_component(LineChart)]
pub fn line_chart(props: &LineChartProps) -> Html {
    let width = 600.0;
    let height = 260.0;
    let count = props.values.len();

    if count == 0 {
        return html! { <p class="chart-empty">{"No data for the current filters."}</p> };
    }

    let max = max_value(&props.values);
    let label_step = count.div_ceil(6).max(1);

    html! {
        <svg viewBox={format!("0 0 {width} {height}")} class="chart">
            <line
                x1={PAD.to_string()} y1={(height - PAD).to_string()}
                x2={(width - PAD).to_string()} y2={(height - PAD).to_string()}
                stroke="#e2e8f0"
            />
            <polyline
                points={polyline_points(&props.values, width, height)}
                fill="none"
                stroke={PALETTE[0]}
                stroke-width="2"
            />
            {
                props.values.iter().enumerate().map(|(i, v)| {
                    html! {
                        <circle
                            key={i}
                            cx={format!("{:.1}", point_x(i, count, width))}
                            cy={format!("{:.1}", point_y(*v, max, height))}
                            r="3"
                            fill={PALETTE[0]}
                        >
                            <title>{ format!("{}: {v:.2}", props.labels.get(i).map(String::as_str).unwrap_or("")) }</title>
                        </circle>
                    }
                }).collect::<Html>()
            }
            {
                props.labels.iter().enumerate().step_by(label_step).map(|(i, label)| {
                    html! {
                        <text
                            key={i}
                            x={format!("{:.1}", point_x(i, count, width))}
                            y={(height - 8.0).to_string()}
                            text-anchor="middle"
                            font-size="10"
                            fill="#64748b"
                        >
                            { label }
                        </text>
                    }
                }).collect::<Html>()
            }
        </svg>
    }
}

#[derive(Properties, PartialEq)]
pub struct DonutChartProps {
    /// (label, value) pairs, already sliced to the wanted top-N.
    pub slices: Vec<(String, f64)>,
}

#[function_component(DonutChart)]
pub fn donut_chart(props: &DonutChartProps) -> Html {
    let values: Vec<f64> = props.slices.iter().map(|(_, v)| *v).collect();
    let segments = donut_segments(&values);

    if segments.is_empty() {
        return html! { <p class="chart-empty">{"No data for the current filters."}</p> };
    }

    html! {
        <div class="donut-chart">
            <svg viewBox="0 0 120 120" class="chart">
                {
                    segments.iter().enumerate().map(|(i, (length, offset))| {
                        html! {
                            <circle
                                key={i}
                                cx="60" cy="60" r={DONUT_RADIUS.to_string()}
                                fill="none"
                                stroke={PALETTE[i % PALETTE.len()]}
                                stroke-width="14"
                                stroke-dasharray={format!("{length:.2} 314.16")}
                                stroke-dashoffset={format!("-{offset:.2}")}
                                transform="rotate(-90 60 60)"
                            />
                        }
                    }).collect::<Html>()
                }
            </svg>
            <div class="chart-legend">
                {
                    props.slices.iter().enumerate().map(|(i, (label, value))| {
                        html! {
                            <div key={i} class="legend-row">
                                <span
                                    class="legend-dot"
                                    style={format!("background: {}", PALETTE[i % PALETTE.len()])}
                                />
                                <span class="legend-label">{ label }</span>
                                <span class="legend-value">{ format!("{value:.0}") }</span>
                            </div>
                        }
                    }).collect::<Html>()
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct GroupedBarChartProps {
    pub groups: Vec<String>,
    pub primary: (String, Vec<f64>),
    pub secondary: (String, Vec<f64>),
}

#[function_component(GroupedBarChart)]
pub fn grouped_bar_chart(props: &GroupedBarChartProps) -> Html {
    let width = 600.0;
    let height = 300.0;
    let plot_height = height - 2.0 * PAD;
    let count = props.groups.len();

    if count == 0 {
        return html! { <p class="chart-empty">{"No data for the current filters."}</p> };
    }

    let mut all = props.primary.1.clone();
    all.extend(props.secondary.1.iter().copied());
    let max = max_value(&all);

    let group_width = (width - 2.0 * PAD) / (count as f64);
    let bar_width = group_width * 0.35;

    let bar = |group: usize, slot: usize, value: f64, color: &str, label: &str| -> Html {
        let h = bar_height(value, max, plot_height);
        let x = PAD + group_width * (group as f64) + bar_width * (slot as f64) + group_width * 0.15;
        html! {
            <rect
                x={format!("{x:.1}")}
                y={format!("{:.1}", height - PAD - h)}
                width={format!("{bar_width:.1}")}
                height={format!("{h:.1}")}
                fill={color.to_string()}
            >
                <title>{ format!("{label}: {value:.0}") }</title>
            </rect>
        }
    };

    html! {
        <div>
            <svg viewBox={format!("0 0 {width} {height}")} class="chart">
                <line
                    x1={PAD.to_string()} y1={(height - PAD).to_string()}
                    x2={(width - PAD).to_string()} y2={(height - PAD).to_string()}
                    stroke="#e2e8f0"
                />
                {
                    props.groups.iter().enumerate().map(|(i, group)| {
                        let primary = props.primary.1.get(i).copied().unwrap_or(0.0);
                        let secondary = props.secondary.1.get(i).copied().unwrap_or(0.0);
                        html! {
                            <g key={i}>
                                { bar(i, 0, primary, PALETTE[0], group) }
                                { bar(i, 1, secondary, PALETTE[1], group) }
                            </g>
                        }
                    }).collect::<Html>()
                }
            </svg>
            <div class="chart-legend chart-legend-inline">
                <div class="legend-row">
                    <span class="legend-dot" style={format!("background: {}", PALETTE[0])} />
                    <span class="legend-label">{ &props.primary.0 }</span>
                </div>
                <div class="legend-row">
                    <span class="legend-dot" style={format!("background: {}", PALETTE[1])} />
                    <span class="legend-label">{ &props.secondary.0 }</span>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polyline_spans_the_plot_box() {
        let points = polyline_points(&[0.0, 50.0, 100.0], 600.0, 260.0);
        let pairs: Vec<&str> = points.split(' ').collect();
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[0], "30.0,230.0");
        assert_eq!(pairs[2], "570.0,30.0");
    }

    #[test]
    fn single_point_is_centered() {
        assert_eq!(point_x(0, 1, 600.0), 300.0);
    }

    #[test]
    fn donut_segments_cover_the_ring_exactly() {
        let segments = donut_segments(&[1.0, 2.0, 1.0]);
        assert_eq!(segments.len(), 3);
        let circumference = 2.0 * std::f64::consts::PI * DONUT_RADIUS;
        let total: f64 = segments.iter().map(|(len, _)| len).sum();
        assert!((total - circumference).abs() < 1e-9);
        // Offsets are cumulative.
        assert_eq!(segments[0].1, 0.0);
        assert!((segments[1].1 - segments[0].0).abs() < 1e-9);
    }

    #[test]
    fn donut_of_nothing_is_empty() {
        assert!(donut_segments(&[]).is_empty());
        assert!(donut_segments(&[0.0, 0.0]).is_empty());
    }

    #[test]
    fn bar_height_scales_linearly() {
        assert_eq!(bar_height(50.0, 100.0, 240.0), 120.0);
        assert_eq!(bar_height(0.0, 100.0, 240.0), 0.0);
    }

    #[test]
    fn max_value_never_returns_zero() {
        assert_eq!(max_value(&[]), 1.0);
        assert_eq!(max_value(&[0.0]), 1.0);
        assert_eq!(max_value(&[3.0, 7.0]), 7.0);
    }
}
