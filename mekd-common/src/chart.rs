//! Dual-axis chart specification for the rendering boundary
//!
//! The core hands the charting collaborator two already-validated scalars;
//! this module packages them as a serializable bar-chart configuration in
//! the Chart.js key convention. The corruption series plots against an
//! auto-scaled left axis, the IPM series against a right axis fixed to
//! [0, 100] with step 10. Tick-abbreviation and tooltip callbacks are not
//! serializable and stay client-side.
//!
//! A spec is built fresh per computation; the client owns the single live
//! chart instance and destroys it before rendering a replacement.

use serde::Serialize;

pub const CORRUPTION_SERIES_COLOR: &str = "#1e88e5";
pub const IPM_SERIES_COLOR: &str = "#43a047";

/// Complete chart configuration: `{ type, data, options }`
#[derive(Debug, Clone, Serialize)]
pub struct ChartSpec {
    #[serde(rename = "type")]
    pub chart_type: &'static str,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartData {
    pub labels: [&'static str; 2],
    pub datasets: Vec<Dataset>,
}

/// One series, bound to one of the two y axes. Each series occupies a single
/// label slot, leaving the other empty.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: &'static str,
    pub data: [Option<f64>; 2],
    pub background_color: &'static str,
    #[serde(rename = "yAxisID")]
    pub y_axis_id: &'static str,
    pub border_radius: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub scales: Scales,
    pub plugins: Plugins,
}

#[derive(Debug, Clone, Serialize)]
pub struct Scales {
    #[serde(rename = "yKor")]
    pub corruption_axis: Axis,
    #[serde(rename = "yIpm")]
    pub ipm_axis: Axis,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    #[serde(rename = "type")]
    pub axis_type: &'static str,
    pub position: &'static str,
    pub begin_at_zero: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid: Option<AxisGrid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticks: Option<AxisTicks>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisGrid {
    pub draw_on_chart_area: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisTicks {
    pub step_size: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Plugins {
    pub legend: Legend,
}

#[derive(Debug, Clone, Serialize)]
pub struct Legend {
    pub display: bool,
}

impl ChartSpec {
    /// Build the dual-axis bar chart for one pair of estimates.
    pub fn dual_axis(corruption: f64, ipm: f64) -> Self {
        ChartSpec {
            chart_type: "bar",
            data: ChartData {
                labels: ["Estimasi Korupsi (Rp)", "Estimasi IPM (0–100)"],
                datasets: vec![
                    Dataset {
                        label: "Estimasi Korupsi (Rp)",
                        data: [Some(corruption), None],
                        background_color: CORRUPTION_SERIES_COLOR,
                        y_axis_id: "yKor",
                        border_radius: 6,
                    },
                    Dataset {
                        label: "Estimasi IPM",
                        data: [None, Some(ipm)],
                        background_color: IPM_SERIES_COLOR,
                        y_axis_id: "yIpm",
                        border_radius: 6,
                    },
                ],
            },
            options: ChartOptions {
                responsive: true,
                maintain_aspect_ratio: false,
                scales: Scales {
                    corruption_axis: Axis {
                        axis_type: "linear",
                        position: "left",
                        begin_at_zero: true,
                        min: None,
                        max: None,
                        grid: None,
                        ticks: None,
                    },
                    ipm_axis: Axis {
                        axis_type: "linear",
                        position: "right",
                        begin_at_zero: true,
                        min: Some(0.0),
                        max: Some(100.0),
                        // The second grid would clutter the plot area
                        grid: Some(AxisGrid {
                            draw_on_chart_area: false,
                        }),
                        ticks: Some(AxisTicks { step_size: 10.0 }),
                    },
                },
                plugins: Plugins {
                    legend: Legend { display: false },
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_occupy_separate_slots_and_axes() {
        let spec = ChartSpec::dual_axis(1.5e9, 67.25);

        assert_eq!(spec.data.datasets.len(), 2);
        assert_eq!(spec.data.datasets[0].data, [Some(1.5e9), None]);
        assert_eq!(spec.data.datasets[0].y_axis_id, "yKor");
        assert_eq!(spec.data.datasets[1].data, [None, Some(67.25)]);
        assert_eq!(spec.data.datasets[1].y_axis_id, "yIpm");
    }

    #[test]
    fn right_axis_is_fixed_to_percent_scale() {
        let spec = ChartSpec::dual_axis(1.0, 50.0);
        let ipm_axis = &spec.options.scales.ipm_axis;

        assert_eq!(ipm_axis.min, Some(0.0));
        assert_eq!(ipm_axis.max, Some(100.0));
        assert_eq!(ipm_axis.ticks.as_ref().map(|t| t.step_size), Some(10.0));
        assert_eq!(
            ipm_axis.grid.as_ref().map(|g| g.draw_on_chart_area),
            Some(false)
        );
    }

    #[test]
    fn serializes_in_chartjs_key_convention() {
        let spec = ChartSpec::dual_axis(2.0e6, 70.0);
        let json = serde_json::to_string(&spec).expect("serializable");

        assert!(json.contains(r#""type":"bar""#));
        assert!(json.contains(r#""yAxisID":"yKor""#));
        assert!(json.contains(r##""backgroundColor":"#1e88e5""##));
        assert!(json.contains(r#""borderRadius":6"#));
        assert!(json.contains(r#""stepSize":10.0"#));
        assert!(json.contains(r#""drawOnChartArea":false"#));
        // Left axis stays auto-scaled
        assert!(json.contains(r#""yKor":{"type":"linear","position":"left","beginAtZero":true}"#));
    }
}
