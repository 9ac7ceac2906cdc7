use anyhow::Context;
use heatmapcore::model::descriptor::CELL_CLASS;
use heatmapcore::model::{AxisDescriptor, CellDescriptor, LegendDescriptor, Orientation};
use heatmapcore::{format_tooltip, ChartDescriptor};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

const TICK_SIZE: f64 = 6.0;
const TICK_PADDING: f64 = 3.0;

/// Serialises chart descriptors into a standalone SVG document.
pub struct SvgWriter {
    width: f64,
    height: f64,
    elements: Vec<String>,
}

impl SvgWriter {
    pub fn from_chart(chart: &ChartDescriptor) -> Self {
        let mut writer = Self {
            width: chart.width,
            height: chart.height,
            elements: Vec::with_capacity(chart.cells.len() + 3),
        };
        writer.add_axis(&chart.x_axis);
        writer.add_axis(&chart.y_axis);
        for cell in &chart.cells {
            writer.add_cell(cell, chart.base_temperature);
        }
        writer.add_legend(&chart.legend);
        writer
    }

    /// Cell rect with its hover text as a native `<title>` tooltip.
    fn add_cell(&mut self, cell: &CellDescriptor, base_temperature: f64) {
        let tooltip = format_tooltip(&cell.record(), base_temperature);
        self.elements.push(format!(
            r#"<rect class="{}" x="{}" y="{}" width="{}" height="{}" fill="{}" data-year="{}" data-month="{}" data-temp="{}"><title>{}</title></rect>"#,
            CELL_CLASS,
            cell.x,
            cell.y,
            cell.width,
            cell.height,
            cell.fill,
            cell.metadata.year,
            cell.metadata.month_index0,
            cell.metadata.absolute_temp,
            escape(&tooltip.text())
        ));
    }

    fn add_axis(&mut self, axis: &AxisDescriptor) {
        self.elements.push(axis_group(axis));
    }

    fn add_legend(&mut self, legend: &LegendDescriptor) {
        let mut group = format!(
            r#"<g id="{}" transform="translate({}, {})">"#,
            legend.id, legend.translate.0, legend.translate.1
        );
        for bucket in &legend.buckets {
            let _ = write!(
                group,
                r#"<rect x="{}" y="0" width="{}" height="{}" fill="{}"/>"#,
                bucket.x, bucket.width, legend.height, bucket.color
            );
        }
        group.push_str(&axis_group(&legend.axis));
        group.push_str("</g>");
        self.elements.push(group);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        let _ = writeln!(
            out,
            r#"<svg width="{}" height="{}" viewBox="0 0 {} {}" xmlns="http://www.w3.org/2000/svg">"#,
            self.width, self.height, self.width, self.height
        );
        for element in &self.elements {
            let _ = writeln!(out, "  {}", element);
        }
        out.push_str("</svg>\n");
        out
    }

    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let path_ref = path.as_ref();
        if let Some(parent) = path_ref.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        fs::write(path_ref, self.render())
            .with_context(|| format!("writing svg {}", path_ref.display()))
    }
}

fn axis_group(axis: &AxisDescriptor) -> String {
    let mut group = format!(
        r#"<g id="{}" transform="translate({}, {})" font-size="10" text-anchor="{}">"#,
        axis.id,
        axis.translate.0,
        axis.translate.1,
        match axis.orientation {
            Orientation::Bottom => "middle",
            Orientation::Left => "end",
        }
    );
    for tick in &axis.ticks {
        let label = escape(&tick.label);
        let _ = match axis.orientation {
            Orientation::Bottom => write!(
                group,
                r#"<g class="tick" transform="translate({}, 0)"><line y2="{}" stroke="currentColor"/><text y="{}" dy="0.71em" fill="currentColor">{}</text></g>"#,
                tick.position,
                TICK_SIZE,
                TICK_SIZE + TICK_PADDING,
                label
            ),
            Orientation::Left => write!(
                group,
                r#"<g class="tick" transform="translate(0, {})"><line x2="{}" stroke="currentColor"/><text x="{}" dy="0.32em" fill="currentColor">{}</text></g>"#,
                tick.position,
                -TICK_SIZE,
                -(TICK_SIZE + TICK_PADDING),
                label
            ),
        };
    }
    group.push_str("</g>");
    group
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
