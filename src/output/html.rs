use std::fmt::Write;

use crate::error::Result;

use super::html_template::{HTML_FOOTER, HTML_HEAD_START, HTML_STYLE};
use super::svg::{
    Bar, ChartColor, Label, MapPath, SvgBuilder, TextAnchor, format_number, html_escape,
};
use super::{OutputFormatter, RenderModel};

/// Self-contained HTML page with the map and the chart side by side.
pub struct HtmlFormatter;

impl HtmlFormatter {
    fn render_map(model: &RenderModel) -> String {
        let map = &model.map;
        let background = map.background.iter().map(|d| {
            MapPath::new(d.clone(), ChartColor::css_var("background-land")).with_class("background")
        });
        let units = map.units.iter().filter_map(|unit| {
            let d = unit.path.as_ref()?;
            let label = unit.name.as_deref().or(unit.key.as_deref()).unwrap_or_default();
            let value = unit
                .value
                .map_or_else(|| "no data".to_string(), |v| v.to_string());
            Some(
                MapPath::new(d.clone(), ChartColor::hex(&unit.fill))
                    .with_class(unit.class_name.clone())
                    .with_title(format!("{label}: {value}")),
            )
        });
        let paths: Vec<MapPath> = background.chain(units).collect();

        SvgBuilder::new(map.width, map.height)
            .with_class("map")
            .push_all(&paths)
            .build()
    }

    fn render_chart(model: &RenderModel) -> String {
        let chart = &model.chart;
        let bars: Vec<Bar> = chart
            .bars
            .iter()
            .map(|bar| Bar {
                x: bar.x,
                y: bar.y,
                width: bar.width.max(0.0),
                height: bar.height,
                color: ChartColor::hex(&bar.fill),
                class_name: bar.class_name.clone(),
                title: format!(
                    "{}: {}",
                    bar.name.as_deref().unwrap_or_default(),
                    if bar.label.is_empty() { "no data" } else { bar.label.as_str() }
                ),
            })
            .collect();
        let labels: Vec<Label> = chart
            .bars
            .iter()
            .map(|bar| {
                Label::new(bar.label_x, bar.label_y, bar.label.clone())
                    .with_class(bar.class_name.replacen("bars", "numbers", 1))
                    .with_anchor(TextAnchor::Middle)
                    .with_font_size(10.0)
                    .with_color(ChartColor::css_var("card"))
            })
            .collect();
        let title = Label::new(chart.title_x, chart.title_y, chart.title.clone())
            .with_class("chartTitle")
            .with_font_size(16.0);

        SvgBuilder::new(chart.width, chart.height)
            .with_class("chart")
            .push_all(&bars)
            .push_all(&labels)
            .push_element(&title)
            .build()
    }

    fn write_legend(output: &mut String, model: &RenderModel) {
        output.push_str("            <div class=\"legend\">\n");
        for entry in &model.legend {
            let range = match (entry.lower, entry.upper) {
                (None, Some(upper)) => format!("&le; {}", format_number(upper)),
                (Some(lower), Some(upper)) => {
                    format!("{} to {}", format_number(lower), format_number(upper))
                }
                (Some(lower), None) => format!("&gt; {}", format_number(lower)),
                (None, None) => "no data".to_string(),
            };
            let _ = writeln!(
                output,
                r#"                <span class="legend-item"><span class="swatch" style="background: {}"></span>{range}</span>"#,
                html_escape(&entry.color)
            );
        }
        let _ = writeln!(
            output,
            r#"                <span class="legend-item"><span class="swatch" style="background: {}"></span>no data</span>"#,
            html_escape(&model.fallback)
        );
        output.push_str("            </div>\n");
    }

    fn indent(output: &mut String, block: &str, depth: usize) {
        let pad = " ".repeat(depth);
        for line in block.lines() {
            let _ = writeln!(output, "{pad}{line}");
        }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format(&self, model: &RenderModel) -> Result<String> {
        let mut output = String::from(HTML_HEAD_START);
        let _ = writeln!(output, "    <title>{}</title>", html_escape(&model.title));
        output.push_str(HTML_STYLE);

        let _ = writeln!(output, "        <h1>{}</h1>", html_escape(&model.title));
        output.push_str("        <div class=\"views\">\n");

        output.push_str("            <div class=\"view\">\n");
        Self::indent(&mut output, &Self::render_map(model), 16);
        output.push_str("            </div>\n");

        output.push_str("            <div class=\"view\">\n");
        Self::indent(&mut output, &Self::render_chart(model), 16);
        output.push_str("            </div>\n");

        output.push_str("        </div>\n");

        Self::write_legend(&mut output, model);

        let join = &model.join;
        if join.is_complete() {
            let _ = writeln!(
                output,
                r#"        <p class="join-summary complete">All {} regions matched.</p>"#,
                join.matched_features
            );
        } else {
            let _ = writeln!(
                output,
                r#"        <p class="join-summary">{} of {} regions matched; {} record(s) without a region.</p>"#,
                join.matched_features,
                model.map.units.len(),
                join.unmatched_records.len()
            );
        }

        output.push_str(HTML_FOOTER);
        Ok(output)
    }
}
