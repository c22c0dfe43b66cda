/*
* Licensed to Elasticsearch B.V. under one or more contributor
* license agreements. See the NOTICE file distributed with
* this work for additional information regarding copyright
* ownership. Elasticsearch B.V. licenses this file to you under
* the Apache License, Version 2.0 (the "License"); you may
* not use this file except in compliance with the License.
* You may obtain a copy of the License at
*
*  http://www.apache.org/licenses/LICENSE-2.0
*
* Unless required by applicable law or agreed to in writing,
* software distributed under the License is distributed on an
* "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
* KIND, either express or implied.  See the License for the
* specific language governing permissions and limitations
* under the License.
*/

//! Bar chart rendering for sweep reports.
//!
//! One bar of unit width per occupied bin, no gaps, bars in ascending label
//! order. The bin labels sit under their bar rotated vertically, and the legend
//! spells out the extremal pairs. The drawing area lives inside the render call
//! and is presented before it returns, repeated invocations share no canvas.

use log::debug;
use plotters::coord::ranged1d::{IntoSegmentedCoord, SegmentValue};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontTransform;
use std::fmt::Display;
use std::path::Path;

use crate::errors::{PairScanError, PairScanResult};
use crate::sweep::SweepReport;

const CHART_SIZE: (u32, u32) = (1024, 768);

/// Draws the histogram of `report` and writes it to `path`.
///
/// The image format follows the file extension, `svg` gets the vector backend
/// and anything else is rasterized through the bitmap backend.
pub fn render_histogram<P: AsRef<Path>>(report: &SweepReport, path: &P) -> PairScanResult<()> {
    let path = path.as_ref();
    let is_svg = path.extension().map(|e| e == "svg").unwrap_or(false);
    if is_svg {
        let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
        draw_chart(&root, report)?;
    } else {
        let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
        draw_chart(&root, report)?;
    }
    debug!("wrote the histogram chart to {:?}", path);
    Ok(())
}

fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    report: &SweepReport,
) -> PairScanResult<()> {
    let bins = report.histogram.sorted_bins();
    let labels: Vec<String> = bins.iter().map(|(label, _)| label.to_string()).collect();
    let y_max = bins.iter().map(|(_, count)| *count).max().unwrap_or(1);

    root.fill(&WHITE).map_err(draw_error)?;

    let mut chart = ChartBuilder::on(root)
        .margin(10)
        .x_label_area_size(56)
        .y_label_area_size(56)
        .build_cartesian_2d(
            (0..bins.len()).into_segmented(),
            0u64..y_max + y_max / 10 + 1,
        )
        .map_err(draw_error)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(bins.len() + 1)
        .x_label_style(("sans-serif", 11).into_font().transform(FontTransform::Rotate90))
        .x_label_formatter(&|v| match v {
            SegmentValue::CenterOf(k) if *k < labels.len() => labels[*k].clone(),
            _ => String::new(),
        })
        .y_desc("pairs")
        .draw()
        .map_err(draw_error)?;

    let min = report.extrema.min();
    let max = report.extrema.max();

    chart
        .draw_series(
            Histogram::vertical(&chart)
                .style(BLUE.mix(0.6).filled())
                .margin(0)
                .data(bins.iter().enumerate().map(|(k, (_, count))| (k, *count))),
        )
        .map_err(draw_error)?
        .label(format!(
            "MIN distance {} ({} v {})",
            min.distance, min.i, min.j
        ))
        .legend(|(x, y)| EmptyElement::at((x, y)));

    // a second, empty series carries the other legend line
    chart
        .draw_series(
            Histogram::vertical(&chart)
                .style(BLUE.mix(0.6).filled())
                .data(std::iter::empty::<(usize, u64)>()),
        )
        .map_err(draw_error)?
        .label(format!(
            "MAX distance {} ({} v {})",
            max.distance, max.i, max.j
        ))
        .legend(|(x, y)| EmptyElement::at((x, y)));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8).filled())
        .border_style(&BLACK)
        .draw()
        .map_err(draw_error)?;

    root.present().map_err(draw_error)?;
    Ok(())
}

fn draw_error<E: Display>(err: E) -> PairScanError {
    PairScanError::RenderError(err.to_string())
}
