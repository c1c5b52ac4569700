use std::fmt;
use std::path::{Path, PathBuf};

use log::info;
use plotters::coord::ranged1d::SegmentValue;
use plotters::prelude::*;

use st_sequence::BCOUNT;
use st_sequence::Base;
use st_sequence::Composition;

pub const TITLE: &str = "Nucleotide composition of the DNA sequence";
pub const X_DESC: &str = "Nucleotide";
pub const Y_DESC: &str = "Percent [%]";

/// The y-axis always spans the full percentage range.
pub const Y_RANGE: std::ops::Range<f64> = 0.0..100.0;


#[derive(Debug)]
pub enum ChartError {
    Drawing(String),
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartError::Drawing(s) => write!(f, "Failed to draw chart: {}", s),
        }
    }
}

impl std::error::Error for ChartError {}

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for ChartError {
    fn from(e: DrawingAreaErrorKind<E>) -> Self {
        ChartError::Drawing(e.to_string())
    }
}


/// Anything that can show a composition to the user.
pub trait CompositionRenderer {
    /// Render the chart for the record `label`. Returns the path of the
    /// produced image, if the renderer writes one.
    fn render(
        &mut self,
        label: &str,
        composition: &Composition,
    ) -> Result<Option<PathBuf>, ChartError>;
}


/// One bar of the chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bar {
    pub base: Base,
    pub value: f64,
    pub color: RGBColor,
}

pub fn base_color(b: Base) -> RGBColor {
    match b {
        Base::A => RGBColor(30, 144, 255), // dodger blue
        Base::C => RGBColor(255, 165, 0),  // orange
        Base::G => RGBColor(0, 128, 0),    // green
        Base::T => RGBColor(255, 0, 0),    // red
    }
}

/// Bars in A, C, G, T order, values clamped to the y-axis range.
pub fn bars(composition: &Composition) -> [Bar; BCOUNT] {
    Base::ALL.map(|base| Bar {
        base,
        value: composition.percent(base).clamp(Y_RANGE.start, Y_RANGE.end),
        color: base_color(base),
    })
}

/// Draws the composition bar chart onto any plotters drawing area.
pub fn draw_composition<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    composition: &Composition,
) -> Result<(), ChartError> {
    let bars = bars(composition);
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(root)
        .caption(TITLE, ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d((0u32..BCOUNT as u32).into_segmented(), Y_RANGE)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(BCOUNT)
        .x_label_formatter(&|x| match x {
            SegmentValue::CenterOf(i) => Base::ALL.get(*i as usize)
                .map(|b| b.to_string())
                .unwrap_or_default(),
            _ => String::new(),
        })
        .y_labels(11)
        .y_label_formatter(&|y| format!("{:.0}", y))
        .x_desc(X_DESC)
        .y_desc(Y_DESC)
        .light_line_style(RGBColor(220, 220, 220))
        .axis_desc_style(("sans-serif", 18))
        .label_style(("sans-serif", 16))
        .draw()?;

    for (i, bar) in bars.iter().enumerate() {
        chart.draw_series(
            Histogram::vertical(&chart)
                .style(bar.color.filled())
                .margin(20)
                .data(std::iter::once((i as u32, bar.value))),
        )?;
    }

    // Value above each bar, kept inside the plot area.
    chart.draw_series(bars.iter().enumerate().map(|(i, bar)| {
        Text::new(
            format!("{:.1}%", bar.value),
            (SegmentValue::CenterOf(i as u32), (bar.value + 2.0).min(97.0)),
            ("sans-serif", 14).into_font(),
        )
    }))?;

    root.present()?;
    Ok(())
}


/// Writes one SVG file per rendered record into a directory.
#[derive(Clone, Debug)]
pub struct SvgBarChart {
    dir: PathBuf,
    size: (u32, u32),
}

impl SvgBarChart {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        SvgBarChart {
            dir: dir.as_ref().to_path_buf(),
            size: (640, 480),
        }
    }

    /// `<dir>/<label>_composition.svg`
    pub fn path_for(&self, label: &str) -> PathBuf {
        self.dir.join(format!("{}_composition.svg", label))
    }
}

impl CompositionRenderer for SvgBarChart {
    fn render(
        &mut self,
        label: &str,
        composition: &Composition,
    ) -> Result<Option<PathBuf>, ChartError> {
        let path = self.path_for(label);
        {
            let root = SVGBackend::new(&path, self.size).into_drawing_area();
            draw_composition(&root, composition)?;
        }
        info!("Composition chart written to {}", path.display());
        Ok(Some(path))
    }
}
