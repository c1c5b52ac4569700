//! # st_plotting
//!
//! Bar charts of nucleotide composition, drawn with plotters.

mod bar_chart;

pub use bar_chart::*;
