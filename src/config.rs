//! Pipeline configuration. Mirrors the teacher's `MatchConfig`: a single
//! `Default`-implementing struct threaded explicitly through every stage
//! rather than read off globals.

use serde::{Deserialize, Serialize};

/// Reading direction used by the `sort` and `fix_numbering` stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Numbering {
    Ltr,
    Rtl,
}

impl Numbering {
    /// Parses the two literal configuration values; anything else is a
    /// fatal configuration error handled by the caller.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "ltr" => Some(Numbering::Ltr),
            "rtl" => Some(Numbering::Rtl),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Numbering::Ltr => "ltr",
            Numbering::Rtl => "rtl",
        }
    }
}

/// How `actual_gutters` aggregates the per-panel gap samples (§4.10).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GutterAggregator {
    Min,
    Median,
}

/// Configuration recognised by the pipeline (§6).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    pub numbering: Numbering,

    /// Default `1/15`. A panel is *small* when either side is below
    /// `min_panel_size_ratio * min(W, H)`.
    pub min_panel_size_ratio: f64,

    /// Divisor used for the *very small* threshold: `S / very_small_ratio_divisor`.
    /// The source uses the literal `25`.
    pub very_small_ratio_divisor: f64,

    /// Divisor used for the *close* distance threshold: `S / close_distance_ratio_divisor`.
    /// The source uses the literal `10`.
    pub close_distance_ratio_divisor: f64,

    pub gutter_aggregator: GutterAggregator,

    /// Image size in pixels, `(width, height)`. Set from the decoded image
    /// (or supplied directly when driving the pipeline from synthetic
    /// geometry) before any pass runs.
    pub image_size: (i32, i32),

    /// Enables `debug!`/`trace!` diagnostics per stage. Does not enable any
    /// image rendering or report generation (out of scope, see SPEC_FULL.md).
    pub debug: bool,
}

impl PageConfig {
    /// Validates and sets the reading direction from its two literal string
    /// forms, mirroring the source constructor's `numbering in ['ltr',
    /// 'rtl']` guard (§6/§7). Returns `PanelError::InvalidNumbering` for
    /// anything else.
    pub fn with_numbering(mut self, value: &str) -> crate::error::Result<Self> {
        self.numbering = Numbering::parse(value)
            .ok_or_else(|| crate::error::PanelError::InvalidNumbering { value: value.to_string() })?;
        Ok(self)
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            numbering: Numbering::Ltr,
            min_panel_size_ratio: 1.0 / 15.0,
            very_small_ratio_divisor: 25.0,
            close_distance_ratio_divisor: 10.0,
            gutter_aggregator: GutterAggregator::Min,
            image_size: (0, 0),
            debug: false,
        }
    }
}
