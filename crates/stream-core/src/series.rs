// File: crates/stream-core/src/series.rs
// Summary: The closed set of tracked series shared by every pipeline stage.
// Notes:
// - Declaration order is the stacking order and the palette order. Nothing in the
//   pipeline re-derives either from input column names.

use enum_map::{Enum, EnumMap};

/// Raw column holding the `MM/DD/YY` date string.
pub const DATE_COLUMN: &str = "Date";

/// A value per series, total over the enumeration by construction.
pub type SeriesMap<T> = EnumMap<Series, T>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Enum)]
pub enum Series {
    Gpt4,
    Gemini,
    Palm2,
    Claude,
    Llama31,
}

impl Series {
    /// All series in stacking/palette order.
    pub const ALL: [Series; 5] = [
        Series::Gpt4,
        Series::Gemini,
        Series::Palm2,
        Series::Claude,
        Series::Llama31,
    ];

    /// Label shown in the legend and used as the series key.
    pub const fn display_name(self) -> &'static str {
        match self {
            Series::Gpt4 => "GPT-4",
            Series::Gemini => "Gemini",
            Series::Palm2 => "PaLM-2",
            Series::Claude => "Claude",
            Series::Llama31 => "LLaMA-3.1",
        }
    }

    /// Column name carrying this series' value in a raw row.
    pub const fn column(self) -> &'static str {
        match self {
            Series::Gpt4 => "GPT4",
            Series::Gemini => "Gemini",
            Series::Palm2 => "PaLM2",
            Series::Claude => "Claude",
            Series::Llama31 => "LLaMA31",
        }
    }

    /// Position in the enumeration (palette slot, legend row).
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_display_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.display_name() == name)
    }
}

impl std::fmt::Display for Series {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
