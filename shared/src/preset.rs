use serde::{Deserialize, Serialize};

/// Quick-select shortcuts listed beside the month grids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuickSelectPreset {
    OneMonth,
    ThreeMonths,
    SixMonths,
    OneYear,
    YearToDate,
    LastMonth,
    LastYear,
    AllTime,
}

impl QuickSelectPreset {
    /// All presets in display order
    pub const ALL: [QuickSelectPreset; 8] = [
        QuickSelectPreset::OneMonth,
        QuickSelectPreset::ThreeMonths,
        QuickSelectPreset::SixMonths,
        QuickSelectPreset::OneYear,
        QuickSelectPreset::YearToDate,
        QuickSelectPreset::LastMonth,
        QuickSelectPreset::LastYear,
        QuickSelectPreset::AllTime,
    ];

    /// Button label
    pub fn label(self) -> &'static str {
        match self {
            QuickSelectPreset::OneMonth => "1 month",
            QuickSelectPreset::ThreeMonths => "3 months",
            QuickSelectPreset::SixMonths => "6 months",
            QuickSelectPreset::OneYear => "1 year",
            QuickSelectPreset::YearToDate => "Year to date",
            QuickSelectPreset::LastMonth => "Last month",
            QuickSelectPreset::LastYear => "Last year",
            QuickSelectPreset::AllTime => "All time",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_labels_in_display_order() {
        let labels: Vec<&str> = QuickSelectPreset::ALL.iter().map(|p| p.label()).collect();
        assert_eq!(
            labels,
            vec![
                "1 month",
                "3 months",
                "6 months",
                "1 year",
                "Year to date",
                "Last month",
                "Last year",
                "All time",
            ]
        );
    }
}
