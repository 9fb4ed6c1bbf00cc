//! Sorting algorithm selection and static descriptions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Sorting algorithms the recorder can animate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    Bubble,
    Insertion,
    Selection,
}

/// Static complexity and stability facts shown next to the animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmInfo {
    pub name: &'static str,
    pub time_complexity: &'static str,
    pub space_complexity: &'static str,
    pub stable: bool,
}

impl Algorithm {
    /// All algorithms, in menu order.
    pub const ALL: [Algorithm; 3] = [
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Selection,
    ];

    /// Short identifier used in configs and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Insertion => "insertion",
            Algorithm::Selection => "selection",
        }
    }

    pub fn info(self) -> AlgorithmInfo {
        match self {
            Algorithm::Bubble => AlgorithmInfo {
                name: "Bubble Sort",
                time_complexity: "O(n²) average and worst case",
                space_complexity: "O(1) - In-place sorting",
                stable: true,
            },
            Algorithm::Insertion => AlgorithmInfo {
                name: "Insertion Sort",
                time_complexity: "O(n²) average and worst case, O(n) best case",
                space_complexity: "O(1) - In-place sorting",
                stable: true,
            },
            Algorithm::Selection => AlgorithmInfo {
                name: "Selection Sort",
                time_complexity: "O(n²) in all cases",
                space_complexity: "O(1) - In-place sorting",
                stable: false,
            },
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnknownAlgorithm(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("bubble".parse::<Algorithm>().unwrap(), Algorithm::Bubble);
        assert_eq!(
            " Insertion ".parse::<Algorithm>().unwrap(),
            Algorithm::Insertion
        );
        assert_eq!(
            "SELECTION".parse::<Algorithm>().unwrap(),
            Algorithm::Selection
        );
        assert!(matches!(
            "quick".parse::<Algorithm>(),
            Err(ConfigError::UnknownAlgorithm(_))
        ));
    }

    #[test]
    fn test_display_matches_serde() {
        for algorithm in Algorithm::ALL {
            let json = serde_json::to_string(&algorithm).unwrap();
            assert_eq!(json, format!("\"{}\"", algorithm));
        }
    }

    #[test]
    fn test_info_stability() {
        assert!(Algorithm::Bubble.info().stable);
        assert!(Algorithm::Insertion.info().stable);
        assert!(!Algorithm::Selection.info().stable);
        assert_eq!(Algorithm::Selection.info().time_complexity, "O(n²) in all cases");
    }
}
