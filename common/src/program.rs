use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::theme::Tone;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgramCategory {
    Finance,
    Logistics,
    Education,
    Protection,
}

impl ProgramCategory {
    /// Chip order on the programs page.
    pub fn all() -> &'static [ProgramCategory] {
        &[
            ProgramCategory::Finance,
            ProgramCategory::Education,
            ProgramCategory::Logistics,
            ProgramCategory::Protection,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ProgramCategory::Finance => "finance",
            ProgramCategory::Logistics => "logistics",
            ProgramCategory::Education => "education",
            ProgramCategory::Protection => "protection",
        }
    }
}

impl FromStr for ProgramCategory {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProgramCategory::all()
            .iter()
            .copied()
            .find(|c| c.as_str() == s.trim().to_ascii_lowercase())
            .ok_or_else(|| {
                ParseError::unknown(
                    "program category",
                    s,
                    "finance, education, logistics, protection",
                )
            })
    }
}

/// Card colour of a program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accent {
    Emerald,
    Blue,
    Amber,
    Indigo,
    Rose,
    Teal,
}

impl Accent {
    pub fn tone(self) -> Tone {
        match self {
            Accent::Emerald => Tone::Emerald,
            Accent::Blue => Tone::Blue,
            Accent::Amber => Tone::Amber,
            Accent::Indigo => Tone::Indigo,
            Accent::Rose => Tone::Rose,
            Accent::Teal => Tone::Teal,
        }
    }
}

/// A support program offered to farmers (loans, insurance, training, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: ProgramCategory,
    pub accent: Accent,
    pub action_label: String,
    #[serde(default)]
    pub is_popular: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Category chip of the programs page: every program, or one category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgramFilter {
    #[default]
    All,
    Only(ProgramCategory),
}

impl ProgramFilter {
    /// Chips in display order, `All` first.
    pub fn options() -> Vec<ProgramFilter> {
        std::iter::once(ProgramFilter::All)
            .chain(ProgramCategory::all().iter().copied().map(ProgramFilter::Only))
            .collect()
    }

    pub fn matches(self, category: ProgramCategory) -> bool {
        match self {
            ProgramFilter::All => true,
            ProgramFilter::Only(c) => c == category,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ProgramFilter::All => "all",
            ProgramFilter::Only(c) => c.as_str(),
        }
    }
}

impl fmt::Display for ProgramFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProgramFilter {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(ProgramFilter::All);
        }
        s.parse::<ProgramCategory>()
            .map(ProgramFilter::Only)
            .map_err(|_| {
                ParseError::unknown(
                    "program category",
                    s,
                    "all, finance, education, logistics, protection",
                )
            })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramsState {
    pub filter: ProgramFilter,
}

impl ProgramsState {
    pub fn select(&mut self, filter: ProgramFilter) {
        self.filter = filter;
    }

    pub fn filtered<'a>(&self, programs: &'a [Program]) -> Vec<&'a Program> {
        programs
            .iter()
            .filter(|p| self.filter.matches(p.category))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::Fixtures;

    #[test]
    fn test_filter_programs() {
        let fx = Fixtures::builtin();
        let mut state = ProgramsState::default();
        assert_eq!(state.filtered(&fx.programs).len(), 6);

        state.select(ProgramFilter::Only(ProgramCategory::Finance));
        let titles: Vec<_> = state.filtered(&fx.programs).iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Seed Capital & Micro-Loans", "Bulk Input Group Buy"]);

        state.select(ProgramFilter::Only(ProgramCategory::Protection));
        assert_eq!(state.filtered(&fx.programs).len(), 1);

        state.select(ProgramFilter::All);
        assert_eq!(state.filtered(&fx.programs).len(), 6);
        state.select(ProgramFilter::Only(ProgramCategory::Protection));
        assert_eq!(state.filtered(&fx.programs).len(), 1);
    }

    #[test]
    fn test_parse_program_filter() {
        assert_eq!("All".parse::<ProgramFilter>(), Ok(ProgramFilter::All));
        assert_eq!(
            "education".parse::<ProgramFilter>(),
            Ok(ProgramFilter::Only(ProgramCategory::Education))
        );
        assert!("housing".parse::<ProgramFilter>().is_err());
        let options = ProgramFilter::options();
        assert_eq!(options.len(), 5);
        assert_eq!(options[0], ProgramFilter::All);
        for option in options {
            assert_eq!(option.as_str().parse::<ProgramFilter>(), Ok(option));
        }
    }
}
