//! Typed colour lookup.
//!
//! Every enum that drives colour maps to a [`Tone`] through an exhaustive
//! `match`, and each tone owns its class strings. Adding a variant anywhere is a
//! compile error until it has been given a tone.

use serde::{Deserialize, Serialize};

/// Colour family used by badges, cards and progress bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Red,
    Emerald,
    Amber,
    Blue,
    Indigo,
    Rose,
    Teal,
    Neutral,
}

impl Tone {
    /// Classes for a soft badge or card: text, background and border.
    pub fn badge_classes(self) -> &'static str {
        match self {
            Tone::Red => "text-red-700 bg-red-100 border-red-200 dark:bg-red-900/40 dark:text-red-100 dark:border-red-800",
            Tone::Emerald => "text-emerald-700 bg-emerald-100 border-emerald-200 dark:bg-emerald-900/40 dark:text-emerald-100 dark:border-emerald-800",
            Tone::Amber => "text-amber-700 bg-amber-100 border-amber-200 dark:bg-amber-900/40 dark:text-amber-100 dark:border-amber-800",
            Tone::Blue => "text-blue-700 bg-blue-100 border-blue-200 dark:bg-blue-900/40 dark:text-blue-100 dark:border-blue-800",
            Tone::Indigo => "text-indigo-700 bg-indigo-100 border-indigo-200 dark:bg-indigo-900/40 dark:text-indigo-100 dark:border-indigo-800",
            Tone::Rose => "text-rose-700 bg-rose-100 border-rose-200 dark:bg-rose-900/40 dark:text-rose-100 dark:border-rose-800",
            Tone::Teal => "text-teal-700 bg-teal-100 border-teal-200 dark:bg-teal-900/40 dark:text-teal-100 dark:border-teal-800",
            Tone::Neutral => "text-gray-700 bg-gray-100 border-gray-200 dark:bg-gray-800 dark:text-gray-300 dark:border-gray-700",
        }
    }

    /// Solid fill, used for progress bars.
    pub fn fill_class(self) -> &'static str {
        match self {
            Tone::Red => "bg-red-500",
            Tone::Emerald => "bg-emerald-500",
            Tone::Amber => "bg-amber-500",
            Tone::Blue => "bg-blue-500",
            Tone::Indigo => "bg-indigo-500",
            Tone::Rose => "bg-rose-500",
            Tone::Teal => "bg-teal-500",
            Tone::Neutral => "bg-gray-400",
        }
    }

    /// Plain colour name, for terminal output.
    pub fn name(self) -> &'static str {
        match self {
            Tone::Red => "red",
            Tone::Emerald => "emerald",
            Tone::Amber => "amber",
            Tone::Blue => "blue",
            Tone::Indigo => "indigo",
            Tone::Rose => "rose",
            Tone::Teal => "teal",
            Tone::Neutral => "neutral",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_tone_has_distinct_fill() {
        let tones = [
            Tone::Red,
            Tone::Emerald,
            Tone::Amber,
            Tone::Blue,
            Tone::Indigo,
            Tone::Rose,
            Tone::Teal,
            Tone::Neutral,
        ];
        let mut fills: Vec<_> = tones.iter().map(|t| t.fill_class()).collect();
        fills.sort();
        fills.dedup();
        assert_eq!(fills.len(), tones.len());
        for tone in tones {
            assert!(tone.badge_classes().contains(tone.name()) || tone == Tone::Neutral);
        }
    }
}
