pub mod config;
pub mod exchange;
pub mod stopwatch;
mod cocktail;
mod gnome;
mod shell;

use std::cmp::Ordering;
use std::fmt;

pub use cocktail::{cocktail_shaker_sort, cocktail_shaker_sort_by, cocktail_shaker_sort_by_key};
pub use config::CIURA_GAPS;
pub use exchange::{is_sorted, is_sorted_by};
pub use gnome::{gnome_sort, gnome_sort_by, gnome_sort_by_key};
pub use shell::{shell_sort, shell_sort_by, shell_sort_by_key, shell_sort_with_gaps_by};
pub use stopwatch::{Stopwatch, StopwatchError};

/// The three in-place sorts, for callers that want to run them interchangeably.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Gnome,
    CocktailShaker,
    Shell,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Gnome, Algorithm::CocktailShaker, Algorithm::Shell];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Gnome => "Gnome Sort",
            Algorithm::CocktailShaker => "Cocktail Shaker Sort",
            Algorithm::Shell => "Shell Sort",
        }
    }

    pub fn sort<T: Ord>(self, v: &mut [T]) {
        self.sort_by(v, T::cmp);
    }

    pub fn sort_by<T, F>(self, v: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        match self {
            Algorithm::Gnome => gnome_sort_by(v, compare),
            Algorithm::CocktailShaker => cocktail_shaker_sort_by(v, compare),
            Algorithm::Shell => shell_sort_by(v, compare),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
