use crate::commands::CmdResult;
use crate::filter::{BetterFilter, Filter};
use crate::model::{Continent, Country, Language};
use crate::spec::{ContinentSpec, LanguageSpec, Specification};

/// Runs the two canonical scenarios over `countries`.
pub fn run(countries: &[Country]) -> CmdResult {
    let english_or_africa =
        LanguageSpec(Language::English).combine_or(ContinentSpec(Continent::Africa));
    let german_and_europe =
        LanguageSpec(Language::German).combine_and(ContinentSpec(Continent::Europe));

    let bf = BetterFilter;
    let first = bf.filter(countries, &english_or_africa).cloned().collect();
    let second = bf.filter(countries, &german_and_europe).cloned().collect();

    CmdResult::default()
        .with_section("language=ENGLISH OR continent=AFRICA", first)
        .with_section("language=GERMAN AND continent=EUROPE", second)
}
