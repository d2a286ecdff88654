use crate::attributes::build_spec;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::filter::filter;
use crate::model::Country;
use crate::spec::Combinator;

pub fn run<S: AsRef<str>>(
    countries: &[Country],
    terms: &[S],
    combinator: Combinator,
) -> Result<CmdResult> {
    let spec = build_spec(terms, combinator)?;
    let matched: Vec<Country> = filter(countries, &spec).cloned().collect();

    let mut result = CmdResult::default();
    if matched.is_empty() {
        result.add_message(CmdMessage::warning("No countries match"));
    } else {
        result.add_message(CmdMessage::info(format!(
            "{} of {} countries match ({})",
            matched.len(),
            countries.len(),
            combinator
        )));
    }
    Ok(result.with_listed(matched))
}
