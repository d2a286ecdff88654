use crate::commands::{CmdMessage, CmdResult};
use crate::model::Country;

pub fn run(countries: &[Country]) -> CmdResult {
    let mut result = CmdResult::default().with_listed(countries.to_vec());
    if countries.is_empty() {
        result.add_message(CmdMessage::warning("No countries configured"));
    }
    result
}
