use colored::Colorize;
use specfilter::commands::{CmdMessage, MessageLevel, Section};
use specfilter::model::Country;
use unicode_width::UnicodeWidthStr;

const NAME_WIDTH: usize = 16;
const CONTINENT_WIDTH: usize = 8;

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub(crate) fn print_sections(sections: &[Section]) {
    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", section.title.bold());
        println!("--------------------------------");
        print_countries(&section.countries);
    }
}

pub(crate) fn print_countries(countries: &[Country]) {
    if countries.is_empty() {
        println!("{}", "No countries.".dimmed());
        return;
    }

    for country in countries {
        let name = country.name();
        let padding = NAME_WIDTH.saturating_sub(name.width());
        let continent = format!(
            "{:<width$}",
            country.continent().to_string(),
            width = CONTINENT_WIDTH
        );
        println!(
            "  {}{}{}  {}",
            name,
            " ".repeat(padding),
            continent.cyan(),
            country.language().to_string().green()
        );
    }
}
