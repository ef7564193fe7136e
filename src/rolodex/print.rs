use colored::Colorize;
use rolodex::api::{CmdMessage, MessageLevel};
use rolodex::config::RolodexConfig;
use rolodex::error::Result;
use rolodex::model::{render, split_line};

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// Name lookups print aligned columns.
pub(crate) fn print_contacts(lines: &[String], config: &RolodexConfig) -> Result<()> {
    for line in lines {
        let (name, number) = split_line(line)?;
        println!(
            "{}",
            render(name, number, config.name_width, config.number_width)
        );
    }
    Ok(())
}

/// Number lookups print the stored line as is.
pub(crate) fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}
