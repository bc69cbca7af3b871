use colored::Colorize;
use rolo::api::{CmdMessage, MessageLevel};
use rolo::model::Contact;
use unicode_width::UnicodeWidthStr;

const NOT_SPECIFIED: &str = "Not specified";

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

pub(crate) fn print_contacts(contacts: &[Contact]) {
    if contacts.is_empty() {
        println!("No contacts found.");
        return;
    }

    let headers = ["ID", "NAME", "RELATIONSHIP", "EMAIL", "PHONE"];
    let rows: Vec<[String; 5]> = contacts
        .iter()
        .map(|contact| {
            [
                contact.id.to_string(),
                contact.values.name.clone(),
                contact.values.relationship.label().to_string(),
                contact.values.email.clone(),
                contact.values.phone.clone(),
            ]
        })
        .collect();

    let mut widths = headers.map(UnicodeWidthStr::width);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.width());
        }
    }

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| pad(header, *width))
        .collect::<Vec<_>>()
        .join("  ");
    println!("{}", header_line.dimmed());

    for row in &rows {
        let line = row
            .iter()
            .zip(widths.iter())
            .map(|(cell, width)| pad(cell, *width))
            .collect::<Vec<_>>()
            .join("  ");
        println!("{}", line);
    }

    println!();
    println!(
        "{}",
        format!(
            "{} contact{}",
            contacts.len(),
            if contacts.len() == 1 { "" } else { "s" }
        )
        .dimmed()
    );
}

pub(crate) fn print_contact_detail(contact: &Contact) {
    let values = &contact.values;

    println!(
        "{} {}",
        values.name.bold(),
        format!("({})", values.relationship.label()).dimmed()
    );
    println!("--------------------------------");
    println!("Email:    {}", values.email);
    println!("Phone:    {}", values.phone);
    println!(
        "Birthday: {}",
        values
            .birthday
            .map(|d| d.format("%B %-d, %Y").to_string())
            .unwrap_or_else(|| NOT_SPECIFIED.to_string())
    );

    println!();
    println!("{}", "Address".bold());
    println!("  City:     {}", or_not_specified(&values.city));
    println!("  State:    {}", or_not_specified(&values.state));
    println!("  Zip code: {}", or_not_specified(&values.zip_code));
    println!("  Country:  {}", or_not_specified(&values.country));

    if values.has_social_links() {
        println!();
        println!("{}", "Social links".bold());
        for (label, url) in values.social_links() {
            if !url.is_empty() {
                println!("  {:10}{}", format!("{}:", label), url);
            }
        }
    }

    if !values.notes.is_empty() {
        println!();
        println!("{}", "Notes".bold());
        println!("  {}", values.notes);
    }

    println!();
    println!("{}", format!("id: {}", contact.id).dimmed());
}

fn or_not_specified(value: &str) -> &str {
    if value.is_empty() {
        NOT_SPECIFIED
    } else {
        value
    }
}

fn pad(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}
