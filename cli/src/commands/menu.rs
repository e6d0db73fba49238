//! Menu taxonomy listing command

use anyhow::Result;
use colored::Colorize;
use vedanco_core::site::taxonomy::{MenuItems, MenuKey, CONTACT_LABEL, HOME_LABEL};
use vedanco_core::site::{resolve, FooterGroup, FOOTER_LINKS};

/// Print every menu label with the target it navigates to
pub fn menu_command(mobile: bool) -> Result<()> {
    let order = if mobile {
        MenuKey::MOBILE_ORDER
    } else {
        MenuKey::DESKTOP_ORDER
    };

    println!("{}  {}", HOME_LABEL.bold(), resolve(HOME_LABEL).to_string().dimmed());
    for key in order {
        let category = key.category();
        println!(
            "{}  {}",
            category.label.bold(),
            resolve(category.label).to_string().dimmed()
        );

        match &category.items {
            MenuItems::Mega(columns) => {
                for column in columns.iter() {
                    println!("  {}", column.title.italic());
                    for leaf in column.items {
                        print_leaf(leaf, 4);
                    }
                }
            }
            MenuItems::List(items) => {
                for leaf in items.iter() {
                    print_leaf(leaf, 2);
                }
            }
        }
    }
    println!("{}  {}", CONTACT_LABEL.bold(), resolve(CONTACT_LABEL).to_string().dimmed());

    println!();
    println!("{}", "Footer".bold());
    for group in [
        FooterGroup::Company,
        FooterGroup::Verticals,
        FooterGroup::Contact,
        FooterGroup::Legal,
    ] {
        println!("  {}", group.title().italic());
        for link in FOOTER_LINKS.iter().filter(|link| link.group == group) {
            println!("    {:<24} {}", link.label, link.target().to_string().cyan());
        }
    }

    Ok(())
}

fn print_leaf(label: &str, indent: usize) {
    println!(
        "{:indent$}{:<28} {}",
        "",
        label,
        resolve(label).to_string().cyan(),
        indent = indent
    );
}
