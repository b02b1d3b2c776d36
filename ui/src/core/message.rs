//! Order message templating.
//!
//! Turns a calculator session into the plain-text summary that is pre-filled
//! in WhatsApp. Layout (English shown):
//!
//! ```text
//! Hello! I would like to place an order:
//!
//! 📋 PARTY ORDER
//! 👥 Number of people: 20
//!
//! 🍴 SAVORY SNACKS:
//! Coxinha (Chicken): 40 units (1x 50ct) - $35.00
//!
//! 💰 TOTAL: $35.00
//!
//! [Products can be frozen or ready]
//! ```
//!
//! A category block is left out entirely when it has no lines.

use rust_decimal::Decimal;

use super::catalog::Category;
use super::format::format_price;
use super::language::Language;
use super::selection::{LineItem, Selection};

struct Labels {
    greeting: &'static str,
    header: &'static str,
    guests: &'static str,
    savory: &'static str,
    sweet: &'static str,
    units: &'static str,
    pack_abbr: &'static str,
    note: &'static str,
    general: &'static str,
}

fn labels(lang: Language) -> &'static Labels {
    const PT: Labels = Labels {
        greeting: "Olá! Gostaria de fazer um pedido:",
        header: "📋 PEDIDO PARA FESTA",
        guests: "👥 Número de pessoas",
        savory: "🍴 SALGADOS:",
        sweet: "🍰 DOCES:",
        units: "unidades",
        pack_abbr: "un",
        note: "[Produtos podem ser congelados ou prontos]",
        general: "Olá! Gostaria de fazer um pedido no Brazilian's Snack.",
    };
    const EN: Labels = Labels {
        greeting: "Hello! I would like to place an order:",
        header: "📋 PARTY ORDER",
        guests: "👥 Number of people",
        savory: "🍴 SAVORY SNACKS:",
        sweet: "🍰 SWEETS:",
        units: "units",
        pack_abbr: "ct",
        note: "[Products can be frozen or ready]",
        general: "Hello! I would like to place an order at Brazilian's Snack.",
    };
    const ES: Labels = Labels {
        greeting: "¡Hola! Me gustaría hacer un pedido:",
        header: "📋 PEDIDO PARA FIESTA",
        guests: "👥 Número de personas",
        savory: "🍴 SALADOS:",
        sweet: "🍰 DULCES:",
        units: "unidades",
        pack_abbr: "ud",
        note: "[Productos pueden ser congelados o listos]",
        general: "¡Hola! Me gustaría hacer un pedido en Brazilian's Snack.",
    };
    match lang {
        Language::Pt => &PT,
        Language::En => &EN,
        Language::Es => &ES,
    }
}

/// Render the order summary. Selections without a quantity or pack are skipped.
pub fn format_order_message(
    guests: u32,
    selections: &[Selection],
    total: Decimal,
    lang: Language,
) -> String {
    let l = labels(lang);
    let lines: Vec<LineItem<'_>> = selections.iter().filter_map(Selection::line_item).collect();

    let mut message = format!("{}\n\n{}\n{}: {guests}\n\n", l.greeting, l.header, l.guests);
    for (category, title) in [(Category::Savory, l.savory), (Category::Sweet, l.sweet)] {
        let mut block = lines
            .iter()
            .filter(|line| line.product.category == category)
            .peekable();
        if block.peek().is_none() {
            continue;
        }
        message.push_str(title);
        message.push('\n');
        for line in block {
            message.push_str(&format_line(line, lang));
            message.push('\n');
        }
        message.push('\n');
    }
    message.push_str(&format!("💰 TOTAL: {}\n\n{}", format_price(total), l.note));
    message
}

/// `Coxinha: 40 unidades (1x 50un) - $35.00`
pub fn format_line(line: &LineItem<'_>, lang: Language) -> String {
    let l = labels(lang);
    format!(
        "{}: {} {} ({}x {}{}) - {}",
        line.product.name(lang),
        line.quantity,
        l.units,
        line.packages,
        line.tier.quantity,
        l.pack_abbr,
        format_price(line.price)
    )
}

/// Greeting used by the generic "order now" buttons outside the calculator.
pub fn general_order_message(lang: Language) -> &'static str {
    labels(lang).general
}
