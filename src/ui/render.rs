//! Plain-text rendering of [`UiState`].

use crate::domain::catalog::Product;
use crate::ui::state::{UiState, View, CATEGORIES};
use std::fmt::Write;

/// Formats a rupee amount with Indian digit grouping, e.g. `₹1,23,456` or `₹199.5`.
/// Keeps up to three fraction digits.
pub fn format_inr(amount: f64) -> String {
    let negative = amount < 0.0;
    let milli = (amount.abs() * 1000.0).round() as u64;
    let whole = group_indian(milli / 1000);
    let frac = milli % 1000;

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push('₹');
    out.push_str(&whole);
    if frac != 0 {
        let digits = format!("{:03}", frac);
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }
    out
}

// Last three digits, then groups of two: 12345678 -> 1,23,45,678
fn group_indian(n: u64) -> String {
    let digits = n.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

pub fn list_title(view: &View) -> String {
    match view {
        View::Browse { category, products } => {
            let label = if category.is_empty() { "All" } else { category.as_str() };
            format!("{} Products ({})", label, products.len())
        }
        View::AiResult { products, .. } => {
            let n = products.len();
            format!("{} Matching Product{} Found", n, if n == 1 { "" } else { "s" })
        }
    }
}

pub fn render_product(p: &Product) -> String {
    let mut out = format!("  {}  {}\n", p.name, format_inr(p.price));
    let _ = writeln!(out, "    [{}]", p.category.to_uppercase());
    if !p.description.is_empty() {
        let _ = writeln!(out, "    {}", p.description);
    }
    if !p.tags.is_empty() {
        let tags: Vec<String> = p.tags.iter().map(|t| format!("#{}", t)).collect();
        let _ = writeln!(out, "    {}", tags.join(" "));
    }
    out
}

fn render_tabs(active: &str) -> String {
    CATEGORIES
        .iter()
        .map(|&c| {
            let label = if c.is_empty() { "All" } else { c };
            if c.eq_ignore_ascii_case(active) {
                format!("[{}]", label)
            } else {
                label.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// Renders the whole screen.
pub fn render(state: &UiState) -> String {
    let mut out = String::new();
    out.push_str("🛍️  Product Discovery AI\n");
    out.push_str("Find the perfect product with natural language search\n\n");

    if let Some(error) = &state.error {
        let _ = writeln!(out, "⚠️  {}  (type `dismiss` to close)\n", error);
    }

    match &state.view {
        View::AiResult { summary, .. } => {
            if !summary.is_empty() {
                out.push_str("🤖 AI Recommendation  (type `all` to show all products)\n");
                let _ = writeln!(out, "{}\n", summary);
            }
        }
        View::Browse { category, .. } => {
            let _ = writeln!(out, "{}\n", render_tabs(category));
        }
    }

    if state.loading {
        out.push_str("⏳ Loading…\n");
        return out;
    }

    let products = state.view.products();
    if products.is_empty() {
        out.push_str("No products found.\n");
        return out;
    }

    let _ = writeln!(out, "{}\n", list_title(&state.view));
    for p in products {
        out.push_str(&render_product(p));
        out.push('\n');
    }
    out
}
