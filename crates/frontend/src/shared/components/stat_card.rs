use crate::shared::icons::icon;
use leptos::prelude::*;

/// 12345 -> "12 345" (non-breaking space between triads)
pub fn format_thousands(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('\u{00a0}');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Summary tile with a single count
#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// `data-testid` of the tile
    test_id: &'static str,
    /// Count to show (None = still loading)
    #[prop(into)]
    value: Signal<Option<usize>>,
) -> impl IntoView {
    let formatted = move || match value.get() {
        Some(v) => format_thousands(v),
        None => "\u{2014}".to_string(),
    };

    view! {
        <div class="stat-card" data-testid=test_id>
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1\u{00a0}000");
        assert_eq!(format_thousands(1234567), "1\u{00a0}234\u{00a0}567");
    }
}
