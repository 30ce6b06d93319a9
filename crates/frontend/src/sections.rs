//! The closed set of dashboard sections and their registry metadata.
//!
//! Every section the sidebar can activate is an enum variant, so the
//! section-to-view mapping in `views::section_view` is exhaustive at compile
//! time. `Overview` is both the initial section and the declared fallback for
//! any unrecognized identifier (for example a stale `?section=` parameter).

/// A sub-view of the admin dashboard.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Section {
    #[default]
    Overview,
    Customers,
    Products,
    Invoices,
    Payments,
    Settings,
}

impl Section {
    /// Stable identifier, used for the sidebar keys and the URL parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Overview => "overview",
            Section::Customers => "customers",
            Section::Products => "products",
            Section::Invoices => "invoices",
            Section::Payments => "payments",
            Section::Settings => "settings",
        }
    }

    /// Parse a section identifier; anything unrecognized lands on `Overview`.
    pub fn from_str(s: &str) -> Self {
        match s {
            "customers" => Section::Customers,
            "products" => Section::Products,
            "invoices" => Section::Invoices,
            "payments" => Section::Payments,
            "settings" => Section::Settings,
            _ => Section::Overview,
        }
    }

    /// Sidebar label.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Overview => "Overview",
            Section::Customers => "Customers",
            Section::Products => "Products",
            Section::Invoices => "Invoices",
            Section::Payments => "Payments",
            Section::Settings => "Settings",
        }
    }

    /// Icon name for the `icon()` helper.
    pub fn icon_name(&self) -> &'static str {
        match self {
            Section::Overview => "layout-dashboard",
            Section::Customers => "customers",
            Section::Products => "products",
            Section::Invoices => "invoices",
            Section::Payments => "payments",
            Section::Settings => "settings",
        }
    }

    /// All sections, in sidebar order.
    pub fn all() -> [Section; 6] {
        [
            Section::Overview,
            Section::Customers,
            Section::Products,
            Section::Invoices,
            Section::Payments,
            Section::Settings,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_roundtrip() {
        for section in Section::all() {
            assert_eq!(Section::from_str(section.as_str()), section);
        }
    }

    #[test]
    fn test_unrecognized_falls_back_to_overview() {
        assert_eq!(Section::from_str("reports"), Section::Overview);
        assert_eq!(Section::from_str(""), Section::Overview);
        assert_eq!(Section::from_str("OVERVIEW"), Section::Overview);
    }

    #[test]
    fn test_default_is_overview() {
        assert_eq!(Section::default(), Section::Overview);
    }

    #[test]
    fn test_all_is_distinct() {
        let all = Section::all();
        for (i, a) in all.iter().enumerate() {
            for b in all.iter().skip(i + 1) {
                assert_ne!(a.as_str(), b.as_str());
            }
        }
    }
}
