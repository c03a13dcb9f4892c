//! Search-form boundary: which tab is active, which fields it carries, and
//! the query string the form navigates with.

use crate::search::query::SearchQuery;

/// The four search tabs on the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchTab {
    Buy,
    Rent,
    Roommate,
    Services,
}

impl SearchTab {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchTab::Buy => "buy",
            SearchTab::Rent => "rent",
            SearchTab::Roommate => "roommate",
            SearchTab::Services => "services",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "buy" => Some(SearchTab::Buy),
            "rent" => Some(SearchTab::Rent),
            "roommate" => Some(SearchTab::Roommate),
            "services" => Some(SearchTab::Services),
            _ => None,
        }
    }

    /// Positional parameter names for this tab's selects.
    pub fn field_names(&self) -> &'static [&'static str] {
        match self {
            SearchTab::Buy => &["location", "property_type", "price_range"],
            SearchTab::Rent => &["location", "property_type", "monthly_rent"],
            SearchTab::Roommate => &[
                "location",
                "accommodation_type",
                "gender_preference",
                "occupation",
            ],
            SearchTab::Services => &["service_category", "location", "service_type"],
        }
    }
}

/// The state of one tab's form fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchForm {
    tab: SearchTab,
    values: Vec<Option<String>>,
}

impl SearchForm {
    pub fn new(tab: SearchTab) -> Self {
        Self { tab, values: vec![None; tab.field_names().len()] }
    }

    pub fn tab(&self) -> SearchTab {
        self.tab
    }

    /// Set a field by name. An empty value unsets it (a select left on its
    /// placeholder). Unknown names are ignored.
    pub fn set(&mut self, field: &str, value: &str) {
        if let Some(index) = self.tab.field_names().iter().position(|name| *name == field) {
            self.values[index] = if value.is_empty() { None } else { Some(value.to_string()) };
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        let index = self.tab.field_names().iter().position(|name| *name == field)?;
        self.values[index].as_deref()
    }

    /// Build the query the form navigates with: `type=<tab>` first, then the
    /// set fields in position order. `None` when no field beyond the type is
    /// set; the page refuses to search with an empty form.
    pub fn query(&self) -> Option<SearchQuery> {
        let mut pairs = vec![("type".to_string(), self.tab.as_str().to_string())];
        for (name, value) in self.tab.field_names().iter().zip(&self.values) {
            if let Some(value) = value {
                pairs.push((name.to_string(), value.clone()));
            }
        }
        if pairs.len() == 1 {
            return None;
        }
        Some(SearchQuery::from_pairs(pairs))
    }

    /// Rebuild a form from a navigation query, selecting the tab from the
    /// `type` key and filling any matching fields. `None` when the query
    /// names no known tab.
    pub fn populate(query: &SearchQuery) -> Option<Self> {
        let tab = SearchTab::from_str(query.get("type")?)?;
        let mut form = Self::new(tab);
        for name in tab.field_names() {
            if let Some(value) = query.get(name) {
                form.set(name, value);
            }
        }
        Some(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_includes_type_and_set_fields_in_order() {
        let mut form = SearchForm::new(SearchTab::Rent);
        form.set("monthly_rent", "20000");
        form.set("location", "Mirpur");

        let query = form.query().unwrap();
        let pairs: Vec<_> = query.pairs().collect();
        assert_eq!(
            pairs,
            vec![("type", "rent"), ("location", "Mirpur"), ("monthly_rent", "20000")]
        );
    }

    #[test]
    fn type_only_form_refuses_to_build_a_query() {
        let form = SearchForm::new(SearchTab::Buy);
        assert!(form.query().is_none());

        let mut form = SearchForm::new(SearchTab::Buy);
        form.set("location", "Dhaka");
        form.set("location", "");
        assert!(form.query().is_none());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let mut form = SearchForm::new(SearchTab::Services);
        form.set("bedrooms", "3");
        assert!(form.query().is_none());

        form.set("service_category", "plumbing");
        let pairs: Vec<_> = form.query().unwrap().pairs().map(|(_, v)| v.to_string()).collect();
        assert_eq!(pairs, vec!["services", "plumbing"]);
    }

    #[test]
    fn populate_is_the_inverse_of_query() {
        let mut form = SearchForm::new(SearchTab::Roommate);
        form.set("location", "Uttara");
        form.set("gender_preference", "any");

        let query = form.query().unwrap();
        let rebuilt = SearchForm::populate(&query).unwrap();
        assert_eq!(rebuilt, form);
    }

    #[test]
    fn populate_requires_a_known_tab() {
        assert!(SearchForm::populate(&SearchQuery::parse("location=Dhaka")).is_none());
        assert!(SearchForm::populate(&SearchQuery::parse("type=hotel")).is_none());
    }

    #[test]
    fn populate_fills_only_matching_fields() {
        let query = SearchQuery::parse("type=buy&location=Banani&bedrooms=3");
        let form = SearchForm::populate(&query).unwrap();
        assert_eq!(form.tab(), SearchTab::Buy);
        assert_eq!(form.get("location"), Some("Banani"));
        assert_eq!(form.get("property_type"), None);
    }
}
