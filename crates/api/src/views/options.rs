//! `<select>` option lists with the current value marked.

use museum_core::choices::Choice;
use museum_core::forms::IdChoice;
use museum_core::table::CatalogTable;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl SelectOption {
    fn new(value: impl Into<String>, label: impl Into<String>, current: &str) -> Self {
        let value = value.into();
        let selected = value == current;
        Self {
            value,
            label: label.into(),
            selected,
        }
    }
}

/// Options for a fixed enumeration. `blank` adds a leading empty choice for
/// optional fields.
pub fn choices(list: &[Choice], current: &str, blank: Option<&str>) -> Vec<SelectOption> {
    blank
        .map(|label| SelectOption::new("", label, current))
        .into_iter()
        .chain(
            list.iter()
                .map(|&(value, label)| SelectOption::new(value, label, current)),
        )
        .collect()
}

/// Options for a foreign-key select, led by a `0` placeholder.
pub fn ids(list: &[IdChoice], current: &str, placeholder: &str) -> Vec<SelectOption> {
    std::iter::once(SelectOption::new("0", placeholder, current))
        .chain(
            list.iter()
                .map(|(id, label)| SelectOption::new(id.to_string(), label.as_str(), current)),
        )
        .collect()
}

/// Options for the console's table picker.
pub fn tables(current: &str) -> Vec<SelectOption> {
    CatalogTable::ALL
        .iter()
        .map(|table| SelectOption::new(table.as_str(), table.label(), current))
        .collect()
}

#[cfg(test)]
mod tests {
    use museum_core::choices::{MUSEUM_TYPES, WEIGHT_UNITS};

    use super::*;

    #[test]
    fn marks_current_choice() {
        let options = choices(WEIGHT_UNITS, "kg", None);
        assert_eq!(options.len(), WEIGHT_UNITS.len());
        let selected: Vec<&str> = options
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.value.as_str())
            .collect();
        assert_eq!(selected, ["kg"]);
    }

    #[test]
    fn blank_option_leads() {
        let options = choices(MUSEUM_TYPES, "", Some("Select Type"));
        assert_eq!(options[0].value, "");
        assert_eq!(options[0].label, "Select Type");
        assert!(options[0].selected);
        assert_eq!(options.len(), MUSEUM_TYPES.len() + 1);
    }

    #[test]
    fn id_options_start_with_placeholder() {
        let list: Vec<IdChoice> = vec![(7, "Louvre".into()), (9, "Prado".into())];
        let options = ids(&list, "9", "Select Museum");
        assert_eq!(options[0].value, "0");
        assert!(!options[0].selected);
        assert_eq!(options[2].label, "Prado");
        assert!(options[2].selected);
    }

    #[test]
    fn table_options_cover_allow_list() {
        let options = tables("museums");
        let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, ["artists", "artworks", "museums", "collections"]);
        assert!(options[2].selected);
    }
}
