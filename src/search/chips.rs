use crate::model::{BlogPost, ProductRecord};

/// Label of the chip that clears the category filter.
pub const ALL_CHIP: &str = "all";

/// Records that can be matched against a chip's category.
pub trait Categorized {
    /// Case-insensitive exact match against one of the record's categories.
    fn in_category(&self, category: &str) -> bool;
}

impl Categorized for ProductRecord {
    fn in_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }
}

impl Categorized for BlogPost {
    fn in_category(&self, category: &str) -> bool {
        let wanted = category.to_lowercase();
        self.categories.iter().any(|c| c.to_lowercase() == wanted)
    }
}

/// Which category chip is active. Exactly one chip is active at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ChipSelection {
    #[default]
    All,
    Category(String),
}

impl ChipSelection {
    /// Transition for a chip activation; the "all" chip clears the filter.
    pub fn select(&mut self, chip: &str) {
        let chip = chip.trim();
        *self = if chip.is_empty() || chip.eq_ignore_ascii_case(ALL_CHIP) {
            ChipSelection::All
        } else {
            ChipSelection::Category(chip.to_lowercase())
        };
    }

    pub fn active(&self) -> &str {
        match self {
            ChipSelection::All => ALL_CHIP,
            ChipSelection::Category(c) => c.as_str(),
        }
    }

    /// Records visible under the current selection, in input order.
    pub fn apply<T>(&self, records: &[T]) -> Vec<T>
    where
        T: Categorized + Clone,
    {
        match self {
            ChipSelection::All => records.to_vec(),
            ChipSelection::Category(c) => records
                .iter()
                .filter(|r| r.in_category(c))
                .cloned()
                .collect(),
        }
    }
}
