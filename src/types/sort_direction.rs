use serde::Deserialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Read a sort-direction request value. Only `"d"` means descending;
    /// anything else, including the empty string, is ascending.
    pub fn from_param(s: &str) -> Self {
        match s.trim() {
            "d" => Self::Descending,
            _ => Self::Ascending,
        }
    }

    pub fn as_param(&self) -> &'static str {
        match self {
            Self::Ascending => "a",
            Self::Descending => "d",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// CSS class carried by the heading of the active sort column.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Ascending => "sorting asc",
            Self::Descending => "sorting desc",
        }
    }
}
