/// A known listing category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub id: &'static str,
    pub label: &'static str,
    pub color: &'static str,
}

pub const CATEGORIES: [Category; 5] = [
    Category { id: "tools", label: "Nářadí", color: "#6366f1" },
    Category { id: "electronics", label: "Elektronika", color: "#f59e0b" },
    Category { id: "outdoor", label: "Outdoor", color: "#10b981" },
    Category { id: "party", label: "Párty", color: "#ec4899" },
    Category { id: "garden", label: "Zahrada", color: "#84cc16" },
];

/// Colour used for tags outside the known set
pub const FALLBACK_COLOR: &str = "#4f46e5";

/// How a category tag is shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDisplay {
    pub label: String,
    pub color: &'static str,
}

pub fn find_category(tag: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.id == tag)
}

pub fn is_known_category(tag: &str) -> bool {
    find_category(tag).is_some()
}

/// Label and colour for a tag. Unknown tags show the raw tag in the fallback colour.
pub fn category_display(tag: &str) -> CategoryDisplay {
    match find_category(tag) {
        Some(category) => CategoryDisplay {
            label: category.label.to_string(),
            color: category.color,
        },
        None => CategoryDisplay {
            label: tag.to_string(),
            color: FALLBACK_COLOR,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tag_uses_table_entry() {
        let display = category_display("garden");
        assert_eq!(display.label, "Zahrada");
        assert_eq!(display.color, "#84cc16");
        assert!(is_known_category("party"));
    }

    #[test]
    fn unknown_tag_degrades_to_fallback() {
        let display = category_display("boats");
        assert_eq!(display.label, "boats");
        assert_eq!(display.color, FALLBACK_COLOR);
        assert!(!is_known_category("boats"));
    }
}
