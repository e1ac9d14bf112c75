//! The fixed architecture summary cards shown in the landing grid

/// A static descriptive tile: subheading, emphasized value, body text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub title: &'static str,
    pub value: &'static str,
    pub desc: &'static str,
}

/// Display order is fixed; nothing is ever added or removed at runtime.
pub const CARDS: [Card; 4] = [
    Card {
        title: "Frontend",
        value: "React + Vite",
        desc: "Coordinator dashboard foundation with module navigation.",
    },
    Card {
        title: "Backend",
        value: "FastAPI",
        desc: "Tenant-aware API endpoints for users, scopes, and generation.",
    },
    Card {
        title: "Database",
        value: "PostgreSQL Schema",
        desc: "Tenant, RBAC, scope, and timetable entities included.",
    },
    Card {
        title: "Testing",
        value: "Pytest",
        desc: "API health, user lifecycle, and timetable generation tests.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_cards_in_fixed_order() {
        let titles: Vec<&str> = CARDS.iter().map(|c| c.title).collect();
        assert_eq!(titles, ["Frontend", "Backend", "Database", "Testing"]);
    }

    #[test]
    fn card_text_is_exact() {
        assert_eq!(CARDS[0].value, "React + Vite");
        assert_eq!(
            CARDS[0].desc,
            "Coordinator dashboard foundation with module navigation."
        );
        assert_eq!(CARDS[1].value, "FastAPI");
        assert_eq!(
            CARDS[1].desc,
            "Tenant-aware API endpoints for users, scopes, and generation."
        );
        assert_eq!(CARDS[2].value, "PostgreSQL Schema");
        assert_eq!(
            CARDS[2].desc,
            "Tenant, RBAC, scope, and timetable entities included."
        );
        assert_eq!(CARDS[3].value, "Pytest");
        assert_eq!(
            CARDS[3].desc,
            "API health, user lifecycle, and timetable generation tests."
        );
    }
}
