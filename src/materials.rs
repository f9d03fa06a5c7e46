//! Accepted-materials catalog. Static data, no computation.

#[derive(PartialEq)]
pub struct MaterialCategory {
    pub name: &'static str,
    pub items: &'static [&'static str],
}

#[derive(PartialEq)]
pub struct MaterialGroup {
    pub title: &'static str,
    pub categories: &'static [MaterialCategory],
}

pub const NON_FERROUS: MaterialGroup = MaterialGroup {
    title: "Non-Ferrous Metals",
    categories: &[
        MaterialCategory {
            name: "Copper & Copper Wire",
            items: &[
                "Copper pipe & fittings",
                "Bare copper wire",
                "Insulated copper wire",
                "Beryllium copper",
            ],
        },
        MaterialCategory {
            name: "Aluminum",
            items: &[
                "Aluminum soffit & facia",
                "Extruded aluminum",
                "Aluminum cable & insulated wire",
                "Aluminum pipe, sheet & plate",
                "Automotive aluminum materials",
            ],
        },
        MaterialCategory {
            name: "Stainless Steel",
            items: &[
                "Stainless pipe & structural",
                "Food manufacturing equipment",
                "Nickel bearing materials",
                "Machine shop turnings",
            ],
        },
        MaterialCategory {
            name: "Brass",
            items: &[
                "Yellow brass",
                "Red brass",
                "Plumbing brass",
                "Pop off values & sprinkler heads",
            ],
        },
        MaterialCategory {
            name: "Mixed Alloys",
            items: &["Tungsten & cobalt", "Chrome & nickel bearings", "Inconel"],
        },
        MaterialCategory {
            name: "Miscellaneous Materials",
            items: &[
                "Lead acid batteries",
                "Catalytic converters",
                "Electric motors, starters & alternators",
                "Circuit boards",
            ],
        },
    ],
};

pub const FERROUS: MaterialGroup = MaterialGroup {
    title: "Ferrous Metals",
    categories: &[
        MaterialCategory {
            name: "Oversized Heavy Melt Steel",
            items: &[
                "Farm equipment & machinery",
                "Structural steel",
                "Oilfield pipe and scrap metal",
                "Rebar",
                "Skeleton plate & all manufacturing scrap",
            ],
        },
        MaterialCategory {
            name: "Tin & Shred Feed",
            items: &[
                "Appliances (washers, dryers, stoves & refrigerators)",
                "Office furniture",
                "Vehicles & obsolete vehicle parts",
                "Household metal (bicycles, lawn mowers, metal furniture)",
            ],
        },
        MaterialCategory {
            name: "Other Steel",
            items: &["Cast rotors & drums", "Machine shop turnings", "Rail lengths"],
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_fully_populated() {
        for group in [&NON_FERROUS, &FERROUS] {
            assert!(!group.title.is_empty());
            assert!(!group.categories.is_empty());
            for category in group.categories {
                assert!(!category.name.is_empty());
                assert!(!category.items.is_empty(), "{} has no items", category.name);
            }
        }
    }

    #[test]
    fn category_names_are_unique_within_group() {
        for group in [&NON_FERROUS, &FERROUS] {
            let mut names: Vec<_> = group.categories.iter().map(|c| c.name).collect();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), group.categories.len());
        }
    }
}
