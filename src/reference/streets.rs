//! Street cog distributions per neighborhood.
//!
//! Percentages were confirmed in-game and do not change at runtime.

use serde::Serialize;
use strum_macros::{Display, EnumIter};

/// The four cog corporate ladders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize)]
pub enum CogFaction {
    Bossbot,
    Lawbot,
    Cashbot,
    Sellbot,
}

/// Share of each faction among the cogs walking a street.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CogPercentages {
    pub bossbot: u8,
    pub lawbot: u8,
    pub cashbot: u8,
    pub sellbot: u8,
}

impl CogPercentages {
    const fn new(bossbot: u8, lawbot: u8, cashbot: u8, sellbot: u8) -> Self {
        CogPercentages {
            bossbot,
            lawbot,
            cashbot,
            sellbot,
        }
    }

    pub fn get(&self, faction: CogFaction) -> u8 {
        match faction {
            CogFaction::Bossbot => self.bossbot,
            CogFaction::Lawbot => self.lawbot,
            CogFaction::Cashbot => self.cashbot,
            CogFaction::Sellbot => self.sellbot,
        }
    }

    /// Faction with the highest share; ties go to the earlier ladder.
    pub fn dominant(&self) -> CogFaction {
        use strum::IntoEnumIterator;

        CogFaction::iter()
            .fold((CogFaction::Bossbot, 0), |best, faction| {
                let share = self.get(faction);
                if share > best.1 {
                    (faction, share)
                } else {
                    best
                }
            })
            .0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Street {
    pub name: &'static str,
    pub cogs: CogPercentages,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Neighborhood {
    pub name: &'static str,
    pub streets: &'static [Street],
}

const fn street(name: &'static str, bossbot: u8, lawbot: u8, cashbot: u8, sellbot: u8) -> Street {
    Street {
        name,
        cogs: CogPercentages::new(bossbot, lawbot, cashbot, sellbot),
    }
}

/// All playgrounds with streets, in the order the game lists them.
pub const NEIGHBORHOODS: &[Neighborhood] = &[
    Neighborhood {
        name: "Toontown Central",
        streets: &[
            street("Punchline Place", 10, 10, 40, 40),
            street("Silly Street", 25, 25, 25, 25),
            street("Loopy Lane", 10, 70, 10, 10),
        ],
    },
    Neighborhood {
        name: "Donald's Dock",
        streets: &[
            street("Barnacle Boulevard", 90, 10, 0, 0),
            street("Seaweed Street", 0, 0, 90, 10),
            street("Lighthouse Lane", 40, 40, 10, 10),
        ],
    },
    Neighborhood {
        name: "Daisy Gardens",
        streets: &[
            street("Elm Street", 0, 20, 10, 70),
            street("Maple Street", 10, 70, 0, 20),
            street("Oak Street", 5, 5, 5, 85),
        ],
    },
    Neighborhood {
        name: "Minnie's Melodyland",
        streets: &[
            street("Alto Avenue", 0, 0, 50, 50),
            street("Baritone Boulevard", 0, 0, 90, 10),
            street("Tenor Terrace", 50, 50, 0, 0),
        ],
    },
    Neighborhood {
        name: "The Brrrgh",
        streets: &[
            street("Walrus Way", 90, 10, 0, 0),
            street("Sleet Street", 10, 20, 30, 40),
            street("Polar Place", 5, 85, 5, 5),
        ],
    },
    Neighborhood {
        name: "Donald's Dreamland",
        streets: &[
            street("Lullaby Lane", 25, 25, 25, 25),
            street("Pajama Place", 5, 5, 85, 5),
        ],
    },
];

/// Other spellings accepted by [`find_neighborhood`], paired with the listed name.
const NEIGHBORHOOD_ALIASES: &[(&str, &str)] = &[("The Brrgh", "The Brrrgh")];

/// Case-insensitive neighborhood lookup, also accepting known alternate spellings.
pub fn find_neighborhood(name: &str) -> Option<&'static Neighborhood> {
    let name = name.trim();
    let name = NEIGHBORHOOD_ALIASES
        .iter()
        .find(|(alias, _)| alias.eq_ignore_ascii_case(name))
        .map_or(name, |&(_, listed)| listed);
    NEIGHBORHOODS
        .iter()
        .find(|n| n.name.eq_ignore_ascii_case(name))
}

/// Looks up a street by exact name, returning it with its neighborhood.
pub fn find_street(name: &str) -> Option<(&'static Neighborhood, &'static Street)> {
    NEIGHBORHOODS.iter().find_map(|neighborhood| {
        neighborhood
            .streets
            .iter()
            .find(|s| s.name == name)
            .map(|s| (neighborhood, s))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_neighborhood_accepts_alternate_spelling() {
        let n = find_neighborhood("the brrgh").expect("alias should match");
        assert_eq!(n.name, "The Brrrgh");
        assert!(std::ptr::eq(n, find_neighborhood("The Brrrgh").expect("listed name")));
    }

    #[test]
    fn test_percentages_sum_to_100() {
        for neighborhood in NEIGHBORHOODS {
            for s in neighborhood.streets {
                let c = s.cogs;
                let total = c.bossbot as u32 + c.lawbot as u32 + c.cashbot as u32 + c.sellbot as u32;
                assert_eq!(total, 100, "{} in {}", s.name, neighborhood.name);
            }
        }
    }

    #[test]
    fn test_find_street() {
        let (neighborhood, s) = find_street("Oak Street").expect("Oak Street exists");
        assert_eq!(neighborhood.name, "Daisy Gardens");
        assert_eq!(s.cogs.sellbot, 85);
        assert!(find_street("Nowhere Lane").is_none());
    }

    #[test]
    fn test_find_neighborhood_case_insensitive() {
        let n = find_neighborhood("donald's dreamland").expect("should match");
        assert_eq!(n.streets.len(), 2);
        assert!(find_neighborhood("Goofy Speedway").is_none());
    }

    #[test]
    fn test_dominant_faction() {
        let (_, walrus) = find_street("Walrus Way").expect("exists");
        assert_eq!(walrus.cogs.dominant(), CogFaction::Bossbot);
        let (_, polar) = find_street("Polar Place").expect("exists");
        assert_eq!(polar.cogs.dominant(), CogFaction::Lawbot);
        let (_, pajama) = find_street("Pajama Place").expect("exists");
        assert_eq!(pajama.cogs.dominant(), CogFaction::Cashbot);
        // Even split resolves to the first ladder
        let (_, silly) = find_street("Silly Street").expect("exists");
        assert_eq!(silly.cogs.dominant(), CogFaction::Bossbot);
    }

    #[test]
    fn test_every_field_office_zone_is_a_known_street() {
        for zone in super::super::zones::known_zone_ids() {
            let name = super::super::zones::zone_display_name(zone);
            assert!(find_street(name).is_some(), "{} ({})", name, zone);
        }
    }
}
