/// Celestial body data — sizes, orbital layout, rotation rates, and the
/// display facts the info panel shows.
///
/// Radii and orbital distances are scene units tuned for readability, not to
/// scale (a to-scale sun would swallow the inner planets).

/// Body index constants into [`CATALOG`].
pub const SUN: usize = 0;
pub const MERCURY: usize = 1;
pub const VENUS: usize = 2;
pub const EARTH: usize = 3;
pub const MARS: usize = 4;
pub const JUPITER: usize = 5;
pub const SATURN: usize = 6;
pub const URANUS: usize = 7;
pub const NEPTUNE: usize = 8;
pub const BODY_COUNT: usize = 9;

/// Axial spin applied to every body, radians per tick.
/// Uniform across bodies and intentionally not physical.
pub const SPIN_RATE: f32 = 0.01;

/// Broad classification of a body, used for the panel's "type" line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Star,
    Terrestrial,
    GasGiant,
    IceGiant,
}

impl BodyKind {
    pub fn label(self) -> &'static str {
        match self {
            BodyKind::Star => "Star",
            BodyKind::Terrestrial => "Terrestrial Planet",
            BodyKind::GasGiant => "Gas Giant",
            BodyKind::IceGiant => "Ice Giant",
        }
    }
}

/// Display facts for one body. All strings are fixed at compile time.
#[derive(Debug, Clone, Copy)]
pub struct BodyInfo {
    pub name: &'static str,
    pub diameter: &'static str,
    pub distance: &'static str,
    pub day_length: &'static str,
    pub year_length: &'static str,
    pub description: &'static str,
}

/// One immutable catalog entry. Scene instances reference these by index.
#[derive(Debug, Clone, Copy)]
pub struct BodyDescriptor {
    /// Lookup key, also used to resolve the texture manifest (e.g. "earth").
    pub name: &'static str,
    pub kind: BodyKind,
    /// Sphere radius in scene units.
    pub radius: f32,
    /// Distance from the sun along the pivot arm, scene units.
    pub orbit_radius: f32,
    /// Pivot rotation per tick, radians.
    pub orbit_rate: f32,
    /// Texture file the host page's loader resolves for this body.
    pub texture: &'static str,
    pub info: BodyInfo,
}

pub static CATALOG: [BodyDescriptor; BODY_COUNT] = [
    BodyDescriptor {
        name: "sun",
        kind: BodyKind::Star,
        radius: 25.0,
        orbit_radius: 0.0,
        orbit_rate: 0.01,
        texture: "img/sun.jpg",
        info: BodyInfo {
            name: "The Sun",
            diameter: "1,391,000 km",
            distance: "0 AU (Center of Solar System)",
            day_length: "25-35 Earth days (varies by latitude)",
            year_length: "N/A",
            description: "The Sun is the star at the center of our Solar System. It's a nearly perfect sphere of hot plasma, with internal convective motion that generates a magnetic field.",
        },
    },
    BodyDescriptor {
        name: "mercury",
        kind: BodyKind::Terrestrial,
        radius: 2.0,
        orbit_radius: 35.0,
        orbit_rate: 0.002,
        texture: "img/mercury.jpg",
        info: BodyInfo {
            name: "Mercury",
            diameter: "4,880 km",
            distance: "0.39 AU from Sun",
            day_length: "176 Earth days",
            year_length: "88 Earth days",
            description: "Mercury is the smallest and innermost planet in the Solar System. It has a cratered surface similar to the Moon and has no atmosphere to retain heat.",
        },
    },
    BodyDescriptor {
        name: "venus",
        kind: BodyKind::Terrestrial,
        radius: 2.0,
        orbit_radius: 40.0,
        orbit_rate: 0.003,
        texture: "img/venus.jpg",
        info: BodyInfo {
            name: "Venus",
            diameter: "12,104 km",
            distance: "0.72 AU from Sun",
            day_length: "243 Earth days",
            year_length: "225 Earth days",
            description: "Venus is the second planet from the Sun and is Earth's closest planetary neighbor. It has a thick atmosphere that traps heat, making it the hottest planet in our solar system.",
        },
    },
    BodyDescriptor {
        name: "earth",
        kind: BodyKind::Terrestrial,
        radius: 3.0,
        orbit_radius: 50.0,
        orbit_rate: 0.0025,
        texture: "img/earth.jpg",
        info: BodyInfo {
            name: "Earth",
            diameter: "12,756 km",
            distance: "1 AU from Sun",
            day_length: "24 hours",
            year_length: "365.25 days",
            description: "Earth is the third planet from the Sun and the only astronomical object known to harbor life. It has one natural satellite, the Moon.",
        },
    },
    BodyDescriptor {
        name: "mars",
        kind: BodyKind::Terrestrial,
        radius: 3.5,
        orbit_radius: 60.0,
        orbit_rate: 0.0022,
        texture: "img/mars.jpg",
        info: BodyInfo {
            name: "Mars",
            diameter: "6,792 km",
            distance: "1.52 AU from Sun",
            day_length: "24.6 hours",
            year_length: "687 Earth days",
            description: "Mars is the fourth planet from the Sun. Known as the Red Planet due to iron oxide on its surface, Mars has two small moons and features valleys, deserts, and polar ice caps.",
        },
    },
    BodyDescriptor {
        name: "jupiter",
        kind: BodyKind::GasGiant,
        radius: 10.0,
        orbit_radius: 80.0,
        orbit_rate: 0.0005,
        texture: "img/jupiter.jpg",
        info: BodyInfo {
            name: "Jupiter",
            diameter: "139,820 km",
            distance: "5.2 AU from Sun",
            day_length: "9.93 hours",
            year_length: "11.86 Earth years",
            description: "Jupiter is the largest planet in our Solar System. It's a gas giant primarily composed of hydrogen and helium, with a strong magnetic field and dozens of moons.",
        },
    },
    BodyDescriptor {
        name: "saturn",
        kind: BodyKind::GasGiant,
        radius: 7.0,
        orbit_radius: 110.0,
        orbit_rate: 0.0008,
        texture: "img/saturn.jpg",
        info: BodyInfo {
            name: "Saturn",
            diameter: "116,460 km",
            distance: "9.5 AU from Sun",
            day_length: "10.7 hours",
            year_length: "29.5 Earth years",
            description: "Saturn is the sixth planet from the Sun and is famous for its spectacular ring system. Like Jupiter, it's a gas giant with many moons.",
        },
    },
    BodyDescriptor {
        name: "uranus",
        kind: BodyKind::IceGiant,
        radius: 4.0,
        orbit_radius: 125.0,
        orbit_rate: 0.0007,
        texture: "img/uranus.jpg",
        info: BodyInfo {
            name: "Uranus",
            diameter: "50,724 km",
            distance: "19.8 AU from Sun",
            day_length: "17.2 hours",
            year_length: "84 Earth years",
            description: "Uranus is the seventh planet from the Sun. It's an ice giant that rotates on its side, giving it extreme seasonal variations.",
        },
    },
    BodyDescriptor {
        name: "neptune",
        kind: BodyKind::IceGiant,
        radius: 3.0,
        orbit_radius: 135.0,
        orbit_rate: 0.0005,
        texture: "img/neptune.jpg",
        info: BodyInfo {
            name: "Neptune",
            diameter: "49,244 km",
            distance: "30.1 AU from Sun",
            day_length: "16.1 hours",
            year_length: "165 Earth years",
            description: "Neptune is the eighth and farthest known planet from the Sun. It's an ice giant with a dynamic atmosphere featuring visible weather patterns.",
        },
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_complete() {
        assert_eq!(CATALOG.len(), BODY_COUNT);
        assert_eq!(CATALOG[SUN].name, "sun");
        assert_eq!(CATALOG[EARTH].name, "earth");
        assert_eq!(CATALOG[NEPTUNE].name, "neptune");
    }

    #[test]
    fn only_the_sun_sits_at_the_center() {
        assert_eq!(CATALOG[SUN].orbit_radius, 0.0);
        for body in &CATALOG[MERCURY..] {
            assert!(body.orbit_radius > 0.0, "{} has no orbit", body.name);
        }
    }

    #[test]
    fn orbits_widen_outward() {
        for pair in CATALOG[MERCURY..].windows(2) {
            assert!(
                pair[0].orbit_radius < pair[1].orbit_radius,
                "{} should orbit inside {}",
                pair[0].name,
                pair[1].name
            );
        }
    }

    #[test]
    fn kind_labels_match_panel_copy() {
        assert_eq!(CATALOG[SUN].kind.label(), "Star");
        assert_eq!(CATALOG[EARTH].kind.label(), "Terrestrial Planet");
        assert_eq!(CATALOG[SATURN].kind.label(), "Gas Giant");
        assert_eq!(CATALOG[NEPTUNE].kind.label(), "Ice Giant");
    }
}
