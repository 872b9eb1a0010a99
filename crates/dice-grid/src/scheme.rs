//! Named dice color schemes.
//!
//! A scheme pairs a die background color with a pip color. The set is
//! closed by design: physical dice come in a handful of finishes, and a
//! saved project must render identically when reopened, so schemes are
//! a constant table rather than a runtime registry.

/// An opaque 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb([r, g, b])
    }

    /// Channel bytes in `[r, g, b]` order.
    #[inline]
    pub fn channels(self) -> [u8; 3] {
        self.0
    }
}

/// A named (background, pip) color pair for rendering dice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    name: &'static str,
    background: Rgb,
    pip: Rgb,
}

/// The fixed registry of known schemes. "white" is the default.
const SCHEMES: [ColorScheme; 5] = [
    ColorScheme {
        name: "white",
        background: Rgb::new(0xe0, 0xe0, 0xe0),
        pip: Rgb::new(0x2c, 0x3e, 0x50),
    },
    ColorScheme {
        name: "black",
        background: Rgb::new(0x2c, 0x3e, 0x50),
        pip: Rgb::new(0xe0, 0xe0, 0xe0),
    },
    ColorScheme {
        name: "wood",
        background: Rgb::new(0xd2, 0xb4, 0x8c),
        pip: Rgb::new(0x2c, 0x3e, 0x50),
    },
    ColorScheme {
        name: "red",
        background: Rgb::new(0xe7, 0x4c, 0x3c),
        pip: Rgb::new(0xf9, 0xe9, 0xe8),
    },
    ColorScheme {
        name: "blue",
        background: Rgb::new(0x34, 0x98, 0xdb),
        pip: Rgb::new(0xea, 0xf4, 0xfc),
    },
];

impl ColorScheme {
    /// Look up a scheme by name, falling back to the default scheme for
    /// unknown names.
    ///
    /// The fallback (rather than an error) is deliberate: a project file
    /// written by a newer version with an extra scheme should still
    /// open and render, just in the default finish.
    pub fn from_name(name: &str) -> ColorScheme {
        SCHEMES
            .iter()
            .find(|s| s.name == name)
            .copied()
            .unwrap_or_else(ColorScheme::default)
    }

    /// Names of every known scheme, in registry order.
    pub fn names() -> impl Iterator<Item = &'static str> {
        SCHEMES.iter().map(|s| s.name)
    }

    /// The scheme's registry name.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Die body color.
    #[inline]
    pub fn background(&self) -> Rgb {
        self.background
    }

    /// Pip (dot) color.
    #[inline]
    pub fn pip(&self) -> Rgb {
        self.pip
    }
}

impl Default for ColorScheme {
    /// The default scheme ("white").
    fn default() -> Self {
        SCHEMES[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_names_resolve() {
        for name in ["white", "black", "wood", "red", "blue"] {
            let scheme = ColorScheme::from_name(name);
            assert_eq!(scheme.name(), name);
        }
    }

    #[test]
    fn test_unknown_name_falls_back_to_default() {
        let scheme = ColorScheme::from_name("purple");
        assert_eq!(scheme, ColorScheme::default());
        assert_eq!(scheme.name(), "white");
    }

    #[test]
    fn test_black_inverts_white() {
        let white = ColorScheme::from_name("white");
        let black = ColorScheme::from_name("black");
        assert_eq!(white.background(), black.pip());
        assert_eq!(white.pip(), black.background());
    }

    #[test]
    fn test_names_lists_all_schemes() {
        let names: Vec<_> = ColorScheme::names().collect();
        assert_eq!(names, vec!["white", "black", "wood", "red", "blue"]);
    }

    #[test]
    fn test_pip_contrasts_with_background() {
        // Every scheme must keep pips distinguishable from the body.
        for name in ColorScheme::names() {
            let scheme = ColorScheme::from_name(name);
            assert_ne!(
                scheme.background(),
                scheme.pip(),
                "scheme {} has identical background and pip colors",
                name
            );
        }
    }
}
