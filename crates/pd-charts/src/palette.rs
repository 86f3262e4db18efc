//! Stable categorical colors.

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Ten-color categorical scheme.
pub const CATEGORY10: [Rgb; 10] = [
    Rgb(0x1f, 0x77, 0xb4),
    Rgb(0xff, 0x7f, 0x0e),
    Rgb(0x2c, 0xa0, 0x2c),
    Rgb(0xd6, 0x27, 0x28),
    Rgb(0x94, 0x67, 0xbd),
    Rgb(0x8c, 0x56, 0x4b),
    Rgb(0xe3, 0x77, 0xc2),
    Rgb(0x7f, 0x7f, 0x7f),
    Rgb(0xbc, 0xbd, 0x22),
    Rgb(0x17, 0xbe, 0xcf),
];

/// Assigns colors to labels in order of first appearance, cycling the scheme.
///
/// A label keeps its color for as long as the palette lives.
#[derive(Debug, Clone, Default)]
pub struct CategoricalPalette {
    assigned: HashMap<String, usize>,
}

impl CategoricalPalette {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(&mut self, label: &str) -> Rgb {
        let next = self.assigned.len();
        let slot = *self.assigned.entry(label.to_string()).or_insert(next);
        CATEGORY10[slot % CATEGORY10.len()]
    }

    pub fn reset(&mut self) {
        self.assigned.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_follow_first_appearance() {
        let mut palette = CategoricalPalette::new();
        assert_eq!(palette.color("Station 1"), CATEGORY10[0]);
        assert_eq!(palette.color("Station 2"), CATEGORY10[1]);
        assert_eq!(palette.color("Station 1"), CATEGORY10[0]);
        assert_eq!(palette.color("Station 3"), CATEGORY10[2]);
    }

    #[test]
    fn scheme_cycles() {
        let mut palette = CategoricalPalette::new();
        for i in 0..10 {
            palette.color(&format!("s{}", i));
        }
        assert_eq!(palette.color("s10"), CATEGORY10[0]);
    }

    #[test]
    fn reset_forgets_assignments() {
        let mut palette = CategoricalPalette::new();
        palette.color("a");
        palette.color("b");
        palette.reset();
        assert_eq!(palette.color("b"), CATEGORY10[0]);
    }
}
