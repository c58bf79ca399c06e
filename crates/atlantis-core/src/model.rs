use serde::{Deserialize, Serialize};

/// A layer's color, indexing the processing-rate table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Blue,
}

/// A worker's processing specialization.
///
/// Every worker has exactly one flavor, fixed at initialization. The flavor
/// determines how many units of a layer's thickness the worker dissolves
/// per turn, via [`Flavor::rate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Flavor {
    General,
    Vector,
    Matrix,
}

impl Flavor {
    /// Units of thickness consumed per turn for the given color.
    pub fn rate(self, color: Color) -> u64 {
        match (self, color) {
            (Flavor::General, Color::Red) => 1,
            (Flavor::General, Color::Green) => 1,
            (Flavor::General, Color::Blue) => 1,
            (Flavor::Vector, Color::Red) => 1,
            (Flavor::Vector, Color::Green) => 5,
            (Flavor::Vector, Color::Blue) => 2,
            (Flavor::Matrix, Color::Red) => 1,
            (Flavor::Matrix, Color::Green) => 2,
            (Flavor::Matrix, Color::Blue) => 10,
        }
    }

    /// Turns needed to dissolve `thickness` units of `color` at this flavor.
    pub fn processing_cost(self, color: Color, thickness: u64) -> u64 {
        let rate = self.rate(color);
        thickness.div_ceil(rate)
    }
}

/// A single layer of a pearl: a color and a thickness to dissolve.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Layer {
    pub color: Color,
    pub thickness: u64,
}

/// A pearl as observed at the gatekeeper, with its full layer stack.
///
/// Layers are consumed strictly in order — index 0 is dissolved first.
#[derive(Debug, Clone)]
pub struct Pearl {
    pub id: u64,
    pub layers: Vec<Layer>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn processing_cost_rounds_up() {
        assert_eq!(Flavor::Vector.processing_cost(Color::Green, 13), 3);
        assert_eq!(Flavor::Vector.processing_cost(Color::Red, 12), 12);
        assert_eq!(Flavor::General.processing_cost(Color::Blue, 1), 1);
    }

    #[test]
    fn rate_table_matches_spec() {
        assert_eq!(Flavor::General.rate(Color::Red), 1);
        assert_eq!(Flavor::General.rate(Color::Green), 1);
        assert_eq!(Flavor::General.rate(Color::Blue), 1);
        assert_eq!(Flavor::Vector.rate(Color::Red), 1);
        assert_eq!(Flavor::Vector.rate(Color::Green), 5);
        assert_eq!(Flavor::Vector.rate(Color::Blue), 2);
        assert_eq!(Flavor::Matrix.rate(Color::Red), 1);
        assert_eq!(Flavor::Matrix.rate(Color::Green), 2);
        assert_eq!(Flavor::Matrix.rate(Color::Blue), 10);
    }
}
