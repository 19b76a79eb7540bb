use serde::{Deserialize, Serialize};

/// An 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_channels() {
        let color = Rgb::new(12, 200, 0);
        assert_eq!(color.red, 12);
        assert_eq!(color.green, 200);
        assert_eq!(color.blue, 0);
    }

    #[test]
    fn black_is_all_zero() {
        assert_eq!(Rgb::BLACK, Rgb::new(0, 0, 0));
    }

    #[test]
    fn serialization_roundtrip() {
        let original = Rgb::new(255, 255, 100);

        let json = serde_json::to_string(&original).unwrap();
        let restored: Rgb = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, original);
    }
}
