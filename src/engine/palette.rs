use crate::color::{self, Color, RandomSource};
use crate::error::{PaletteError, Result};

/// Number of colors produced by `regenerate`.
pub const DEFAULT_SIZE: usize = 5;
pub const MIN_COLORS: usize = 1;
pub const MAX_COLORS: usize = 8;

/// Ordered swatches, always between `MIN_COLORS` and `MAX_COLORS` long.
/// The first color is the primary one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    pub fn from_colors(colors: Vec<Color>) -> Result<Self> {
        if !(MIN_COLORS..=MAX_COLORS).contains(&colors.len()) {
            return Err(PaletteError::InvalidSize(colors.len()));
        }
        Ok(Self { colors })
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_full(&self) -> bool {
        self.colors.len() >= MAX_COLORS
    }

    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }
}

/// A fresh palette of `DEFAULT_SIZE` random colors.
pub fn regenerate(source: &mut dyn RandomSource) -> Palette {
    let colors = (0..DEFAULT_SIZE)
        .map(|_| color::generate_color(source))
        .collect();
    Palette { colors }
}

/// Appends one random color. A full palette comes back unchanged.
pub fn add_color(current: &Palette, source: &mut dyn RandomSource) -> Palette {
    if current.is_full() {
        return current.clone();
    }
    let mut colors = current.colors.clone();
    colors.push(color::generate_color(source));
    Palette { colors }
}

/// Removes the color at `index`. A single-color palette comes back
/// unchanged whatever the index; otherwise the index must be in bounds.
pub fn remove_color(current: &Palette, index: usize) -> Result<Palette> {
    if current.len() <= MIN_COLORS {
        return Ok(current.clone());
    }
    if index >= current.len() {
        return Err(PaletteError::InvalidArgument {
            what: "swatch",
            index,
            len: current.len(),
        });
    }
    let mut colors = current.colors.clone();
    colors.remove(index);
    Ok(Palette { colors })
}

pub fn load_palette(saved: &Palette) -> Palette {
    saved.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{SeededRandom, SequenceRandom};

    fn palette_of(values: &[u32]) -> Palette {
        Palette::from_colors(
            values
                .iter()
                .map(|v| Color::from_value(*v).expect("24-bit value"))
                .collect(),
        )
        .expect("valid size")
    }

    #[test]
    fn regenerate_yields_five_colors() {
        let mut source = SeededRandom::new(1);
        for _ in 0..20 {
            assert_eq!(regenerate(&mut source).len(), DEFAULT_SIZE);
        }
    }

    #[test]
    fn from_colors_enforces_bounds() {
        assert_eq!(
            Palette::from_colors(Vec::new()),
            Err(PaletteError::InvalidSize(0))
        );
        assert_eq!(
            Palette::from_colors(vec![Color::BLACK; 9]),
            Err(PaletteError::InvalidSize(9))
        );
        assert!(Palette::from_colors(vec![Color::BLACK; 8]).is_ok());
    }

    #[test]
    fn add_grows_until_full() {
        let mut source = SequenceRandom::new(&[0x111111, 0x222222, 0x333333, 0x444444]);
        let mut palette = palette_of(&[1, 2, 3, 4, 5]);
        for expected in 6..=MAX_COLORS {
            let next = add_color(&palette, &mut source);
            assert_eq!(next.len(), expected);
            assert_eq!(&next.colors()[..palette.len()], palette.colors());
            palette = next;
        }
        assert_eq!(palette.get(5), Color::from_value(0x111111));
        assert_eq!(add_color(&palette, &mut source), palette);
    }

    #[test]
    fn remove_preserves_order() {
        let palette = palette_of(&[10, 20, 30, 40]);
        let next = remove_color(&palette, 1).expect("in bounds");
        assert_eq!(next, palette_of(&[10, 30, 40]));
        let last = remove_color(&next, 2).expect("in bounds");
        assert_eq!(last, palette_of(&[10, 30]));
    }

    #[test]
    fn remove_keeps_the_last_color() {
        let palette = palette_of(&[0xabcdef]);
        assert_eq!(remove_color(&palette, 0), Ok(palette.clone()));
        assert_eq!(remove_color(&palette, 3), Ok(palette));
    }

    #[test]
    fn remove_rejects_out_of_bounds() {
        let palette = palette_of(&[1, 2]);
        assert_eq!(
            remove_color(&palette, 2),
            Err(PaletteError::InvalidArgument {
                what: "swatch",
                index: 2,
                len: 2
            })
        );
    }

    #[test]
    fn load_copies_the_saved_palette() {
        let saved = palette_of(&[7, 8, 9]);
        let loaded = load_palette(&saved);
        assert_eq!(loaded, saved);
    }
}
