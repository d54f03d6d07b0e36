use super::palette::Palette;

/// Session-only, append-only list of palette snapshots.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SavedPalettes {
    entries: Vec<Palette>,
}

impl SavedPalettes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Palette] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&Palette> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Appends a snapshot of `current`. No dedup, no limit.
pub fn save_palette(current: &Palette, history: &SavedPalettes) -> SavedPalettes {
    let mut entries = history.entries.clone();
    entries.push(current.clone());
    SavedPalettes { entries }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{Color, SequenceRandom};
    use crate::engine::palette::{add_color, remove_color};

    fn palette(values: &[u32]) -> Palette {
        Palette::from_colors(
            values
                .iter()
                .map(|v| Color::from_value(*v).expect("24-bit value"))
                .collect(),
        )
        .expect("valid size")
    }

    #[test]
    fn save_appends() {
        let history = SavedPalettes::new();
        let first = save_palette(&palette(&[1, 2]), &history);
        let second = save_palette(&palette(&[3]), &first);
        assert!(history.is_empty());
        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 2);
        assert_eq!(second.get(0), Some(&palette(&[1, 2])));
        assert_eq!(second.get(1), Some(&palette(&[3])));
    }

    #[test]
    fn duplicates_are_kept() {
        let current = palette(&[5, 6]);
        let history = save_palette(&current, &SavedPalettes::new());
        let history = save_palette(&current, &history);
        assert_eq!(history.entries(), &[current.clone(), current]);
    }

    #[test]
    fn later_edits_do_not_touch_snapshots() {
        let mut source = SequenceRandom::new(&[0xffffff]);
        let current = palette(&[1, 2, 3]);
        let history = save_palette(&current, &SavedPalettes::new());

        let current = add_color(&current, &mut source);
        let current = remove_color(&current, 0).expect("in bounds");
        assert_eq!(current, palette(&[2, 3, 0xffffff]));
        assert_eq!(history.get(0), Some(&palette(&[1, 2, 3])));
    }
}
