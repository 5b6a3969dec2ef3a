//! Colour palettes matching plotly's built-in sequences.

/// `plotly.colors.qualitative.Pastel`.
pub const PASTEL: [&str; 11] = [
    "rgb(102, 197, 204)",
    "rgb(246, 207, 113)",
    "rgb(248, 156, 116)",
    "rgb(220, 176, 242)",
    "rgb(135, 197, 95)",
    "rgb(158, 185, 243)",
    "rgb(254, 136, 177)",
    "rgb(201, 219, 116)",
    "rgb(139, 224, 164)",
    "rgb(180, 151, 231)",
    "rgb(179, 179, 179)",
];

/// `plotly.colors.qualitative.Plotly`, the default discrete sequence.
pub const PLOTLY: [&str; 10] = [
    "#636EFA", "#EF553B", "#00CC96", "#AB63FA", "#FFA15A", "#19D3F3", "#FF6692", "#B6E880",
    "#FF97FF", "#FECB52",
];

/// Colour for inner hierarchy nodes whose children carry different labels.
pub const MIXED: &str = "#EEEEEE";

/// ColorBrewer `Blues` as plotly.py expands it: pale at 0, dark at 1.
///
/// plotly.js ships its own `"Blues"` which runs the other way, so the
/// scale is always spelled out.
pub const BLUES: [(f64, &str); 9] = [
    (0.0, "rgb(247,251,255)"),
    (0.125, "rgb(222,235,247)"),
    (0.25, "rgb(198,219,239)"),
    (0.375, "rgb(158,202,225)"),
    (0.5, "rgb(107,174,214)"),
    (0.625, "rgb(66,146,198)"),
    (0.75, "rgb(33,113,181)"),
    (0.875, "rgb(8,81,156)"),
    (1.0, "rgb(8,48,107)"),
];

/// Assigns palette entries to labels in first-seen order, cycling when
/// labels outnumber colours.
#[derive(Debug, Clone)]
pub struct DiscreteColors<'a> {
    palette: &'a [&'a str],
    seen: Vec<String>,
}

impl<'a> DiscreteColors<'a> {
    pub fn new(palette: &'a [&'a str]) -> Self {
        Self {
            palette,
            seen: Vec::new(),
        }
    }

    /// Colour for `label`, registering it if new.
    pub fn color(&mut self, label: &str) -> &'a str {
        let idx = match self.seen.iter().position(|l| l == label) {
            Some(idx) => idx,
            None => {
                self.seen.push(label.to_string());
                self.seen.len() - 1
            }
        };
        self.palette[idx % self.palette.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_seen_order() {
        let mut colors = DiscreteColors::new(&PASTEL);
        assert_eq!(colors.color("b"), PASTEL[0]);
        assert_eq!(colors.color("a"), PASTEL[1]);
        assert_eq!(colors.color("b"), PASTEL[0]);
    }

    #[test]
    fn test_blues_runs_pale_to_dark() {
        assert_eq!(BLUES[0], (0.0, "rgb(247,251,255)"));
        assert_eq!(BLUES[BLUES.len() - 1], (1.0, "rgb(8,48,107)"));
        assert!(BLUES.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn test_palette_cycles() {
        let mut colors = DiscreteColors::new(&PLOTLY);
        for i in 0..PLOTLY.len() {
            colors.color(&i.to_string());
        }
        assert_eq!(colors.color("overflow"), PLOTLY[0]);
    }
}
