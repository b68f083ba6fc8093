use super::BoundaryPolicy;
use super::engine::RunConfig;

/// A named, ready-to-run generation layout.
#[derive(Clone)]
pub struct Preset {
    pub name: &'static str,
    pub description: &'static str,
    pub config: RunConfig,
}

/// Expand a run-length seed description into a boolean row.
fn runs(segments: &[(bool, usize)]) -> Vec<bool> {
    let mut row = Vec::with_capacity(segments.iter().map(|&(_, n)| n).sum());
    for &(bit, count) in segments {
        row.extend(std::iter::repeat_n(bit, count));
    }
    row
}

/// Carpet layout library.
///
/// Banded rule-122 seeds sized for a hallway carpet print; the larger two
/// were generated in two continuation passes to bound memory.
pub mod presets {
    use super::*;

    const O: bool = false;
    const I: bool = true;

    /// Full-width hallway banding, first pass of the two-pass generation
    pub fn hallway_bands() -> Preset {
        Preset {
            name: "Hallway Bands",
            description: "Rule 122, 2400 wide, symmetric bands",
            config: RunConfig {
                rule_num: 122,
                rows: 7201,
                cols: 2400,
                starting_state: runs(&[
                    (I, 199),
                    (O, 400),
                    (I, 401),
                    (I, 200),
                    (I, 201),
                    (O, 400),
                    (I, 199),
                ]),
                prior_state: None,
                boundary: BoundaryPolicy::Wrap,
            },
        }
    }

    /// Two-band layout sized for a 300 dpi print run
    pub fn carpet_300dpi() -> Preset {
        Preset {
            name: "Carpet 300dpi",
            description: "Rule 122, 359 wide, two bands",
            config: RunConfig {
                rule_num: 122,
                rows: 1080,
                cols: 359,
                starting_state: runs(&[(O, 50), (I, 100), (O, 59), (I, 100), (O, 50)]),
                prior_state: None,
                boundary: BoundaryPolicy::Wrap,
            },
        }
    }

    /// Four-band layout sized for a 72 dpi print run
    pub fn carpet_72dpi() -> Preset {
        Preset {
            name: "Carpet 72dpi",
            description: "Rule 122, 89 wide, four bands",
            config: RunConfig {
                rule_num: 122,
                rows: 260,
                cols: 89,
                starting_state: runs(&[
                    (O, 10),
                    (I, 11),
                    (O, 10),
                    (I, 10),
                    (O, 7),
                    (I, 10),
                    (O, 10),
                    (I, 11),
                    (O, 10),
                ]),
                prior_state: None,
                boundary: BoundaryPolicy::Wrap,
            },
        }
    }

    /// All presets, largest first
    pub fn all_presets() -> Vec<Preset> {
        vec![hallway_bands(), carpet_300dpi(), carpet_72dpi()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runs_expansion() {
        assert_eq!(
            runs(&[(true, 2), (false, 1), (true, 1)]),
            vec![true, true, false, true]
        );
    }

    #[test]
    fn test_preset_seeds_fit_their_width() {
        for preset in presets::all_presets() {
            assert!(
                preset.config.starting_state.len() <= preset.config.cols,
                "{} seed wider than its grid",
                preset.name
            );
            assert_eq!(preset.config.rule_num, 122);
        }
    }

    #[test]
    fn test_small_preset_runs() {
        let preset = presets::carpet_72dpi();
        let grid = preset.config.run().unwrap();
        assert_eq!(grid.dimensions(), (260, 89));
    }

    #[test]
    fn test_preset_names_are_unique() {
        let names: Vec<_> = presets::all_presets().iter().map(|p| p.name).collect();
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(names.len(), unique.len());
    }
}
