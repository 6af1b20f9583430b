//! Heat-map Cell Shading
//!
//! Pure shading policy for count tables: the survey report's mesh table
//! gets a proportional two-tone gradient, the live tally grid a stepped
//! orange scale. Both are reproducible from `(count, max)` alone.

/// Baseline gradient when the whole table is zero
const BASELINE_GRADIENT: &str =
    "linear-gradient(135deg, rgba(37,99,235,0.08) 0%, rgba(37,99,235,0.12) 100%)";

/// Gradient alphas for a mesh cell: `(primary, secondary)`.
///
/// Primary is clamped to `[0.12, 0.85]`, the secondary stop sits slightly
/// above it for a subtle two-tone sweep.
pub fn mesh_alphas(count: u32, max: u32) -> (f64, f64) {
    let ratio = count as f64 / max as f64;
    let primary = (0.12 + ratio * 0.7).min(0.85);
    let secondary = (primary + 0.05).min(0.9);
    (primary, secondary)
}

/// Inline `background-image` style for a mesh cell
pub fn mesh_cell_style(count: u32, max: u32) -> String {
    if max == 0 {
        return format!("background-image: {BASELINE_GRADIENT}");
    }

    let (primary, secondary) = mesh_alphas(count, max);
    format!(
        "background-image: linear-gradient(135deg, rgba(37,99,235,{primary}) 0%, rgba(37,99,235,{secondary}) 100%)"
    )
}

/// Text class for a mesh cell; flips to light text once the cell is dark
/// enough (ratio above 0.6)
pub fn mesh_text_class(count: u32, max: u32) -> &'static str {
    if max == 0 {
        return "text-neutral-700";
    }

    if count as f64 / max as f64 > 0.6 {
        "text-white"
    } else {
        "text-neutral-800"
    }
}

/// Stepped appearance of a live tally cell.
///
/// Muted while the timer is stopped, then deepening orange steps as the
/// count climbs.
pub fn tally_cell_class(count: u32, running: bool) -> &'static str {
    if !running {
        return "bg-orange-100 text-orange-300";
    }
    if count >= 15 {
        "bg-orange-600 text-white"
    } else if count >= 10 {
        "bg-orange-500 text-white"
    } else if count >= 5 {
        "bg-orange-400 text-white"
    } else if count >= 1 {
        "bg-orange-300 text-orange-900"
    } else {
        "bg-orange-200 text-orange-900"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_alpha_stays_in_range() {
        for max in 1..=40u32 {
            for count in 0..=max {
                let (primary, secondary) = mesh_alphas(count, max);
                assert!(primary >= 0.12, "primary {primary} below floor");
                assert!(primary <= 0.85, "primary {primary} above ceiling");
                assert!(secondary <= 0.9);
                assert!(secondary >= primary);
            }
        }
    }

    #[test]
    fn test_primary_alpha_monotonic_in_count() {
        let max = 87;
        let mut previous = 0.0;
        for count in 0..=max {
            let (primary, _) = mesh_alphas(count, max);
            assert!(primary >= previous);
            previous = primary;
        }
    }

    #[test]
    fn test_text_contrast_flips_above_sixty_percent() {
        // 6/10 is exactly 0.6 and must stay dark; 7/10 flips
        assert_eq!(mesh_text_class(6, 10), "text-neutral-800");
        assert_eq!(mesh_text_class(7, 10), "text-white");
        assert_eq!(mesh_text_class(10, 10), "text-white");
        assert_eq!(mesh_text_class(0, 10), "text-neutral-800");
    }

    #[test]
    fn test_zero_max_gets_identical_baseline() {
        let baseline = mesh_cell_style(0, 0);
        for count in [0, 1, 12, 87] {
            assert_eq!(mesh_cell_style(count, 0), baseline);
            assert_eq!(mesh_text_class(count, 0), "text-neutral-700");
        }
        assert!(baseline.contains("0.08"));
    }

    #[test]
    fn test_tally_steps() {
        assert_eq!(tally_cell_class(20, false), "bg-orange-100 text-orange-300");
        assert_eq!(tally_cell_class(0, true), "bg-orange-200 text-orange-900");
        assert_eq!(tally_cell_class(1, true), "bg-orange-300 text-orange-900");
        assert_eq!(tally_cell_class(5, true), "bg-orange-400 text-white");
        assert_eq!(tally_cell_class(10, true), "bg-orange-500 text-white");
        assert_eq!(tally_cell_class(15, true), "bg-orange-600 text-white");
    }
}
