//! Proportional bar widths.
//!
//! Each phase bar is as wide as its share of the longest phase, so a 16 hour
//! phase gets twice the bar of an 8 hour one.

use crate::progress::Progress;

/// Splits available width between bars in proportion to phase length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidthAllocator {
    /// Width taken by everything beside a bar (label column, gaps, borders).
    chrome_width: u16,
}

impl WidthAllocator {
    pub fn new(chrome_width: u16) -> Self {
        Self { chrome_width }
    }

    /// Measures the chrome once from the fixed parts of a phase row: the
    /// label column and the horizontal margin around the bars.
    pub fn measure(label_width: u16, margin: u16) -> Self {
        Self::new(label_width.saturating_add(margin))
    }

    pub fn chrome_width(&self) -> u16 {
        self.chrome_width
    }

    /// Returns one width per progress. The longest phase gets all the width
    /// left after chrome; the rest are scaled down from it and floored.
    pub fn allocate_widths(&self, total_available_width: u16, progresses: &[Progress]) -> Vec<u16> {
        let full = total_available_width.saturating_sub(self.chrome_width);
        let max_total = progresses
            .iter()
            .map(|p| p.total_seconds)
            .fold(0.0_f64, f64::max);

        if max_total <= 0.0 {
            return vec![0; progresses.len()];
        }

        progresses
            .iter()
            .map(|p| {
                let share = (p.total_seconds.max(0.0) / max_total).min(1.0);
                (f64::from(full) * share).floor() as u16
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn progress(total_seconds: f64) -> Progress {
        Progress {
            elapsed_seconds: 0.0,
            total_seconds,
        }
    }

    #[test]
    fn test_widest_bar_fills_available_width() {
        let allocator = WidthAllocator::new(10);
        let widths = allocator.allocate_widths(90, &[progress(57_600.0), progress(28_800.0)]);
        assert_eq!(widths, vec![80, 40]);
    }

    #[test]
    fn test_widths_are_proportional_and_bounded() {
        let allocator = WidthAllocator::new(0);
        let widths = allocator.allocate_widths(
            100,
            &[progress(12_600.0), progress(30_600.0), progress(43_200.0)],
        );
        assert_eq!(widths[2], 100);
        assert_eq!(widths[0], 29); // 100 * 12600 / 43200 = 29.16
        assert_eq!(widths[1], 70); // 100 * 30600 / 43200 = 70.83
        assert!(widths.iter().all(|&w| w <= widths[2]));
    }

    #[test]
    fn test_measure_captures_chrome_once() {
        let allocator = WidthAllocator::measure(10, 2);
        assert_eq!(allocator.chrome_width(), 12);

        // The same offset applies at any later width.
        let widths = allocator.allocate_widths(120, &[progress(10.0)]);
        assert_eq!(widths, vec![108]);
    }

    #[test]
    fn test_chrome_wider_than_container() {
        let allocator = WidthAllocator::new(30);
        let widths = allocator.allocate_widths(20, &[progress(10.0), progress(5.0)]);
        assert_eq!(widths, vec![0, 0]);
    }

    #[test]
    fn test_zero_totals_yield_zero_widths() {
        let allocator = WidthAllocator::new(0);
        assert_eq!(allocator.allocate_widths(50, &[progress(0.0)]), vec![0]);
        assert!(allocator.allocate_widths(50, &[]).is_empty());
    }
}
