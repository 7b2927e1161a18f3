use dice_sim_core::RollPercentages;
use std::fmt::Write;

pub(crate) const MIN_HEIGHT: usize = 8;
pub(crate) const MAX_HEIGHT: usize = 30;

const AXIS_WIDTH: usize = 8;
const COL_WIDTH: usize = 8;
const GRID_EVERY: usize = 4;
const BAR: &str = "████";

/// Vertical bar chart of the percentage of rolls per sum
pub(crate) struct Chart<'a> {
    percentages: &'a RollPercentages,
    num_rolls: u64,
    height: usize,
    color: bool,
}

impl<'a> Chart<'a> {
    pub(crate) fn new(percentages: &'a RollPercentages, num_rolls: u64) -> Self {
        Self {
            percentages,
            num_rolls,
            height: MIN_HEIGHT * 2,
            color: false,
        }
    }

    /// Number of rows used by the bars, clamped to a readable range
    pub(crate) fn height(mut self, height: usize) -> Self {
        self.height = height.clamp(MIN_HEIGHT, MAX_HEIGHT);
        self
    }

    pub(crate) fn color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub(crate) fn title(&self) -> String {
        format!("Simulated Dice Roll Probabilities ({} Rolls)", self.num_rolls)
    }

    // the tallest bar leaves one row free above it for its label
    fn bar_heights(&self) -> Vec<(u8, f64, usize)> {
        let max = self
            .percentages
            .iter()
            .map(|(_, pct)| pct)
            .fold(0.0, f64::max);
        let usable = (self.height - 1) as f64;

        self.percentages
            .iter()
            .map(|(sum, pct)| {
                let rows = if max > 0.0 {
                    (pct / max * usable).round() as usize
                } else {
                    0
                };
                (sum, pct, rows)
            })
            .collect()
    }

    fn tick_value(&self, row: usize) -> f64 {
        let max = self
            .percentages
            .iter()
            .map(|(_, pct)| pct)
            .fold(0.0, f64::max);
        max * row as f64 / (self.height - 1) as f64
    }

    pub(crate) fn render(&self, o: &mut impl Write) -> std::fmt::Result {
        use owo_colors::OwoColorize;

        let bars = self.bar_heights();
        let plot_width = COL_WIDTH * bars.len();

        let title = self.title();
        if self.color {
            writeln!(o, "{:^width$}", title.bold(), width = AXIS_WIDTH + plot_width)?;
        } else {
            writeln!(o, "{:^width$}", title, width = AXIS_WIDTH + plot_width)?;
        }
        writeln!(o)?;
        writeln!(o, "Percentage of Rolls")?;

        for row in (1..=self.height).rev() {
            let is_tick = row % GRID_EVERY == 0;
            if is_tick {
                write!(o, "{:>6.1} ┤", self.tick_value(row))?;
            } else {
                write!(o, "{:>7}│", "")?;
            }

            for &(_, pct, rows) in &bars {
                if rows >= row {
                    if self.color {
                        write!(o, "  {}  ", BAR.cyan())?;
                    } else {
                        write!(o, "  {BAR}  ")?;
                    }
                } else if rows + 1 == row {
                    write!(o, "{:^width$}", format!("{pct:.2}%"), width = COL_WIDTH)?;
                } else if is_tick {
                    write!(o, "{}", "- ".repeat(COL_WIDTH / 2))?;
                } else {
                    write!(o, "{:width$}", "", width = COL_WIDTH)?;
                }
            }
            writeln!(o)?;
        }

        writeln!(o, "{:>7}└{}", "", "─".repeat(plot_width))?;
        write!(o, "{:width$}", "", width = AXIS_WIDTH)?;
        for &(sum, _, _) in &bars {
            write!(o, "{:^width$}", sum, width = COL_WIDTH)?;
        }
        writeln!(o)?;
        writeln!(
            o,
            "{:^width$}",
            "Sum of Two Dice",
            width = AXIS_WIDTH + plot_width
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dice_sim_core::{expected_percentages, to_percentages, RollCounts};
    use test_case::test_case;

    fn render(chart: &Chart) -> String {
        let mut o = String::new();
        chart.render(&mut o).unwrap();
        o
    }

    // the cell of the given bucket on one line of the plot
    fn cell(line: &str, bucket: usize) -> String {
        line.chars()
            .skip(AXIS_WIDTH + bucket * COL_WIDTH)
            .take(COL_WIDTH)
            .collect()
    }

    // lines holding the bars, top to bottom
    fn plot_lines(out: &str, height: usize) -> Vec<&str> {
        out.lines().skip(3).take(height).collect()
    }

    #[test]
    fn title_embeds_roll_count() {
        let pcts = expected_percentages();
        let out = render(&Chart::new(&pcts, 10_000));
        let first = out.lines().next().unwrap();
        pretty_assertions::assert_eq!(first.trim(), "Simulated Dice Roll Probabilities (10000 Rolls)");
        assert!(out.contains("Percentage of Rolls"));
        pretty_assertions::assert_eq!(out.lines().last().unwrap().trim(), "Sum of Two Dice");
    }

    #[test]
    fn x_axis_lists_sums_in_order() {
        let pcts = expected_percentages();
        let out = render(&Chart::new(&pcts, 36));
        let axis = out.lines().rev().nth(1).unwrap();
        let sums: Vec<u8> = axis
            .split_whitespace()
            .map(|s| s.parse().unwrap())
            .collect();
        pretty_assertions::assert_eq!(sums, (2..=12).collect::<Vec<_>>());
    }

    #[test]
    fn every_bar_is_labeled() {
        let pcts = expected_percentages();
        let out = render(&Chart::new(&pcts, 36));
        for (_, pct) in pcts.iter() {
            assert!(out.contains(&format!("{pct:.2}%")), "missing label {pct:.2}%");
        }
    }

    #[test]
    fn single_bucket_fills_the_plot() {
        let counts = RollCounts::from_array([0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0]);
        let pcts = to_percentages(&counts, 1).unwrap();
        let height = 10;
        let out = render(&Chart::new(&pcts, 1).height(height));
        let lines = plot_lines(&out, height);

        pretty_assertions::assert_eq!(cell(lines[0], 5).trim(), "100.00%");
        for line in &lines[1..] {
            pretty_assertions::assert_eq!(cell(line, 5).trim(), BAR);
        }
        // the empty buckets only show their label on the bottom row
        pretty_assertions::assert_eq!(cell(lines[height - 1], 0).trim(), "0.00%");
        pretty_assertions::assert_eq!(cell(lines[height - 2], 0).trim().trim_matches('-').trim(), "");
    }

    #[test]
    fn taller_bars_for_larger_percentages() {
        let pcts = expected_percentages();
        let height = 20;
        let out = render(&Chart::new(&pcts, 36).height(height));
        let lines = plot_lines(&out, height);

        let bar_rows = |bucket| {
            lines
                .iter()
                .filter(|line| cell(line, bucket).trim() == BAR)
                .count()
        };
        pretty_assertions::assert_eq!(bar_rows(5), height - 1);
        assert!(bar_rows(0) < bar_rows(1));
        assert!(bar_rows(4) < bar_rows(5));
        pretty_assertions::assert_eq!(bar_rows(4), bar_rows(6));
        pretty_assertions::assert_eq!(bar_rows(0), bar_rows(10));
    }

    #[test_case(0 => MIN_HEIGHT)]
    #[test_case(12 => 12)]
    #[test_case(100 => MAX_HEIGHT)]
    fn height_is_clamped(height: usize) -> usize {
        let pcts = expected_percentages();
        let out = render(&Chart::new(&pcts, 36).height(height));
        // title, blank line, y label, then the plot, axis, sums and x label
        out.lines().count() - 6
    }
}
