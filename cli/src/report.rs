use dice_sim_core::RollPercentages;
use std::fmt::Write;

/// Console listing of every sum and its percentage, in ascending order
///
/// When `expected` is given each line also shows the theoretical percentage for that sum.
pub(crate) fn write_report(
    o: &mut impl Write,
    percentages: &RollPercentages,
    expected: Option<&RollPercentages>,
) -> std::fmt::Result {
    writeln!(o)?;
    writeln!(o, "--- Simulation Results ---")?;
    for (sum, pct) in percentages.iter() {
        write!(o, "Roll {sum:2}: {pct:.2}%")?;
        if let Some(exp) = expected.and_then(|e| e.get(sum)) {
            write!(o, " (expected {exp:.2}%)")?;
        }
        writeln!(o)?;
    }
    Ok(())
}
