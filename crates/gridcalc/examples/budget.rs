//! Example: Build a small budget sheet with formulas

use gridcalc::prelude::*;

fn main() -> Result<()> {
    let mut sheet = Spreadsheet::new(4, 3);

    // Row A: quantities, row B: unit prices
    sheet.set_cell("A1", "3")?;
    sheet.set_cell("A2", "5")?;
    sheet.set_cell("B1", "2.5")?;
    sheet.set_cell("B2", "4")?;

    // Row C: line totals
    sheet.set_cell("C1", "=A1*B1")?;
    sheet.set_cell("C2", "=A2*B2")?;

    // Row D: grand total
    sheet.set_cell("D1", "=SUM(C1:C2)")?;
    sheet.set_cell("D2", "=D1/0")?;

    println!("{}", sheet.render());

    for label in ["C1", "C2", "D1", "D2"] {
        match sheet.cell_value(label) {
            Ok(value) => println!("{} = {}", label, value),
            Err(e) => println!("{}: {}", label, e),
        }
    }

    Ok(())
}
