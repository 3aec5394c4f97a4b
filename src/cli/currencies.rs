use super::ui;
use crate::core::rates::RateProvider;
use anyhow::Result;
use comfy_table::Cell;

/// Lists every currency the provider offers, in code order.
pub async fn run(provider: &dyn RateProvider) -> Result<()> {
    let catalog = provider.fetch_catalog().await?;

    let mut table = ui::new_styled_table();
    table.set_header(vec![ui::header_cell("Code"), ui::header_cell("Name")]);
    for (code, name) in &catalog {
        table.add_row(vec![Cell::new(code), Cell::new(name)]);
    }
    println!("{table}");

    Ok(())
}
