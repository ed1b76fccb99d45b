use anyhow::Result;
use tokcount_config::Config;
use tokcount_core::ModelPrice;

pub fn handle(config: &Config) -> Result<()> {
    let pricing = config.pricing_table()?;
    let default = config
        .default_model
        .as_deref()
        .or(pricing.default_model())
        .unwrap_or_default();

    print!("{}", render_table(&pricing.rows(), default));
    Ok(())
}

fn render_table(rows: &[ModelPrice], default: &str) -> String {
    let width = rows.iter().map(|r| r.model.len()).max().unwrap_or(0);

    let mut out = String::from("Models ($ per 1K tokens):\n");
    for row in rows {
        let marker = if row.model == default { "*" } else { " " };
        out.push_str(&format!(
            "{} {:<width$}  {}\n",
            marker,
            row.model,
            row.price_per_1k,
            width = width
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokcount_core::PricingTable;

    #[test]
    fn test_render_table_marks_default() {
        let table = PricingTable::from_rows([("gpt-4", 0.03), ("ada", 0.0004)]).unwrap();
        let out = render_table(&table.rows(), "ada");

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "  gpt-4  0.03");
        assert_eq!(lines[2], "* ada    0.0004");
    }
}
