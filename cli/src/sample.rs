use std::path::Path;

use anyhow::Context;
use market::Stock;

/// The GBCE sample catalog.
pub fn sample_stocks() -> Vec<Stock> {
    vec![
        Stock::common("TEA", 0.0),
        Stock::common("POP", 8.0),
        Stock::common("ALE", 23.0),
        Stock::preferred("GIN", 8.0, 2.0, 100.0),
        Stock::common("JOE", 13.0),
    ]
}

/// Load a catalog from a JSON array of stocks.
pub fn load_catalog(path: &Path) -> anyhow::Result<Vec<Stock>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading stock catalog {}", path.display()))?;

    parse_catalog(&raw).with_context(|| format!("parsing stock catalog {}", path.display()))
}

fn parse_catalog(raw: &str) -> anyhow::Result<Vec<Stock>> {
    let stocks: Vec<Stock> = serde_json::from_str(raw)?;
    anyhow::ensure!(!stocks.is_empty(), "catalog lists no stocks");

    for stock in &stocks {
        stock.validate()?;
    }
    Ok(stocks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use market::StockClass;

    #[test]
    fn sample_has_one_preferred_stock() {
        let stocks = sample_stocks();

        assert_eq!(stocks.len(), 5);
        let preferred: Vec<_> = stocks
            .iter()
            .filter(|s| matches!(s.class, StockClass::Preferred { .. }))
            .map(|s| s.symbol.as_str())
            .collect();
        assert_eq!(preferred, ["GIN"]);
    }

    #[test]
    fn parses_json_catalog() {
        let stocks = parse_catalog(
            r#"[
                {"symbol": "TEA", "class": {"type": "common"}},
                {"symbol": "GIN", "last_dividend": 8, "class": {"type": "preferred", "fixed_dividend_pct": 2, "par_value": 100}}
            ]"#,
        )
        .unwrap();

        assert_eq!(stocks[0], Stock::common("TEA", 0.0));
        assert_eq!(stocks[1], Stock::preferred("GIN", 8.0, 2.0, 100.0));
    }

    #[test]
    fn empty_catalog_is_an_error() {
        assert!(parse_catalog("[]").is_err());
        assert!(parse_catalog("{").is_err());
    }

    #[test]
    fn catalog_with_negative_par_value_is_an_error() {
        let err = parse_catalog(
            r#"[{"symbol": "GIN", "last_dividend": 8, "class": {"type": "preferred", "fixed_dividend_pct": 2, "par_value": -100}}]"#,
        )
        .unwrap_err();

        assert!(err.to_string().contains("par_value"));
    }

    #[test]
    fn sample_catalog_is_valid() {
        assert!(sample_stocks().iter().all(|s| s.validate().is_ok()));
    }

    #[test]
    fn missing_file_mentions_path() {
        let err = load_catalog(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(format!("{err:#}").contains("/definitely/not/here.json"));
    }
}
