use crate::error::Result;
use crate::transform::Transform;
use crate::variate::variate_compounds;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

/// Variations of several compounds, one column per compound, kept in the
/// order the compounds were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariationTable {
    columns: Vec<Column>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub compound: String,
    pub variations: Vec<String>,
}

impl VariationTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, compound: &str) -> Option<&[String]> {
        self.columns
            .iter()
            .find(|c| c.compound == compound)
            .map(|c| c.variations.as_slice())
    }

    /// Append variations to the compound's column, creating it on first use.
    pub fn extend<I>(&mut self, compound: &str, variations: I)
    where
        I: IntoIterator<Item = String>,
    {
        match self.columns.iter_mut().find(|c| c.compound == compound) {
            Some(column) => column.variations.extend(variations),
            None => self.columns.push(Column {
                compound: compound.to_string(),
                variations: variations.into_iter().collect(),
            }),
        }
    }

    pub fn row_count(&self) -> usize {
        self.columns
            .iter()
            .map(|c| c.variations.len())
            .max()
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Build a table mapping each compound to its variations under every
/// stitch delimiter in `stitchers`, chained in order.
pub fn variation_table<C, S, T>(
    compounds: C,
    stitchers: S,
    using: T,
    permutate: bool,
    split_at: &str,
) -> Result<VariationTable>
where
    C: IntoIterator,
    C::Item: AsRef<str>,
    S: IntoIterator,
    S::Item: AsRef<str>,
    T: Transform + Clone,
{
    let stitchers: Vec<S::Item> = stitchers.into_iter().collect();
    let mut table = VariationTable::new();

    for compound in compounds {
        let compound = compound.as_ref();
        for stitcher in &stitchers {
            let variations = variate_compounds(
                compound,
                using.clone(),
                permutate,
                split_at,
                stitcher.as_ref(),
            )
            .collect::<Result<Vec<_>>>()?;
            table.extend(compound, variations);
        }
    }

    Ok(table)
}

impl Serialize for VariationTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for column in &self.columns {
            map.serialize_entry(&column.compound, &column.variations)?;
        }
        map.end()
    }
}

/// Right-aligned columns under a row index, one row per variation.
impl fmt::Display for VariationTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.row_count();
        let index_width = rows.saturating_sub(1).to_string().len();
        let widths: Vec<usize> = self
            .columns
            .iter()
            .map(|c| {
                c.variations
                    .iter()
                    .chain(std::iter::once(&c.compound))
                    .map(|s| s.chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        write!(f, "{:index_width$}", "")?;
        for (column, width) in self.columns.iter().zip(&widths) {
            write!(f, "  {:>width$}", column.compound, width = width)?;
        }
        writeln!(f)?;

        for row in 0..rows {
            write!(f, "{:<index_width$}", row)?;
            for (column, width) in self.columns.iter().zip(&widths) {
                let cell = column.variations.get(row).map(String::as_str).unwrap_or("");
                write!(f, "  {:>width$}", cell, width = width)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::Case;

    #[test]
    fn test_table_chains_stitchers() {
        let table = variation_table(
            ["variable_cost", "flow_costs"],
            ["_", " "],
            Case::Capitalize,
            true,
            "_",
        )
        .unwrap();

        assert_eq!(table.columns().len(), 2);
        assert_eq!(table.row_count(), 16);

        let flow = table.column("flow_costs").unwrap();
        assert_eq!(flow[0], "flow_costs");
        assert_eq!(flow[7], "Costs_Flow");
        assert_eq!(flow[8], "flow costs");
        assert_eq!(flow[15], "Costs Flow");
    }

    #[test]
    fn test_repeated_compound_appends() {
        let table = variation_table(["a_b", "a_b"], ["_"], Case::Upper, false, "_").unwrap();
        assert_eq!(table.columns().len(), 1);
        assert_eq!(table.column("a_b").unwrap().len(), 8);
    }

    #[test]
    fn test_table_propagates_errors() {
        let result = variation_table(["a_b"], ["_"], Case::Upper, true, "");
        assert!(result.is_err());
    }

    #[test]
    fn test_json_keeps_column_order() {
        let table = variation_table(["b", "a"], ["_"], Case::Upper, false, "_").unwrap();
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"b":["b","B"],"a":["a","A"]}"#);
    }

    #[test]
    fn test_display() {
        let table = variation_table(["ab_c"], ["_"], Case::Upper, false, "_").unwrap();
        let rendered = table.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "   ab_c");
        assert_eq!(lines[1], "0  ab_c");
        assert_eq!(lines[4], "3  AB_C");
    }
}
