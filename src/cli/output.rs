use crate::{VariationGroup, VariationTable};
use colored::*;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    inputs: usize,
    total_variations: usize,
    groups: &'a [VariationGroup],
}

pub fn print_groups(
    groups: &[VariationGroup],
    colored_output: bool,
    format: &OutputFormat,
) -> serde_json::Result<()> {
    match format {
        OutputFormat::Text => {
            print_text_groups(groups, colored_output);
            Ok(())
        }
        OutputFormat::Json => print_json_groups(groups),
    }
}

fn print_text_groups(groups: &[VariationGroup], colored_output: bool) {
    for group in groups {
        if colored_output {
            println!("{}", group.input.bold().underline());
        } else {
            println!("{}", group.input);
        }

        for variation in &group.variations {
            if colored_output && variation == &group.input {
                println!("  {}", variation.dimmed());
            } else if colored_output {
                println!("  {}", variation.green());
            } else {
                println!("  {}", variation);
            }
        }
    }
}

fn print_json_groups(groups: &[VariationGroup]) -> serde_json::Result<()> {
    let output = JsonOutput {
        inputs: groups.len(),
        total_variations: groups.iter().map(|g| g.variations.len()).sum(),
        groups,
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn print_table(
    table: &VariationTable,
    colored_output: bool,
    format: &OutputFormat,
) -> serde_json::Result<()> {
    match format {
        OutputFormat::Text => {
            let rendered = table.to_string();
            let mut lines = rendered.lines();
            if let Some(header) = lines.next() {
                if colored_output {
                    println!("{}", header.bold());
                } else {
                    println!("{}", header);
                }
            }
            for line in lines {
                println!("{}", line);
            }
            Ok(())
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(table)?);
            Ok(())
        }
    }
}

/// Summary goes to stderr so stdout stays a clean list of variations.
pub fn print_summary(total_variations: usize, inputs: usize, colored: bool) {
    let variation_word = if total_variations == 1 {
        "variation"
    } else {
        "variations"
    };
    let input_word = if inputs == 1 { "input" } else { "inputs" };

    if colored {
        eprintln!(
            "{} {} {} from {} {}",
            "✓".green().bold(),
            total_variations.to_string().green().bold(),
            variation_word,
            inputs,
            input_word
        );
    } else {
        eprintln!(
            "✓ {} {} from {} {}",
            total_variations, variation_word, inputs, input_word
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parsing() {
        assert!(matches!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json)));
        assert!(matches!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text)));
        assert!("yaml".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }

    #[test]
    fn test_json_shape() {
        let groups = vec![VariationGroup {
            input: "a_b".to_string(),
            variations: vec!["a_b".to_string(), "b_a".to_string()],
        }];
        let output = JsonOutput {
            inputs: groups.len(),
            total_variations: 2,
            groups: &groups,
        };
        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(value["total_variations"], 2);
        assert_eq!(value["groups"][0]["variations"][1], "b_a");
    }
}
