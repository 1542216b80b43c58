use anyhow::Result;
use colored::Colorize;
use serde_json::Value;

pub fn compare_json(
    actual: &Value,
    expected: &Value,
    ignore_fields: &[&str],
) -> Result<ComparisonResult> {
    let mut differences = Vec::new();

    compare_json_recursive(actual, expected, ignore_fields, "", &mut differences);

    if differences.is_empty() {
        Ok(ComparisonResult::Match)
    } else {
        Ok(ComparisonResult::Mismatch { differences })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Difference {
    ValueMismatch {
        path: String,
        expected: Value,
        actual: Value,
    },
    MissingField {
        path: String,
    },
    ExtraField {
        path: String,
    },
}

impl Difference {
    pub fn path(&self) -> &str {
        match self {
            Difference::ValueMismatch { path, .. } => path,
            Difference::MissingField { path } => path,
            Difference::ExtraField { path } => path,
        }
    }
}

fn join_path(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", path, key)
    }
}

fn compare_json_recursive(
    actual: &Value,
    expected: &Value,
    ignore_fields: &[&str],
    path: &str,
    differences: &mut Vec<Difference>,
) {
    match (actual, expected) {
        (Value::Object(actual_obj), Value::Object(expected_obj)) => {
            for (key, expected_val) in expected_obj.iter() {
                let current_path = join_path(path, key);

                if ignore_fields.iter().any(|&field| current_path == field) {
                    continue;
                }

                if let Some(actual_val) = actual_obj.get(key) {
                    compare_json_recursive(
                        actual_val,
                        expected_val,
                        ignore_fields,
                        &current_path,
                        differences,
                    );
                } else {
                    differences.push(Difference::MissingField {
                        path: current_path,
                    });
                }
            }

            // Records omit `error` on success, so an extra key is a real change
            for key in actual_obj.keys() {
                if !expected_obj.contains_key(key) {
                    let current_path = join_path(path, key);
                    if ignore_fields.iter().any(|&field| current_path == field) {
                        continue;
                    }
                    differences.push(Difference::ExtraField {
                        path: current_path,
                    });
                }
            }
        }
        (actual_val, expected_val) => {
            if actual_val != expected_val {
                differences.push(Difference::ValueMismatch {
                    path: path.to_string(),
                    expected: expected_val.clone(),
                    actual: actual_val.clone(),
                });
            }
        }
    }
}

#[derive(Debug)]
pub enum ComparisonResult {
    Match,
    Mismatch { differences: Vec<Difference> },
}

impl ComparisonResult {
    pub fn is_match(&self) -> bool {
        matches!(self, ComparisonResult::Match)
    }

    pub fn differences(&self) -> &[Difference] {
        match self {
            ComparisonResult::Match => &[],
            ComparisonResult::Mismatch { differences } => differences,
        }
    }

    /// Format differences with colored output, one line per side
    pub fn format_diff(&self, name: &str) -> String {
        match self {
            ComparisonResult::Match => String::new(),
            ComparisonResult::Mismatch { differences } => {
                let mut output = Vec::new();

                output.push(format!("\n{}", "=".repeat(80).bright_white()));
                output.push(format!(
                    "{} {}",
                    "RECORD MISMATCH".bright_yellow().bold(),
                    name.bright_white()
                ));
                output.push(format!("{}", "=".repeat(80).bright_white()));

                for diff in differences {
                    match diff {
                        Difference::ValueMismatch {
                            path,
                            expected,
                            actual,
                        } => {
                            output.push(format!("- \"{}\": {}", path, actual).red().to_string());
                            output.push(format!("+ \"{}\": {}", path, expected).green().to_string());
                        }
                        Difference::MissingField { path } => {
                            output.push(format!("+ \"{}\" (missing)", path).green().to_string());
                        }
                        Difference::ExtraField { path } => {
                            output.push(format!("- \"{}\" (unexpected)", path).red().to_string());
                        }
                    }
                }

                output.push(format!("{}", "=".repeat(80).bright_white()));
                output.push(format!(
                    "{} {}",
                    "Total differences:".bright_cyan().bold(),
                    differences.len().to_string().bright_white()
                ));

                output.join("\n")
            }
        }
    }
}
