// Text rendering of benchmark results

use super::suite::{BenchmarkResult, Implementation, Operation};

/// One block per result under a title
pub fn format_results(title: &str, results: &[BenchmarkResult]) -> String {
    let mut out = format!("=== {} ===\n", title);
    for result in results {
        out.push_str(&format!("\n--- {} ---\n{}\n", result.label, result.summary));
    }
    out
}

fn mean_of(results: &[BenchmarkResult], implementation: Implementation, operation: Operation) -> Option<f64> {
    results
        .iter()
        .find(|r| r.implementation == implementation && r.operation == operation)
        .map(|r| r.summary.mean)
}

/// Mean time per operation for each implementation, with the textbook/library ratio
pub fn format_comparison(results: &[BenchmarkResult]) -> String {
    let mut out = String::from("=== Performance comparison (mean) ===\n");
    out.push_str(&format!(
        "{:<16} {:>20} {:>20} {:>10}\n",
        "Operation", "Textbook (ns)", "Library (ns)", "Ratio"
    ));

    for operation in [Operation::KeyGeneration, Operation::Encryption, Operation::Decryption] {
        let textbook = mean_of(results, Implementation::Textbook, operation);
        let library = mean_of(results, Implementation::Library, operation);
        if textbook.is_none() && library.is_none() {
            continue;
        }

        let cell = |mean: Option<f64>| mean.map_or_else(|| "-".to_string(), |m| format!("{:.2}", m));
        let ratio = match (textbook, library) {
            (Some(t), Some(l)) if l > 0.0 => format!("{:.2}x", t / l),
            _ => "-".to_string(),
        };

        out.push_str(&format!(
            "{:<16} {:>20} {:>20} {:>10}\n",
            operation.to_string(),
            cell(textbook),
            cell(library),
            ratio
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bench::stats::summarize;

    fn result(implementation: Implementation, operation: Operation, value: f64) -> BenchmarkResult {
        BenchmarkResult {
            implementation,
            operation,
            label: format!("{} {}", implementation, operation),
            summary: summarize(&[value, value]).unwrap(),
        }
    }

    #[test]
    fn test_format_results() {
        let results = vec![result(Implementation::Textbook, Operation::Encryption, 10.0)];
        let text = format_results("Textbook RSA", &results);

        assert!(text.starts_with("=== Textbook RSA ==="));
        assert!(text.contains("--- Textbook RSA Encryption ---"));
        assert!(text.contains("Mean: 10.00 ns"));
    }

    #[test]
    fn test_format_comparison_ratio() {
        let results = vec![
            result(Implementation::Textbook, Operation::Decryption, 300.0),
            result(Implementation::Library, Operation::Decryption, 100.0),
        ];
        let text = format_comparison(&results);

        assert!(text.contains("Decryption"));
        assert!(text.contains("3.00x"));
        assert!(!text.contains("Key generation"));
    }

    #[test]
    fn test_format_comparison_one_sided() {
        let results = vec![result(Implementation::Textbook, Operation::KeyGeneration, 5.0)];
        let text = format_comparison(&results);
        let row = text.lines().find(|l| l.starts_with("Key generation")).unwrap();
        assert!(row.contains("5.00"));
        assert!(row.trim_end().ends_with('-'));
    }
}
