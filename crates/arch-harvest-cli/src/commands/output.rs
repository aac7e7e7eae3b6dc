//! Dataset writing and scan statistics reporting.

use anyhow::Result;
use arch_harvest_core::{FileRecord, ScanSummary};
use std::collections::BTreeMap;
use std::path::Path;

use crate::OutputFormat;

/// Writes the dataset in the requested format.
///
/// The record struct's field order is the CSV column order; it is stable
/// run-to-run because the downstream trainer consumes it by position.
pub fn write(records: &[FileRecord], path: &Path, format: OutputFormat) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    match format {
        OutputFormat::Csv => write_csv(records, path),
        OutputFormat::Json => write_json(records, path),
    }
}

fn write_csv(records: &[FileRecord], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

fn write_json(records: &[FileRecord], path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Prints the distribution statistics for one scan.
pub fn print_summary(summary: &ScanSummary, dataset_path: &Path) {
    println!("Dataset written to {}", dataset_path.display());
    println!(
        "{} record(s) from {} file(s) across {} repositories",
        summary.records, summary.files_seen, summary.repositories
    );

    print_distribution("Architecture patterns", &summary.styles);
    print_distribution("Layers", &summary.layers);
    print_distribution("Anti-patterns", &summary.anti_patterns);
    print_distribution("Labels", &summary.labels);
    print_distribution("Severities", &summary.severities);
}

fn print_distribution(title: &str, counts: &BTreeMap<String, usize>) {
    if counts.is_empty() {
        return;
    }
    println!("\n{title}:");
    for (key, count) in counts {
        println!("  {key:<55} {count}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arch_harvest_core::{DirectionVerdict, Layer, Severity, Style};
    use tempfile::TempDir;

    fn sample_record() -> FileRecord {
        FileRecord {
            file: "OrderService.java".to_string(),
            repo: "shop".to_string(),
            layer: Layer::Service,
            architecture_pattern: Style::Layered,
            architecture_confidence: 0.75,
            loc: 40,
            methods: 3,
            classes: 1,
            avg_cc: 1.67,
            imports: 4,
            annotations: 2,
            controller_deps: 0,
            service_deps: 0,
            repository_deps: 1,
            entity_deps: 0,
            adapter_deps: 0,
            port_deps: 0,
            usecase_deps: 0,
            gateway_deps: 0,
            total_cross_layer_deps: 1,
            has_business_logic: true,
            has_data_access: true,
            has_http_handling: false,
            has_validation: false,
            has_transaction: true,
            dependency_direction: DirectionVerdict::Correct,
            violates_layer_separation: false,
            anti_pattern: "clean".to_string(),
            all_violations: "clean".to_string(),
            severity: Severity::Low,
            context_specific_label: "clean_layered_service".to_string(),
        }
    }

    #[test]
    fn csv_header_is_the_stable_column_set() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("dataset.csv");
        write(&[sample_record()], &path, OutputFormat::Csv).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let header = content.lines().next().unwrap();
        assert_eq!(
            header,
            "file,repo,layer,architecture_pattern,architecture_confidence,\
             loc,methods,classes,avg_cc,imports,annotations,\
             controller_deps,service_deps,repository_deps,entity_deps,\
             adapter_deps,port_deps,usecase_deps,gateway_deps,\
             total_cross_layer_deps,has_business_logic,has_data_access,\
             has_http_handling,has_validation,has_transaction,\
             dependency_direction,violates_layer_separation,anti_pattern,\
             all_violations,severity,context_specific_label"
        );
    }

    #[test]
    fn csv_rows_use_dataset_vocabulary() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("dataset.csv");
        write(&[sample_record()], &path, OutputFormat::Csv).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let row = content.lines().nth(1).unwrap();
        assert!(row.starts_with("OrderService.java,shop,service,layered,0.75,"));
        assert!(row.contains(",correct,false,clean,clean,low,clean_layered_service"));
    }

    #[test]
    fn json_output_round_trips() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("dataset.json");
        write(&[sample_record()], &path, OutputFormat::Json).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: Vec<FileRecord> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, vec![sample_record()]);
    }

    #[test]
    fn missing_parent_directories_are_created() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested/out/dataset.csv");
        write(&[sample_record()], &path, OutputFormat::Csv).unwrap();
        assert!(path.exists());
    }
}
