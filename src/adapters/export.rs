use crate::domain::model::Order;
use crate::utils::error::{OrderError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = OrderError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            other => Err(OrderError::InvalidConfigValueError {
                field: "export.format".to_string(),
                value: other.to_string(),
                reason: "Valid formats: json, csv".to_string(),
            }),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OrderSnapshot {
    pub exported_at: DateTime<Utc>,
    pub count: usize,
    pub liked: usize,
    pub orders: Vec<Order>,
}

impl OrderSnapshot {
    pub fn new(orders: &[Order]) -> Self {
        Self {
            exported_at: Utc::now(),
            count: orders.len(),
            liked: orders.iter().filter(|order| order.is_liked).count(),
            orders: orders.to_vec(),
        }
    }
}

pub fn render_orders(orders: &[Order], format: ExportFormat) -> Result<Vec<u8>> {
    match format {
        ExportFormat::Json => Ok(serde_json::to_vec_pretty(&OrderSnapshot::new(orders))?),
        ExportFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            for order in orders {
                writer.serialize(order)?;
            }
            writer.into_inner().map_err(|e| {
                let source = e.error();
                OrderError::IoError(std::io::Error::new(source.kind(), source.to_string()))
            })
        }
    }
}

/// Writes the orders to `path`; a directory gets `orders.<ext>` appended.
pub fn write_orders<P: AsRef<Path>>(
    path: P,
    orders: &[Order],
    format: ExportFormat,
) -> Result<PathBuf> {
    let path = path.as_ref();
    let target = if path.is_dir() {
        path.join(format!("orders.{}", format.extension()))
    } else {
        path.to_path_buf()
    };

    if let Some(parent) = target.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let data = render_orders(orders, format)?;
    tracing::debug!("Writing {} bytes to {}", data.len(), target.display());
    fs::write(&target, data)?;
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Order> {
        vec![
            Order::new(1, "Ada Lovelace", "Engines Ltd", "https://example.com/1"),
            Order::new(2, "Alan Turing", "Turing, Church and Post", "https://example.com/2")
                .toggled_like(),
        ]
    }

    #[test]
    fn test_csv_has_header_and_rows() {
        let data = render_orders(&sample(), ExportFormat::Csv).unwrap();
        let text = String::from_utf8(data).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "id,name,company_name,photo,is_liked");
        assert_eq!(lines.len(), 3);
        assert!(lines[2].contains("\"Turing, Church and Post\""));
        assert!(lines[2].ends_with("true"));
    }

    #[test]
    fn test_json_snapshot_counts() {
        let data = render_orders(&sample(), ExportFormat::Json).unwrap();
        let snapshot: OrderSnapshot = serde_json::from_slice(&data).unwrap();

        assert_eq!(snapshot.count, 2);
        assert_eq!(snapshot.liked, 1);
        assert_eq!(snapshot.orders, sample());
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("JSON".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert!("xml".parse::<ExportFormat>().is_err());
    }
}
