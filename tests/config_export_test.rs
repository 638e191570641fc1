use anyhow::Result;
use mock_orders::adapters::export::{self, ExportFormat, OrderSnapshot};
use mock_orders::utils::validation::Validate;
use mock_orders::{OrderConfig, OrderError, OrderStore};
use tempfile::TempDir;

#[test]
fn test_config_file_drives_seed_data() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("orders.toml");
    std::fs::write(
        &config_path,
        r#"
[seed]
count = 6
rng_seed = 11
images = ["https://example.com/a.jpg", "https://example.com/b.jpg"]

[names]
first_names = ["Grace"]
last_names = ["Hopper"]
company_suffixes = ["Inc"]
"#,
    )?;

    let config = OrderConfig::from_file(&config_path)?;
    config.validate()?;

    let mut generator = config.build_generator();
    let store = OrderStore::new(config.count(), &mut generator);
    let orders = store.orders();

    assert_eq!(orders.len(), 6);
    assert!(orders.iter().all(|order| order.name == "Grace Hopper"));
    assert_eq!(orders[0].photo, "https://example.com/b.jpg");
    assert_eq!(orders[1].photo, "https://example.com/a.jpg");
    Ok(())
}

#[test]
fn test_same_seed_same_store() -> Result<()> {
    let config = OrderConfig::from_toml_str("[seed]\ncount = 20\nrng_seed = 5\n")?;

    let first = OrderStore::new(config.count(), &mut config.build_generator()).orders();
    let second = OrderStore::new(config.count(), &mut config.build_generator()).orders();

    assert_eq!(&*first, &*second);
    Ok(())
}

#[test]
fn test_env_var_substitution() -> Result<()> {
    std::env::set_var("MOCK_ORDERS_TEST_IMAGE_HOST", "https://cdn.example.com");
    let config = OrderConfig::from_toml_str(
        "[seed]\nimages = [\"${MOCK_ORDERS_TEST_IMAGE_HOST}/1.jpg\"]\n",
    )?;

    assert_eq!(
        config.seed.images.as_deref(),
        Some(&["https://cdn.example.com/1.jpg".to_string()][..])
    );
    config.validate()?;
    Ok(())
}

#[test]
fn test_missing_config_file_is_io_error() {
    let result = OrderConfig::from_file("/definitely/not/here/orders.toml");
    assert!(matches!(result, Err(OrderError::IoError(_))));
}

#[test]
fn test_export_json_into_directory() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = OrderConfig::from_toml_str("[seed]\ncount = 3\nrng_seed = 1\n")?;
    let mut store = OrderStore::new(config.count(), &mut config.build_generator());
    store.like_order(2);

    let path = export::write_orders(temp_dir.path(), &store.orders(), ExportFormat::Json)?;
    assert_eq!(path, temp_dir.path().join("orders.json"));

    let snapshot: OrderSnapshot = serde_json::from_slice(&std::fs::read(&path)?)?;
    assert_eq!(snapshot.count, 3);
    assert_eq!(snapshot.liked, 1);
    assert_eq!(snapshot.orders, store.orders().to_vec());
    Ok(())
}

#[test]
fn test_export_csv_to_nested_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let target = temp_dir.path().join("nested").join("list.csv");
    let config = OrderConfig::from_toml_str("[seed]\ncount = 4\nrng_seed = 9\n")?;
    let store = OrderStore::new(config.count(), &mut config.build_generator());

    let path = export::write_orders(&target, &store.orders(), ExportFormat::Csv)?;
    let text = std::fs::read_to_string(path)?;

    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let rows: Vec<mock_orders::Order> = reader.deserialize().collect::<Result<_, _>>()?;
    assert_eq!(rows, store.orders().to_vec());
    Ok(())
}
