use clap::Parser;
use mock_orders::adapters::{export, render::TracingRenderer};
use mock_orders::utils::error::{ErrorSeverity, OrderError};
use mock_orders::utils::{logger, validation::Validate};
use mock_orders::{apply_action, ActionOutcome, CliConfig, OrderFeed, OrderStore};
use std::cell::RefCell;
use std::rc::Rc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliConfig::parse();

    // 初始化日誌
    if args.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("🚀 Starting mock-orders");
    if args.verbose {
        tracing::debug!("CLI config: {:?}", args);
    }

    let config = match args.resolve().and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let mut generator = config.build_generator();
    let mut store = OrderStore::new(config.count(), &mut generator);

    // 畫面端持有的列表，透過 listener 與 store 同步
    let feed = Rc::new(RefCell::new(OrderFeed::new(TracingRenderer)));
    let feed_handle = Rc::clone(&feed);
    let listener = store.add_listener(move |orders| {
        let script = feed_handle.borrow_mut().set_data(orders.clone());
        tracing::info!("📋 {} orders shown ({})", orders.len(), script.stats());
    });

    let mut worst: Option<ErrorSeverity> = None;
    for action in &args.actions {
        match apply_action(&mut store, &*feed, *action) {
            Ok(ActionOutcome::Message(message)) => {
                tracing::info!("💬 {}", message);
                println!("{}", message);
            }
            Ok(ActionOutcome::Applied) => tracing::debug!("✅ {} applied", action),
            Ok(ActionOutcome::Ignored) => tracing::warn!("⚠️ {} ignored: unknown order", action),
            Ok(ActionOutcome::Skipped(reason)) => {
                tracing::warn!("⏭️ {} skipped: {}", action, reason)
            }
            Err(e) => {
                report(&e);
                worst = worst.max(Some(e.severity()));
            }
        }
    }

    store.remove_listener(listener);
    tracing::debug!("Feed holds {} rows", feed.borrow().len());

    let orders = store.orders();
    let liked = orders.iter().filter(|order| order.is_liked).count();
    tracing::info!("📊 {} orders, {} liked", orders.len(), liked);
    println!("✅ {} orders, {} liked", orders.len(), liked);

    if let Some(export_config) = config.export() {
        match export::write_orders(&export_config.output_path, &orders, export_config.format) {
            Ok(path) => {
                tracing::info!("📁 Orders exported to: {}", path.display());
                println!("📁 Orders exported to: {}", path.display());
            }
            Err(e) => {
                report(&e);
                worst = worst.max(Some(e.severity()));
            }
        }
    }

    let exit_code = match worst {
        None | Some(ErrorSeverity::Low) => 0,
        Some(ErrorSeverity::Medium) => 2,
        Some(ErrorSeverity::High) => 1,
        Some(ErrorSeverity::Critical) => 3,
    };
    if exit_code > 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}

fn report(e: &OrderError) {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
}
