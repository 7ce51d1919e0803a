//! End-to-end flow: build a quotation the way the editing UI does —
//! add sections and items, recalculate after every edit, then render the
//! grand total for display.

use anyhow::Result;
use procura_calc::{
    classify_product_stock, format_currency, money_eq, recalculate_budget, recalculate_pricing,
    recalculate_quotation, summarize_budgets, validate_line_item,
};
use shared::models::{
    AdjustmentType, BudgetRecord, BudgetStatus, PricingMode, Product, Quotation, QuotationItem,
    QuotationSection, StockStatus,
};
use shared::{CurrencyCode, CurrencyTable};

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("procura_calc=debug")
        .try_init();
}

#[test]
fn quotation_edit_cycle_keeps_totals_consistent() -> Result<()> {
    init_logging();

    let mut quotation = Quotation::new("QT-2026-0142", "Acme Construction", CurrencyCode::Usd);
    quotation.discount_percentage = 5.0;
    quotation.tax_percentage = 21.0;

    // Section 1: two priced items -> subtotal 30850
    let mut civil = QuotationSection::new("Civil works");
    let mut excavation = QuotationItem::new("Excavation and disposal");
    excavation.quantity = 120.0;
    excavation.rate = 250.0;
    excavation.discount = 2_000.0;
    excavation.discount_type = AdjustmentType::Fixed;
    excavation.tax = 10.0;
    excavation.tax_type = AdjustmentType::Percentage;
    validate_line_item(&excavation)?;
    civil.items.push(excavation);

    let mut formwork = QuotationItem::new("Formwork");
    formwork.quantity = 10.0;
    formwork.rate = catalog_rate(5.0);
    civil.items.push(formwork);
    quotation.sections.push(civil);

    // Section 2: single item -> subtotal 10200
    let mut electrical = QuotationSection::new("Electrical");
    let mut cabling = QuotationItem::new("LV cabling");
    cabling.quantity = 1.0;
    cabling.rate = 10_200.0;
    validate_line_item(&cabling)?;
    electrical.items.push(cabling);
    quotation.sections.push(electrical);

    recalculate_quotation(&mut quotation);

    // Section 1: (120*250 - 2000) * 1.10 = 30800, plus 10*5 = 50
    assert_eq!(quotation.sections[0].subtotal, 30_850.0);
    assert_eq!(quotation.sections[1].subtotal, 10_200.0);
    assert_eq!(quotation.subtotal, 41_050.0);
    assert_eq!(quotation.discount_amount, 2_052.5);
    assert_eq!(quotation.tax_amount, 8_189.475);
    assert_eq!(quotation.total_amount, 47_186.975);

    // Edit an item the way a field-change handler does, then re-run
    quotation.sections[1].items[0].rate = 11_000.0;
    recalculate_quotation(&mut quotation);
    assert_eq!(quotation.subtotal, 41_850.0);
    assert!(money_eq(
        quotation.total_amount,
        (41_850.0 - 2_092.5) * 1.21
    ));

    // Display rounding happens only here, never in the stored totals
    let table = CurrencyTable::default();
    assert_eq!(
        format_currency(quotation.total_amount, CurrencyCode::Usd, &table),
        "$48,106.58"
    );

    Ok(())
}

// Rates come from the catalog: price the product first, quote its
// selling price.
fn catalog_rate(cost_price: f64) -> f64 {
    let mut product = Product::new("Formwork panel", "cat:building");
    product.cost_price = cost_price;
    product.margin_percentage = 0.0;
    product.shipping_charges = 0.0;
    product.pricing_mode = PricingMode::Auto;
    recalculate_pricing(&mut product);
    product.selling_price
}

#[test]
fn dashboard_rollup_from_records() -> Result<()> {
    init_logging();

    // Catalog side: stock tiles
    let mut cement = Product::new("Cement 50kg", "cat:building");
    cement.current_stock = 0;
    cement.min_stock_level = 0;
    cement.max_stock_level = 400;
    assert_eq!(classify_product_stock(&cement), StockStatus::OutOfStock);

    // Budget side: overview counters
    let mut budgets = vec![
        BudgetRecord::new("Site works", "cat:ops", 50_000.0, "2026-Q3"),
        BudgetRecord::new("Fleet", "cat:transport", 10_000.0, "2026-Q3"),
    ];
    budgets[0].spent_amount = 46_000.0;
    budgets[1].spent_amount = 10_500.0;
    for budget in &mut budgets {
        recalculate_budget(budget)?;
    }

    assert_eq!(budgets[0].status, BudgetStatus::Critical);
    assert_eq!(budgets[1].status, BudgetStatus::Exceeded);

    let summary = summarize_budgets(&budgets);
    assert_eq!(summary.critical_count, 1);
    assert_eq!(summary.exceeded_count, 1);
    assert_eq!(summary.total_remaining, 3_500.0);

    Ok(())
}
